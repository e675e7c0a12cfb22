mod completion_engine;
mod document_parser;
mod staging_store;

pub use completion_engine::{CompletionEngine, CompletionEngineError};
pub use document_parser::{DocumentParser, DocumentParserError};
pub use staging_store::{StagingStore, StagingStoreError};
