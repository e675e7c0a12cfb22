mod category;
mod document;
mod extension;
mod metadata;
mod record;
mod storage_path;

pub use category::{Category, MappingCategory};
pub use document::{Document, DocumentId, DocumentSegment, FileMetadata};
pub use extension::DocumentExtension;
pub use metadata::{DocumentMetadata, SUMMARY_MAX_CHARS};
pub use record::{
    CapitalCallRecord, ColumnMapping, CompanyProfileRecord, ConvertibleLoanRecord, DocumentRecord,
    EquityRoundRecord, OperationalKpis, Sector,
};
pub use storage_path::StoragePath;
