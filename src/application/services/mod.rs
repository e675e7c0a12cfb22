mod column_mapper;
mod extraction_service;
mod metadata_inferencer;
mod record_extractor;

pub use column_mapper::ColumnMapper;
pub use extraction_service::{
    ExtractResponse, ExtractionError, ExtractionService, MappingResponse,
};
pub use metadata_inferencer::MetadataInferencer;
pub use record_extractor::{ExtractorError, RecordExtractor};
