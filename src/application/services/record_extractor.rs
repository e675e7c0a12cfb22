use std::sync::Arc;

use crate::application::ports::{CompletionEngine, CompletionEngineError};
use crate::domain::DocumentRecord;
use crate::schema::{RecordSchema, SchemaViolation, conform, parse_completion, record_instruction};

/// Populates a record schema from document text in one structured
/// completion. Optional fields the text does not support come back absent;
/// required fields missing from the text fail the extraction instead of
/// producing a partial record.
pub struct RecordExtractor<C>
where
    C: CompletionEngine,
{
    engine: Arc<C>,
}

impl<C> RecordExtractor<C>
where
    C: CompletionEngine,
{
    pub fn new(engine: Arc<C>) -> Self {
        Self { engine }
    }

    #[tracing::instrument(skip_all, fields(category = %schema.category))]
    pub async fn extract(
        &self,
        document_text: &str,
        schema: &'static RecordSchema,
    ) -> Result<DocumentRecord, ExtractorError> {
        let instruction = record_instruction(schema);
        let completion = self.engine.complete(&instruction, document_text).await?;

        let mut value = parse_completion(&completion)?;
        conform(schema.fields, &mut value)?;

        let record = DocumentRecord::from_conformed(schema.category, value)
            .map_err(|e| SchemaViolation::Deserialize(e.to_string()))?;

        tracing::debug!("Record extracted");
        Ok(record)
    }
}

/// Failure of a single completion-backed extraction step. Shared by the
/// metadata inferencer, the record extractor, and the column mapper.
#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("completion: {0}")]
    Completion(#[from] CompletionEngineError),
    #[error("schema validation: {0}")]
    Schema(#[from] SchemaViolation),
}
