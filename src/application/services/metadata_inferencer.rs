use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::CompletionEngine;
use crate::domain::{Category, DocumentMetadata};
use crate::schema::{SchemaViolation, conform, metadata_fields, metadata_instruction, parse_completion};

use super::record_extractor::ExtractorError;

/// Infers document metadata (category, entities, summary, financial flag)
/// from parsed text with one structured completion.
pub struct MetadataInferencer<C>
where
    C: CompletionEngine,
{
    engine: Arc<C>,
}

/// Wire shape of the metadata completion, before the domain constructor
/// applies its normalization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    category: Category,
    entities: Vec<String>,
    summary: String,
    contains_financials: bool,
}

impl<C> MetadataInferencer<C>
where
    C: CompletionEngine,
{
    pub fn new(engine: Arc<C>) -> Self {
        Self { engine }
    }

    #[tracing::instrument(skip(self, document_text))]
    pub async fn infer(&self, document_text: &str) -> Result<DocumentMetadata, ExtractorError> {
        let instruction = metadata_instruction();
        let completion = self.engine.complete(&instruction, document_text).await?;

        let mut value = parse_completion(&completion)?;
        conform(metadata_fields(), &mut value)?;

        let raw: RawMetadata = serde_json::from_value(value)
            .map_err(|e| SchemaViolation::Deserialize(e.to_string()))?;

        let metadata = DocumentMetadata::new(
            raw.category,
            raw.entities,
            raw.summary,
            raw.contains_financials,
        );

        tracing::info!(
            category = %metadata.category,
            entities = metadata.entities.len(),
            contains_financials = metadata.contains_financials,
            "Metadata inferred"
        );
        Ok(metadata)
    }
}
