use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::ports::{
    CompletionEngine, DocumentParser, DocumentParserError, StagingStore, StagingStoreError,
};
use crate::domain::{
    Category, ColumnMapping, Document, DocumentExtension, DocumentId, DocumentMetadata,
    DocumentRecord, FileMetadata, MappingCategory, StoragePath,
};
use crate::schema::{mapping_schema, record_schema};

use super::column_mapper::ColumnMapper;
use super::metadata_inferencer::MetadataInferencer;
use super::record_extractor::{ExtractorError, RecordExtractor};

/// Orchestrates the category-driven extraction pipeline: staging, parsing,
/// metadata inference, schema dispatch, record extraction, and response
/// assembly. Staged uploads are deleted on every exit path.
pub struct ExtractionService<P, C, S>
where
    P: DocumentParser,
    C: CompletionEngine,
    S: StagingStore,
{
    parser: Arc<P>,
    staging: Arc<S>,
    inferencer: MetadataInferencer<C>,
    record_extractor: RecordExtractor<C>,
    column_mapper: ColumnMapper<C>,
}

impl<P, C, S> ExtractionService<P, C, S>
where
    P: DocumentParser,
    C: CompletionEngine,
    S: StagingStore,
{
    pub fn new(parser: Arc<P>, engine: Arc<C>, staging: Arc<S>) -> Self {
        Self {
            parser,
            staging,
            inferencer: MetadataInferencer::new(Arc::clone(&engine)),
            record_extractor: RecordExtractor::new(Arc::clone(&engine)),
            column_mapper: ColumnMapper::new(engine),
        }
    }

    /// Persists an upload without extracting anything. Unlike the pipelines
    /// below, the stored file is kept.
    pub async fn stage_upload(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<StoragePath, ExtractionError> {
        let path = StoragePath::new(&DocumentId::new(), filename);
        self.staging.save(&path, data).await?;
        Ok(path)
    }

    #[tracing::instrument(skip_all, fields(filename = %filename, bytes = data.len()))]
    pub async fn extract(
        &self,
        data: &[u8],
        filename: &str,
        content_type: &str,
        explicit_category: Option<Category>,
    ) -> Result<ExtractResponse, ExtractionError> {
        let extension = DocumentExtension::from_filename(filename)
            .filter(|e| e.parseable())
            .ok_or_else(|| ExtractionError::UnsupportedExtension(filename.to_string()))?;

        let document = Document::new(
            filename.to_string(),
            extension,
            content_type.to_string(),
            data.len() as u64,
        );
        let path = StoragePath::new(&document.id, &document.filename);
        self.staging.save(&path, data).await?;

        let outcome = self.run_extraction(&document, &path, explicit_category).await;

        if let Err(e) = self.staging.delete(&path).await {
            tracing::warn!(error = %e, path = %path, "Failed to delete staged upload");
        }
        outcome
    }

    async fn run_extraction(
        &self,
        document: &Document,
        path: &StoragePath,
        explicit_category: Option<Category>,
    ) -> Result<ExtractResponse, ExtractionError> {
        let data = self.staging.fetch(path).await?;
        let segments = self.parser.parse(&data, document).await?;

        let text = segments
            .iter()
            .map(|segment| segment.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        if text.is_empty() {
            return Err(DocumentParserError::NoTextFound(document.filename.clone()).into());
        }
        tracing::debug!(segments = segments.len(), chars = text.len(), "Document parsed");

        // Inference always runs: the caller gets inferred metadata back even
        // when it overrides the category.
        let metadata = self.inferencer.infer(&text).await?;
        let effective_category = explicit_category.unwrap_or(metadata.category);
        tracing::info!(
            inferred = %metadata.category,
            effective = %effective_category,
            "Category resolved"
        );

        let schema = record_schema(effective_category)
            .ok_or(ExtractionError::UnsupportedCategory(effective_category))?;
        let record = self.record_extractor.extract(&text, schema).await?;

        assemble(document.file_metadata(), metadata, record, effective_category)
    }

    #[tracing::instrument(skip_all, fields(filename = %filename, category = %category))]
    pub async fn map_columns(
        &self,
        data: &[u8],
        filename: &str,
        content_type: &str,
        category: MappingCategory,
    ) -> Result<MappingResponse, ExtractionError> {
        let extension = DocumentExtension::from_filename(filename)
            .ok_or_else(|| ExtractionError::UnsupportedExtension(filename.to_string()))?;
        if extension != DocumentExtension::Csv {
            return Err(ExtractionError::UnsupportedExtension(filename.to_string()));
        }

        let document = Document::new(
            filename.to_string(),
            extension,
            content_type.to_string(),
            data.len() as u64,
        );
        let path = StoragePath::new(&document.id, &document.filename);
        self.staging.save(&path, data).await?;

        let outcome = self.run_mapping(&document, &path, category).await;

        if let Err(e) = self.staging.delete(&path).await {
            tracing::warn!(error = %e, path = %path, "Failed to delete staged upload");
        }
        outcome
    }

    async fn run_mapping(
        &self,
        document: &Document,
        path: &StoragePath,
        category: MappingCategory,
    ) -> Result<MappingResponse, ExtractionError> {
        let data = self.staging.fetch(path).await?;
        let headers = read_csv_headers(&data)?;
        tracing::debug!(headers = headers.len(), "CSV headers read");

        let schema = mapping_schema(category);
        let mapping = self.column_mapper.map(&headers, schema).await?;

        Ok(MappingResponse {
            file_metadata: document.file_metadata(),
            data: mapping,
        })
    }
}

/// Response assembly is pure composition; the one guarantee it adds is that
/// the record's tag matches the category the schema was resolved for.
fn assemble(
    file_metadata: FileMetadata,
    document_metadata: DocumentMetadata,
    record: DocumentRecord,
    effective_category: Category,
) -> Result<ExtractResponse, ExtractionError> {
    if record.category() != effective_category {
        return Err(ExtractionError::CategoryMismatch {
            expected: effective_category,
            actual: record.category(),
        });
    }
    Ok(ExtractResponse {
        file_metadata,
        document_metadata,
        data: record,
    })
}

fn read_csv_headers(data: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(data);
    let headers = reader
        .headers()
        .map_err(|e| ExtractionError::CsvHeaders(e.to_string()))?;

    let headers: Vec<String> = headers
        .iter()
        .map(|header| header.trim().to_string())
        .filter(|header| !header.is_empty())
        .collect();
    if headers.is_empty() {
        return Err(ExtractionError::CsvHeaders(
            "no column headers found".to_string(),
        ));
    }
    Ok(headers)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub file_metadata: FileMetadata,
    pub document_metadata: DocumentMetadata,
    pub data: DocumentRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResponse {
    pub file_metadata: FileMetadata,
    pub data: ColumnMapping,
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported extension: {0}")]
    UnsupportedExtension(String),
    #[error("no schema registered for category {0}")]
    UnsupportedCategory(Category),
    #[error("extracted record category {actual} does not match resolved category {expected}")]
    CategoryMismatch { expected: Category, actual: Category },
    #[error("csv headers: {0}")]
    CsvHeaders(String),
    #[error(transparent)]
    Extractor(#[from] ExtractorError),
    #[error("document parsing: {0}")]
    Parsing(#[from] DocumentParserError),
    #[error("staging: {0}")]
    Staging(#[from] StagingStoreError),
}
