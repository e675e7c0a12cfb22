use async_trait::async_trait;

use crate::domain::{Document, DocumentSegment};

/// External text-extraction service. Calls are high-latency network
/// operations and may take arbitrarily long; adapters bound them.
#[async_trait]
pub trait DocumentParser: Send + Sync {
    async fn parse(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<DocumentSegment>, DocumentParserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentParserError {
    #[error("unsupported extension: {0}")]
    UnsupportedExtension(String),
    #[error("parsing failed: {0}")]
    ParsingFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
