use async_trait::async_trait;

/// External structured-completion capability: given an extraction
/// instruction and the document text, returns free-form completion text the
/// caller conforms against a schema.
#[async_trait]
pub trait CompletionEngine: Send + Sync {
    async fn complete(
        &self,
        instruction: &str,
        document_text: &str,
    ) -> Result<String, CompletionEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionEngineError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
