use std::sync::Arc;

use crate::application::ports::{CompletionEngine, DocumentParser, StagingStore};
use crate::application::services::ExtractionService;

pub struct AppState<P, C, S>
where
    P: DocumentParser,
    C: CompletionEngine,
    S: StagingStore,
{
    pub extraction_service: Arc<ExtractionService<P, C, S>>,
}

impl<P, C, S> Clone for AppState<P, C, S>
where
    P: DocumentParser,
    C: CompletionEngine,
    S: StagingStore,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
        }
    }
}
