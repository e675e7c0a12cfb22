use async_trait::async_trait;

use crate::domain::StoragePath;

/// Transient file store for uploaded bytes: written once, read at most once,
/// deleted on every exit path of the request that staged them.
#[async_trait]
pub trait StagingStore: Send + Sync {
    async fn save(&self, path: &StoragePath, data: &[u8]) -> Result<u64, StagingStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
