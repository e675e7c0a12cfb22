use std::path::PathBuf;
use std::sync::Arc;

use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

pub struct LocalStagingStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalStagingStore {
    pub fn new(base_path: PathBuf) -> Result<Self, StagingStoreError> {
        std::fs::create_dir_all(&base_path).map_err(StagingStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl StagingStore for LocalStagingStore {
    async fn save(&self, path: &StoragePath, data: &[u8]) -> Result<u64, StagingStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .put(&store_path, PutPayload::from(data.to_vec()))
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;
        Ok(data.len() as u64)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| StagingStoreError::NotFound(e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StagingStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| StagingStoreError::DeleteFailed(e.to_string()))
    }
}
