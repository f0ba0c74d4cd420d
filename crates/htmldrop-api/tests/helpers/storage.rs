//! Storage test doubles.

use async_trait::async_trait;
use htmldrop_core::StorageBackend;
use htmldrop_storage::{Storage, StorageError, StorageResult};

/// Backend whose writes always fail, for exercising the 500 path.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn store(
        &self,
        _storage_key: &str,
        _data: Vec<u8>,
        _content_type: &str,
    ) -> StorageResult<String> {
        Err(StorageError::UploadFailed(
            "simulated backend outage".to_string(),
        ))
    }

    async fn retrieve(&self, _storage_key: &str) -> StorageResult<Vec<u8>> {
        Err(StorageError::DownloadFailed(
            "simulated backend outage".to_string(),
        ))
    }

    async fn exists(&self, _storage_key: &str) -> StorageResult<bool> {
        Err(StorageError::BackendError(
            "simulated backend outage".to_string(),
        ))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
