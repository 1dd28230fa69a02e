use std::sync::Mutex;

use async_trait::async_trait;

use super::{AssetUploadError, AssetUploader};

/// In-memory uploader for tests/dev: returns deterministic URLs and records
/// every upload in order.
#[derive(Debug, Default)]
pub struct InMemoryAssetUploader {
    uploaded: Mutex<Vec<String>>,
}

impl InMemoryAssetUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filenames uploaded so far, in call order.
    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().map(|u| u.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AssetUploader for InMemoryAssetUploader {
    async fn upload(&self, filename: &str, _bytes: Vec<u8>) -> Result<String, AssetUploadError> {
        self.uploaded
            .lock()
            .map_err(|_| AssetUploadError::Unreachable("lock poisoned".to_string()))?
            .push(filename.to_string());
        Ok(format!("memory://assets/{filename}"))
    }
}
