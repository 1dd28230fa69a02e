//! Asset-upload port: one binary blob in, one durable URL out.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

mod http;
mod in_memory;

pub use http::HttpAssetUploader;
pub use in_memory::InMemoryAssetUploader;

/// Asset upload error. Any failure is fatal to the enclosing create
/// operation.
#[derive(Debug, Error)]
pub enum AssetUploadError {
    #[error("upload service unreachable: {0}")]
    Unreachable(String),

    #[error("upload rejected: {0}")]
    Rejected(String),

    #[error("upload response undecodable: {0}")]
    Decode(String),
}

/// Opaque upstream asset-upload service.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    /// Upload one blob; returns the durable reference URL.
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AssetUploadError>;
}

#[async_trait]
impl<U> AssetUploader for Arc<U>
where
    U: AssetUploader + ?Sized,
{
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AssetUploadError> {
        (**self).upload(filename, bytes).await
    }
}
