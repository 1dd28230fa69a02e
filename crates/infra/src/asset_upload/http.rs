use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::config::AssetUploadConfig;

use super::{AssetUploadError, AssetUploader};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// HTTP adapter for the asset-upload service.
///
/// Sends the blob as a multipart form (`file` part plus a `folder` field)
/// and returns the `secure_url` from the response body.
#[derive(Debug, Clone)]
pub struct HttpAssetUploader {
    client: reqwest::Client,
    config: AssetUploadConfig,
}

impl HttpAssetUploader {
    pub fn new(config: AssetUploadConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/upload", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AssetUploader for HttpAssetUploader {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AssetUploadError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .text("folder", self.config.folder.clone())
            .part("file", part);

        let response = self
            .client
            .post(self.upload_url())
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AssetUploadError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, filename, "asset upload rejected");
            return Err(AssetUploadError::Rejected(format!("upload returned {status}")));
        }

        let body = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| AssetUploadError::Decode(e.to_string()))?;
        Ok(body.secure_url)
    }
}
