use async_trait::async_trait;
use tracing::warn;

use crate::config::CatalogStoreConfig;

use super::{CatalogStore, CatalogStoreError, StoredProduct};

/// HTTP adapter for a document-collection catalog store.
///
/// Speaks a minimal REST dialect: `POST .../documents` to create and
/// `GET .../documents?sort=-createdAt` to list. The api key travels as a
/// bearer token.
#[derive(Debug, Clone)]
pub struct HttpCatalogStore {
    client: reqwest::Client,
    config: CatalogStoreConfig,
}

impl HttpCatalogStore {
    pub fn new(config: CatalogStoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/collections/{}/documents",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection
        )
    }
}

#[async_trait]
impl CatalogStore for HttpCatalogStore {
    async fn create(&self, record: StoredProduct) -> Result<StoredProduct, CatalogStoreError> {
        let response = self
            .client
            .post(self.documents_url())
            .bearer_auth(&self.config.api_key)
            .json(&record)
            .send()
            .await
            .map_err(|e| CatalogStoreError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body, "catalog store rejected create");
            return Err(CatalogStoreError::Rejected(format!("create returned {status}")));
        }

        response
            .json::<StoredProduct>()
            .await
            .map_err(|e| CatalogStoreError::Decode(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<StoredProduct>, CatalogStoreError> {
        let response = self
            .client
            .get(self.documents_url())
            .query(&[("sort", "-createdAt")])
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| CatalogStoreError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "catalog store rejected list");
            return Err(CatalogStoreError::Rejected(format!("list returned {status}")));
        }

        response
            .json::<Vec<StoredProduct>>()
            .await
            .map_err(|e| CatalogStoreError::Decode(e.to_string()))
    }
}
