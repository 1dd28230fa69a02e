//! Catalog document-store port.
//!
//! The core consumes exactly two operations: create a record and list all
//! records newest-first. Nothing here depends on the store's query language
//! beyond that.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tienda_catalog::Product;

mod http;
mod in_memory;

pub use http::HttpCatalogStore;
pub use in_memory::InMemoryCatalogStore;

/// Product record as the catalog store persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl StoredProduct {
    pub fn new(product: Product, created_at: DateTime<Utc>) -> Self {
        Self {
            product,
            created_at,
        }
    }
}

/// Catalog store operation error.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    #[error("catalog store unreachable: {0}")]
    Unreachable(String),

    #[error("catalog store rejected the request: {0}")]
    Rejected(String),

    #[error("catalog store returned an undecodable response: {0}")]
    Decode(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Opaque upstream catalog store.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Persist one record; returns the stored record on success.
    async fn create(&self, record: StoredProduct) -> Result<StoredProduct, CatalogStoreError>;

    /// All records, newest-first.
    async fn list(&self) -> Result<Vec<StoredProduct>, CatalogStoreError>;
}

#[async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn create(&self, record: StoredProduct) -> Result<StoredProduct, CatalogStoreError> {
        (**self).create(record).await
    }

    async fn list(&self) -> Result<Vec<StoredProduct>, CatalogStoreError> {
        (**self).list().await
    }
}
