//! Workspace-import port: an external identifier in, a product draft out.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use tienda_catalog::ProductDraft;

mod http;
mod in_memory;

pub use http::HttpProductImporter;
pub use in_memory::InMemoryProductImporter;

/// Import operation error.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Import credentials are absent or incomplete.
    #[error("import misconfigured: {0}")]
    Misconfigured(String),

    /// No record matches the external identifier.
    #[error("product not found in import source")]
    NotFound,

    #[error("import source unreachable: {0}")]
    Unreachable(String),

    #[error("import source rejected the request: {0}")]
    Rejected(String),

    #[error("import source returned an undecodable response: {0}")]
    Decode(String),
}

/// Opaque upstream import source (third-party workspace tool).
#[async_trait]
pub trait ProductImporter: Send + Sync {
    /// Look up one record by its external numeric identifier.
    async fn import(&self, external_id: i64) -> Result<ProductDraft, ImportError>;
}

#[async_trait]
impl<I> ProductImporter for Arc<I>
where
    I: ProductImporter + ?Sized,
{
    async fn import(&self, external_id: i64) -> Result<ProductDraft, ImportError> {
        (**self).import(external_id).await
    }
}
