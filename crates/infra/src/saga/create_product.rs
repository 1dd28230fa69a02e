//! Admin create-product saga.
//!
//! Orchestrates the flow:
//! 1. Validate the draft (nothing reaches an upstream service on failure)
//! 2. Stage every asset upload, primary first then gallery in order
//! 3. Create the catalog record with the staged URLs
//!
//! All-or-nothing on the upload stage: the first failed upload aborts the
//! whole operation and no record is created. A failure in step 3 can leave
//! already-staged uploads behind on the CDN (the upload service exposes no
//! delete), but never a partial catalog record.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use tienda_catalog::ProductDraft;
use tienda_core::DomainError;

use crate::asset_upload::{AssetUploadError, AssetUploader};
use crate::catalog_store::{CatalogStore, CatalogStoreError, StoredProduct};

/// One binary asset submitted with the create request.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Create-product failure, by stage.
#[derive(Debug, Error)]
pub enum CreateProductError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("asset upload failed: {0}")]
    Upload(#[from] AssetUploadError),

    #[error("catalog store create failed: {0}")]
    Store(#[from] CatalogStoreError),
}

/// Upload-then-create orchestrator.
pub struct CreateProductSaga {
    store: Arc<dyn CatalogStore>,
    uploader: Arc<dyn AssetUploader>,
}

impl CreateProductSaga {
    pub fn new(store: Arc<dyn CatalogStore>, uploader: Arc<dyn AssetUploader>) -> Self {
        Self { store, uploader }
    }

    pub async fn run(
        &self,
        draft: ProductDraft,
        primary: Option<NewAsset>,
        gallery: Vec<NewAsset>,
    ) -> Result<StoredProduct, CreateProductError> {
        draft.validate()?;

        let image = match primary {
            Some(asset) => Some(self.uploader.upload(&asset.filename, asset.bytes).await?),
            None => None,
        };

        let mut images = Vec::with_capacity(gallery.len());
        for asset in gallery {
            images.push(self.uploader.upload(&asset.filename, asset.bytes).await?);
        }

        let record = StoredProduct::new(draft.into_product(image, images), Utc::now());
        let stored = self.store.create(record).await?;
        info!(product_id = %stored.product.id, "product created");
        Ok(stored)
    }
}
