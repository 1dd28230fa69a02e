//! Injected application services.
//!
//! Every collaborator is passed in explicitly at construction time; handlers
//! receive the bundle through an `Extension` rather than looking anything up
//! globally.

use std::sync::Arc;

use tienda_infra::{
    AssetUploader, CatalogStore, CreateProductSaga, HttpAssetUploader, HttpCatalogStore,
    HttpProductImporter, InMemoryAssetUploader, InMemoryCartSlots, InMemoryCatalogStore,
    InMemoryProductImporter, ProductImporter, ServiceConfig,
};

/// Upstream ports plus the cart slot registry, shared across handlers.
pub struct AppServices {
    pub catalog: Arc<dyn CatalogStore>,
    pub uploader: Arc<dyn AssetUploader>,
    pub importer: Arc<dyn ProductImporter>,
    pub cart_slots: Arc<InMemoryCartSlots>,
    saga: CreateProductSaga,
}

impl AppServices {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        uploader: Arc<dyn AssetUploader>,
        importer: Arc<dyn ProductImporter>,
    ) -> Self {
        let saga = CreateProductSaga::new(catalog.clone(), uploader.clone());
        Self {
            catalog,
            uploader,
            importer,
            cart_slots: Arc::new(InMemoryCartSlots::new()),
            saga,
        }
    }

    /// In-memory adapters only (dev/tests).
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCatalogStore::new()),
            Arc::new(InMemoryAssetUploader::new()),
            Arc::new(InMemoryProductImporter::new()),
        )
    }

    /// Adapters wired from the injected configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        if config.use_in_memory_stores {
            tracing::warn!("USE_IN_MEMORY_STORES=true, products will not survive a restart");
            return Self::in_memory();
        }

        Self::new(
            Arc::new(HttpCatalogStore::new(config.catalog.clone())),
            Arc::new(HttpAssetUploader::new(config.assets.clone())),
            Arc::new(HttpProductImporter::new(config.import.clone())),
        )
    }

    pub fn saga(&self) -> &CreateProductSaga {
        &self.saga
    }
}
