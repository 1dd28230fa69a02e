//! `tienda-infra` — ports and adapters for the storefront's collaborators.
//!
//! Every upstream service (catalog document store, asset upload, workspace
//! import) is reached through a trait port with an in-memory implementation
//! for dev/tests and an HTTP implementation for production. Credentials are
//! injected through [`config::ServiceConfig`]; nothing here reads ambient
//! globals.

pub mod asset_upload;
pub mod cart_slots;
pub mod catalog_store;
pub mod config;
pub mod import;
pub mod saga;

pub use asset_upload::{AssetUploadError, AssetUploader, HttpAssetUploader, InMemoryAssetUploader};
pub use cart_slots::{InMemoryCartSlots, SessionSlot};
pub use catalog_store::{
    CatalogStore, CatalogStoreError, HttpCatalogStore, InMemoryCatalogStore, StoredProduct,
};
pub use config::{AssetUploadConfig, CatalogStoreConfig, ImportConfig, ServiceConfig};
pub use import::{HttpProductImporter, ImportError, InMemoryProductImporter, ProductImporter};
pub use saga::create_product::{CreateProductError, CreateProductSaga, NewAsset};
