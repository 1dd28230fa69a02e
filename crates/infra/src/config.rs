//! Injected service configuration.
//!
//! Recognized options are enumerated here and passed explicitly to the
//! adapters and the API at construction time. `from_env` is the only place
//! that touches the process environment.

use std::env;

use tracing::{info, warn};

/// Catalog document-store credentials.
#[derive(Debug, Clone)]
pub struct CatalogStoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub collection: String,
}

/// Asset-upload service credentials.
#[derive(Debug, Clone)]
pub struct AssetUploadConfig {
    pub base_url: String,
    pub api_key: String,
    /// Remote folder uploads are filed under.
    pub folder: String,
}

/// Workspace-import credentials. Optional: when absent, import requests
/// report "misconfigured" instead of failing process startup.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub base_url: String,
    pub api_key: String,
    pub database_id: String,
}

/// Full service configuration for the API process.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: String,
    /// Swap the remote adapters for in-memory ones (dev/tests).
    pub use_in_memory_stores: bool,
    pub catalog: CatalogStoreConfig,
    pub assets: AssetUploadConfig,
    pub import: Option<ImportConfig>,
}

impl ServiceConfig {
    /// Read configuration from the environment, logging every fallback.
    pub fn from_env() -> Self {
        let import = match (var("IMPORT_API_KEY"), var("IMPORT_DATABASE_ID")) {
            (Some(api_key), Some(database_id)) => Some(ImportConfig {
                base_url: or_default("IMPORT_API_URL", "https://api.workspace.example"),
                api_key,
                database_id,
            }),
            _ => {
                info!("import credentials not set, import endpoint will report misconfigured");
                None
            }
        };

        Self {
            bind_addr: or_default("BIND_ADDR", "0.0.0.0:8080"),
            use_in_memory_stores: var("USE_IN_MEMORY_STORES")
                .map(|v| v.parse().unwrap_or(false))
                .unwrap_or(false),
            catalog: CatalogStoreConfig {
                base_url: or_default("CATALOG_STORE_URL", "http://localhost:9200"),
                api_key: or_default("CATALOG_STORE_API_KEY", ""),
                collection: or_default("CATALOG_STORE_COLLECTION", "products"),
            },
            assets: AssetUploadConfig {
                base_url: or_default("ASSET_UPLOAD_URL", "http://localhost:9300"),
                api_key: or_default("ASSET_UPLOAD_API_KEY", ""),
                folder: or_default("ASSET_UPLOAD_FOLDER", "products"),
            },
            import,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn or_default(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|| {
        warn!("{key} not set, using default: {default:?}");
        default.to_string()
    })
}
