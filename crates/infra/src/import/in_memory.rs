use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use tienda_catalog::ProductDraft;

use super::{ImportError, ProductImporter};

/// In-memory import source for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductImporter {
    records: RwLock<HashMap<i64, ProductDraft>>,
}

impl InMemoryProductImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, external_id: i64, draft: ProductDraft) {
        if let Ok(mut records) = self.records.write() {
            records.insert(external_id, draft);
        }
    }
}

#[async_trait]
impl ProductImporter for InMemoryProductImporter {
    async fn import(&self, external_id: i64) -> Result<ProductDraft, ImportError> {
        let records = self
            .records
            .read()
            .map_err(|_| ImportError::Unreachable("lock poisoned".to_string()))?;
        records.get(&external_id).cloned().ok_or(ImportError::NotFound)
    }
}
