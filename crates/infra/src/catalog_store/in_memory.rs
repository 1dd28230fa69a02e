use std::sync::RwLock;

use async_trait::async_trait;

use super::{CatalogStore, CatalogStoreError, StoredProduct};

/// In-memory catalog store.
///
/// Intended for tests/dev. Records are kept in insertion order; `list`
/// returns them sorted newest-first by `created_at`, the same convention the
/// remote store applies.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    records: RwLock<Vec<StoredProduct>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn create(&self, record: StoredProduct) -> Result<StoredProduct, CatalogStoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CatalogStoreError::Unreachable("lock poisoned".to_string()))?;

        if records.iter().any(|r| r.product.id == record.product.id) {
            return Err(CatalogStoreError::Conflict(format!(
                "product {} already exists",
                record.product.id
            )));
        }

        records.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<StoredProduct>, CatalogStoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| CatalogStoreError::Unreachable("lock poisoned".to_string()))?;

        let mut out = records.clone();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tienda_catalog::Product;
    use tienda_core::ProductId;

    fn record(id: &str, day: u32) -> StoredProduct {
        StoredProduct::new(
            Product {
                id: ProductId::new(id).unwrap(),
                name: format!("product {id}"),
                brand: "Acme".to_string(),
                price: 100,
                original_price: None,
                rating: 4.0,
                short_description: String::new(),
                full_description: String::new(),
                color: None,
                category: "Home".to_string(),
                subcategory: "Lighting".to_string(),
                seller: String::new(),
                has_stock: true,
                stock: None,
                image: None,
                images: Vec::new(),
            },
            Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = InMemoryCatalogStore::new();
        store.create(record("old", 1)).await.unwrap();
        store.create(record("new", 9)).await.unwrap();
        store.create(record("mid", 5)).await.unwrap();

        let listed = store.list().await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|r| r.product.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_identity() {
        let store = InMemoryCatalogStore::new();
        store.create(record("a", 1)).await.unwrap();

        let err = store.create(record("a", 2)).await.unwrap_err();
        assert!(matches!(err, CatalogStoreError::Conflict(_)));
        assert_eq!(store.len(), 1);
    }
}
