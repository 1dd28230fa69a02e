use serde::{Deserialize, Serialize};

use tienda_core::{DomainError, ProductId};

/// Catalog product record.
///
/// Identity is externally assigned. Beyond `id`, `price`, and `rating` the
/// fields are descriptive payload the cart/view core never inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    #[serde(default)]
    pub original_price: Option<u64>,
    pub rating: f64,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub color: Option<String>,
    pub category: String,
    pub subcategory: String,
    #[serde(default)]
    pub seller: String,
    #[serde(default)]
    pub has_stock: bool,
    #[serde(default)]
    pub stock: Option<i64>,
    /// Primary asset URL, assigned by the upload pipeline.
    #[serde(default)]
    pub image: Option<String>,
    /// Gallery asset URLs, assigned by the upload pipeline.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Create-product payload: every `Product` field except the asset URLs,
/// which are filled in after uploads are staged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub price: u64,
    #[serde(default)]
    pub original_price: Option<u64>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub color: Option<String>,
    pub category: String,
    pub subcategory: String,
    #[serde(default)]
    pub seller: String,
    #[serde(default)]
    pub has_stock: bool,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl ProductDraft {
    /// Validate the draft before anything reaches an upstream service.
    ///
    /// Classification fields must be present; a draft without a subcategory
    /// is rejected outright.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category is required"));
        }
        if self.subcategory.trim().is_empty() {
            return Err(DomainError::validation("subcategory is required"));
        }
        if !self.rating.is_finite() || self.rating < 0.0 {
            return Err(DomainError::validation("rating must be a non-negative number"));
        }
        Ok(())
    }

    /// Promote the draft to a full product once asset URLs are known.
    pub fn into_product(self, image: Option<String>, images: Vec<String>) -> Product {
        Product {
            id: self.id,
            name: self.name,
            brand: self.brand,
            price: self.price,
            original_price: self.original_price,
            rating: self.rating,
            short_description: self.short_description,
            full_description: self.full_description,
            color: self.color,
            category: self.category,
            subcategory: self.subcategory,
            seller: self.seller,
            has_stock: self.has_stock,
            stock: self.stock,
            image,
            images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, subcategory: &str) -> ProductDraft {
        ProductDraft {
            id: ProductId::new("p-1").unwrap(),
            name: name.to_string(),
            brand: "Acme".to_string(),
            price: 4999,
            original_price: None,
            rating: 4.5,
            short_description: String::new(),
            full_description: String::new(),
            color: None,
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            seller: String::new(),
            has_stock: true,
            stock: Some(3),
        }
    }

    #[test]
    fn valid_draft_passes_validation() {
        assert!(draft("Lamp", "Home", "Lighting").validate().is_ok());
    }

    #[test]
    fn draft_rejects_blank_name() {
        let err = draft("   ", "Home", "Lighting").validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn draft_rejects_missing_subcategory() {
        let err = draft("Lamp", "Home", "").validate().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("subcategory")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn draft_rejects_non_finite_rating() {
        let mut d = draft("Lamp", "Home", "Lighting");
        d.rating = f64::NAN;
        assert!(d.validate().is_err());
        d.rating = -1.0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn into_product_carries_staged_asset_urls() {
        let d = draft("Lamp", "Home", "Lighting");
        let p = d.into_product(
            Some("https://cdn.example/primary.jpg".to_string()),
            vec!["https://cdn.example/a.jpg".to_string()],
        );
        assert_eq!(p.image.as_deref(), Some("https://cdn.example/primary.jpg"));
        assert_eq!(p.images.len(), 1);
        assert_eq!(p.subcategory, "Lighting");
    }
}
