use std::collections::HashMap;

use serde::Deserialize;

use tienda_cart::Cart;
use tienda_catalog::ProductDraft;
use tienda_core::{DomainError, ProductId};
use tienda_infra::StoredProduct;

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters for the storefront catalog listing.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub sort: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ImportQuery {
    pub id: Option<i64>,
}

// -------------------------
// Form mapping
// -------------------------

/// Build a draft from the admin create form's text fields.
///
/// Text fields default to empty; numeric fields must parse when present and
/// `price` is required.
pub fn draft_from_form_fields(fields: &HashMap<String, String>) -> Result<ProductDraft, DomainError> {
    let id = fields
        .get("id")
        .ok_or_else(|| DomainError::validation("id is required"))?;
    let id = ProductId::new(id.clone())?;

    let price = fields
        .get("price")
        .ok_or_else(|| DomainError::validation("price is required"))?
        .parse::<u64>()
        .map_err(|_| DomainError::validation("price must be a non-negative integer"))?;

    Ok(ProductDraft {
        id,
        name: text(fields, "name"),
        brand: text(fields, "brand"),
        price,
        original_price: optional_number(fields, "originalPrice")?,
        rating: match fields.get("rating") {
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|_| DomainError::validation("rating must be a number"))?,
            None => 0.0,
        },
        short_description: text(fields, "shortDescription"),
        full_description: text(fields, "fullDescription"),
        color: fields.get("color").filter(|c| !c.is_empty()).cloned(),
        category: text(fields, "category"),
        subcategory: text(fields, "subcategory"),
        seller: text(fields, "seller"),
        has_stock: matches!(
            fields.get("hasStock").map(String::as_str),
            Some("true") | Some("1") | Some("on")
        ),
        stock: optional_number::<i64>(fields, "stock")?,
    })
}

fn text(fields: &HashMap<String, String>, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

fn optional_number<T: std::str::FromStr>(
    fields: &HashMap<String, String>,
    key: &str,
) -> Result<Option<T>, DomainError> {
    match fields.get(key).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| DomainError::validation(format!("{key} must be a number"))),
        None => Ok(None),
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn stored_product_to_json(record: StoredProduct) -> serde_json::Value {
    serde_json::to_value(record).unwrap_or_else(|_| serde_json::json!({}))
}

pub fn cart_to_json(cart: &Cart) -> serde_json::Value {
    serde_json::json!({
        "items": cart.lines(),
        "totalItems": cart.total_items(),
        "subtotal": cart.subtotal(),
    })
}
