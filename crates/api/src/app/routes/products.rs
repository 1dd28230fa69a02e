use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use tienda_catalog::{derive_view, PriceRange, Product, SortKey};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_products))
}

/// Storefront catalog: fetch the base list once, then derive the view from
/// the requested criteria.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::CatalogQuery>,
) -> axum::response::Response {
    let records = match services.catalog.list().await {
        Ok(records) => records,
        Err(e) => return errors::catalog_store_error_to_response(e),
    };

    let base: Vec<Product> = records.into_iter().map(|r| r.product).collect();
    let sort = SortKey::parse(query.sort.as_deref().unwrap_or("default"));
    let range = PriceRange::new(query.min_price, query.max_price);
    let items = derive_view(&base, sort, &range);

    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
