//! Session cart endpoints.
//!
//! Each request hydrates a `CartStore` from the session's slot, applies
//! exactly one command, and lets the store persist the result. Concurrent
//! requests for one session are last-writer-wins, matching the slot's
//! contract.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use tienda_cart::CartStore;
use tienda_catalog::Product;
use tienda_core::{CartSessionId, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:session", get(get_cart).delete(empty_cart))
        .route("/:session/items", post(add_item))
        .route("/:session/items/:product_id", delete(remove_item))
        .route("/:session/checkout", post(checkout))
}

fn parse_session(raw: &str) -> Result<CartSessionId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid session id")
    })
}

pub async fn create_session() -> axum::response::Response {
    let session = CartSessionId::new();
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "session": session })),
    )
        .into_response()
}

pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(session): Path<String>,
) -> axum::response::Response {
    let session = match parse_session(&session) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let store = CartStore::hydrate(services.cart_slots.slot(session));
    (StatusCode::OK, Json(dto::cart_to_json(store.cart()))).into_response()
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(session): Path<String>,
    Json(product): Json<Product>,
) -> axum::response::Response {
    let session = match parse_session(&session) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let mut store = CartStore::hydrate(services.cart_slots.slot(session));
    if let Err(e) = store.add_to_cart(product) {
        return errors::cart_slot_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::cart_to_json(store.cart()))).into_response()
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path((session, product_id)): Path<(String, String)>,
) -> axum::response::Response {
    let session = match parse_session(&session) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let product_id: ProductId = match product_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    let mut store = CartStore::hydrate(services.cart_slots.slot(session));
    if let Err(e) = store.remove_from_cart(&product_id) {
        return errors::cart_slot_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::cart_to_json(store.cart()))).into_response()
}

pub async fn empty_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(session): Path<String>,
) -> axum::response::Response {
    let session = match parse_session(&session) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let mut store = CartStore::hydrate(services.cart_slots.slot(session));
    if let Err(e) = store.empty_cart() {
        return errors::cart_slot_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::cart_to_json(store.cart()))).into_response()
}

/// Checkout completion: hand back the lines and clear the cart entirely.
pub async fn checkout(
    Extension(services): Extension<Arc<AppServices>>,
    Path(session): Path<String>,
) -> axum::response::Response {
    let session = match parse_session(&session) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let mut store = CartStore::hydrate(services.cart_slots.slot(session));
    match store.checkout() {
        Ok(cart) => (StatusCode::OK, Json(dto::cart_to_json(&cart))).into_response(),
        Err(e) => errors::cart_slot_error_to_response(e),
    }
}
