use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tienda_cart::CartSlotError;
use tienda_core::DomainError;
use tienda_infra::{CatalogStoreError, CreateProductError, ImportError};

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

/// Upstream detail stays in the logs; the user sees one generic message.
pub fn create_product_error_to_response(err: CreateProductError) -> axum::response::Response {
    match err {
        CreateProductError::Validation(e) => domain_error_to_response(e),
        CreateProductError::Store(CatalogStoreError::Conflict(msg)) => {
            json_error(StatusCode::CONFLICT, "conflict", msg)
        }
        CreateProductError::Upload(e) => {
            tracing::error!(error = %e, "create product failed during upload staging");
            json_error(StatusCode::BAD_GATEWAY, "upstream_error", "failed to add product")
        }
        CreateProductError::Store(e) => {
            tracing::error!(error = %e, "create product failed at the catalog store");
            json_error(StatusCode::BAD_GATEWAY, "upstream_error", "failed to add product")
        }
    }
}

pub fn catalog_store_error_to_response(err: CatalogStoreError) -> axum::response::Response {
    tracing::error!(error = %err, "catalog store list failed");
    json_error(StatusCode::BAD_GATEWAY, "upstream_error", "failed to fetch products")
}

pub fn import_error_to_response(err: ImportError) -> axum::response::Response {
    match err {
        ImportError::NotFound => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "product not found in import source",
        ),
        ImportError::Misconfigured(msg) => {
            tracing::error!(error = msg, "import requested without configuration");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "import_error",
                "import is not available",
            )
        }
        e => {
            tracing::error!(error = %e, "import failed upstream");
            json_error(StatusCode::BAD_GATEWAY, "upstream_error", "failed to import product")
        }
    }
}

pub fn cart_slot_error_to_response(err: CartSlotError) -> axum::response::Response {
    tracing::error!(error = %err, "cart slot operation failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "cart_storage_error",
        "failed to persist cart",
    )
}
