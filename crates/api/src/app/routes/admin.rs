use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use tienda_infra::NewAsset;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/products", post(create_product))
        .route("/import", get(import_product))
}

/// Admin create: multipart form carrying the product fields plus an optional
/// `image` blob and indexed `images[i]` gallery blobs.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    mut multipart: Multipart,
) -> axum::response::Response {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut primary: Option<NewAsset> = None;
    let mut gallery: Vec<(usize, NewAsset)> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_multipart",
                    e.to_string(),
                )
            }
        };

        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let filename = field.file_name().unwrap_or("image").to_string();
            match field.bytes().await {
                Ok(bytes) => {
                    primary = Some(NewAsset {
                        filename,
                        bytes: bytes.to_vec(),
                    })
                }
                Err(e) => {
                    return errors::json_error(
                        StatusCode::BAD_REQUEST,
                        "invalid_multipart",
                        e.to_string(),
                    )
                }
            }
        } else if let Some(index) = gallery_index(&name) {
            let filename = field.file_name().unwrap_or("image").to_string();
            match field.bytes().await {
                Ok(bytes) => gallery.push((
                    index,
                    NewAsset {
                        filename,
                        bytes: bytes.to_vec(),
                    },
                )),
                Err(e) => {
                    return errors::json_error(
                        StatusCode::BAD_REQUEST,
                        "invalid_multipart",
                        e.to_string(),
                    )
                }
            }
        } else {
            match field.text().await {
                Ok(value) => {
                    fields.insert(name, value);
                }
                Err(e) => {
                    return errors::json_error(
                        StatusCode::BAD_REQUEST,
                        "invalid_multipart",
                        e.to_string(),
                    )
                }
            }
        }
    }

    gallery.sort_by_key(|(index, _)| *index);
    let gallery: Vec<NewAsset> = gallery.into_iter().map(|(_, asset)| asset).collect();

    let draft = match dto::draft_from_form_fields(&fields) {
        Ok(draft) => draft,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.saga().run(draft, primary, gallery).await {
        Ok(stored) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "product created",
                "product": dto::stored_product_to_json(stored),
            })),
        )
            .into_response(),
        Err(e) => errors::create_product_error_to_response(e),
    }
}

/// Gallery parts are named `images[0]`, `images[1]`, ...
fn gallery_index(name: &str) -> Option<usize> {
    name.strip_prefix("images[")?
        .strip_suffix(']')?
        .parse()
        .ok()
}

/// Import a draft from the configured workspace source by external id.
pub async fn import_product(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ImportQuery>,
) -> axum::response::Response {
    let Some(id) = query.id else {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_id", "product id is required");
    };

    match services.importer.import(id).await {
        Ok(draft) => (StatusCode::OK, Json(draft)).into_response(),
        Err(e) => errors::import_error_to_response(e),
    }
}
