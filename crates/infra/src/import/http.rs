use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::warn;

use tienda_catalog::ProductDraft;
use tienda_core::ProductId;

use crate::config::ImportConfig;

use super::{ImportError, ProductImporter};

/// HTTP adapter for the workspace-tool import source.
///
/// Queries the configured database for the page whose numeric `ID` property
/// equals the requested identifier and maps its properties onto a
/// `ProductDraft`, applying declared defaults for absent optional fields.
#[derive(Debug, Clone)]
pub struct HttpProductImporter {
    client: reqwest::Client,
    config: Option<ImportConfig>,
}

impl HttpProductImporter {
    pub fn new(config: Option<ImportConfig>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ProductImporter for HttpProductImporter {
    async fn import(&self, external_id: i64) -> Result<ProductDraft, ImportError> {
        let config = self.config.as_ref().ok_or_else(|| {
            ImportError::Misconfigured("import credentials are not configured".to_string())
        })?;

        let url = format!(
            "{}/v1/databases/{}/query",
            config.base_url.trim_end_matches('/'),
            config.database_id
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&config.api_key)
            .json(&json!({
                "filter": {
                    "property": "ID",
                    "number": { "equals": external_id }
                }
            }))
            .send()
            .await
            .map_err(|e| ImportError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, external_id, "import source rejected query");
            return Err(ImportError::Rejected(format!("query returned {status}")));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ImportError::Decode(e.to_string()))?;

        let page = body
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.first())
            .ok_or(ImportError::NotFound)?;

        page_to_draft(page, external_id)
    }
}

fn page_to_draft(page: &Value, external_id: i64) -> Result<ProductDraft, ImportError> {
    let props = page
        .get("properties")
        .filter(|p| p.is_object())
        .ok_or_else(|| ImportError::Decode("page has no properties object".to_string()))?;

    let id = number(props, "ID")
        .map(|n| format!("{n}"))
        .unwrap_or_else(|| external_id.to_string());
    let id = ProductId::new(id).map_err(|e| ImportError::Decode(e.to_string()))?;

    Ok(ProductDraft {
        id,
        name: title_text(props, "Name").unwrap_or_default(),
        brand: rich_text(props, "Brand").unwrap_or_default(),
        price: number(props, "Price").map(|n| n.max(0.0) as u64).unwrap_or(0),
        original_price: number(props, "Original Price").map(|n| n.max(0.0) as u64),
        rating: number(props, "Rating").unwrap_or(0.0),
        short_description: rich_text(props, "Short Description").unwrap_or_default(),
        full_description: rich_text_joined(props, "Full Description"),
        color: rich_text(props, "Color"),
        category: select_name(props, "Category").unwrap_or_default(),
        subcategory: select_name(props, "Subcategory").unwrap_or_default(),
        seller: rich_text(props, "Seller").unwrap_or_default(),
        has_stock: checkbox(props, "Has Stock"),
        stock: number(props, "Stock").map(|n| n as i64),
    })
}

fn prop<'a>(props: &'a Value, name: &str) -> Option<&'a Value> {
    props.get(name)
}

fn number(props: &Value, name: &str) -> Option<f64> {
    prop(props, name)?.get("number")?.as_f64()
}

fn checkbox(props: &Value, name: &str) -> bool {
    prop(props, name)
        .and_then(|p| p.get("checkbox"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn select_name(props: &Value, name: &str) -> Option<String> {
    prop(props, name)?
        .get("select")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

fn title_text(props: &Value, name: &str) -> Option<String> {
    fragment_text(prop(props, name)?.get("title")?)
}

fn rich_text(props: &Value, name: &str) -> Option<String> {
    fragment_text(prop(props, name)?.get("rich_text")?)
}

fn rich_text_joined(props: &Value, name: &str) -> String {
    prop(props, name)
        .and_then(|p| p.get("rich_text"))
        .and_then(Value::as_array)
        .map(|fragments| {
            fragments
                .iter()
                .filter_map(|f| f.get("plain_text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

fn fragment_text(fragments: &Value) -> Option<String> {
    fragments
        .as_array()?
        .first()?
        .get("plain_text")?
        .as_str()
        .map(str::to_string)
}
