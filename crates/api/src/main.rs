use std::sync::Arc;

use anyhow::Context;

use tienda_api::app::{build_app, services::AppServices};
use tienda_infra::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tienda_observability::init();

    let config = ServiceConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    let services = Arc::new(AppServices::from_config(&config));
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
