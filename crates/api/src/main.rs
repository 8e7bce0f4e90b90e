use std::sync::Arc;

use anyhow::Context;

use subhub_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    subhub_observability::init(config.log_format);

    let services = Arc::new(app::services::build_services());
    let app = app::build_app(services);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
