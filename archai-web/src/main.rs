//! archai-web - ArchAI front-end service
//!
//! Serves the informational pages, hosts the Upload and Explore flows,
//! and mediates between the browser and the two external collaborators
//! (the inference backend and the public site-search source).

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use archai_web::clients::{InferenceClient, WikiClient};
use archai_web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting ArchAI front end (archai-web) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = archai_common::config::load();
    info!("Inference backend: {}", config.inference_base_url);

    let inference = Arc::new(
        InferenceClient::new(config.inference_base_url.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create inference client: {}", e))?,
    );
    let wiki = Arc::new(
        WikiClient::new().map_err(|e| anyhow::anyhow!("Failed to create wiki client: {}", e))?,
    );

    let state = AppState::new(inference, wiki);
    let app = build_router(state);

    let addr = format!("127.0.0.1:{}", config.bind_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
