//! thai_tokenizer_server - standalone word segmentation service.
//!
//! Reads config from env vars:
//!   THAI_TOKENIZER_BIND_ADDR - listen address (default: 0.0.0.0:8001)
//!   RUST_LOG                 - log filter (default: info)

use std::sync::Arc;

use anyhow::Context;
use thai_lexicon_core::{MaximalMatchSegmenter, Segmenter};
use thai_lexicon_server::{bind_addr_from_env, build_router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let segmenter = MaximalMatchSegmenter::new();
    tracing::info!("Loaded segmentation dictionary with {} words", segmenter.len());
    let segmenter: Arc<dyn Segmenter> = Arc::new(segmenter);

    let app = build_router(segmenter);

    let bind_addr = bind_addr_from_env();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!("thai_tokenizer_server listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
