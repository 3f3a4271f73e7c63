use std::sync::Arc;

use anyhow::Context;
use chrono::{Datelike, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use annum_catalog::cinemeta::CinemetaClient;
use annum_core::manifest::Manifest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Year options are fixed for the process lifetime
    let manifest = Manifest::new(Utc::now().year());
    info!(id = %manifest.id, version = %manifest.version, "manifest ready");

    // Upstream base: use ANNUM_UPSTREAM env or the public Cinemeta instance
    let source = match std::env::var("ANNUM_UPSTREAM") {
        Ok(base) => {
            info!(base = %base, "using custom upstream");
            CinemetaClient::with_base_url(base)
        }
        Err(_) => CinemetaClient::new(),
    };

    let state = annum_server::state::AppState {
        manifest: Arc::new(manifest),
        source: Arc::new(source),
    };

    let app = annum_server::routes::build_router(state);

    let bind_addr = std::env::var("ANNUM_BIND").unwrap_or_else(|_| "0.0.0.0:7005".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("failed to bind")?;
    info!(addr = %bind_addr, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
