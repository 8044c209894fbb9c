use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use weather_core::{Config, WeatherProvider, provider_from_config};

use crate::routes;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Bind the configured address and serve until the process is stopped.
pub async fn run(config: &Config) -> Result<()> {
    let provider: Arc<dyn WeatherProvider> = provider_from_config(config)?.into();
    let app = routes::router(provider);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Weather gateway running at http://localhost:{}/weather", config.server.port);
    axum::serve(listener, app).await.context("HTTP server terminated unexpectedly")
}
