#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;

use std::process::ExitCode;

use config::{ConfigError, ServerConfig};
use proxy::{ApiProxy, ProxyError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Proxy(#[from] ProxyError),

    #[error("{0}")]
    Router(String),

    #[error("failed to bind: {0}")]
    Bind(#[source] std::io::Error),

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            eprintln!("server: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let proxy = ApiProxy::new(config.api_upstream_url.clone(), config.api_timeout)?;
    tracing::info!(upstream = proxy.base(), "api proxy configured");

    let app = routes::app(proxy).map_err(StartupError::Router)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(StartupError::Bind)?;

    tracing::info!(%addr, "sitewatch listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
