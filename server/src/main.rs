#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, ServerConfig};
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Config(format!("leptos configuration: {e}")))?;

    let app = routes::leptos_app(conf.leptos_options);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
