//! Indicator API Server
//!
//! Stateless HTTP API computing indicator bundles on request. Bars come from
//! the configured market data provider or from the request body.

use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use indicator_engine::config::{get_environment, ServerConfig};
use indicator_engine::core::http::start_server;
use indicator_engine::logging;
use indicator_engine::services::market_data::InMemoryMarketDataProvider;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = ServerConfig::from_env()?;
    let port = config.port;

    info!("Starting Indicator API Server");
    info!(environment = %get_environment(), "Environment");
    info!(
        port = port,
        candle_limit = config.candle_limit,
        "HTTP Server: http://0.0.0.0:{}",
        port
    );

    let provider = Arc::new(InMemoryMarketDataProvider::new());
    if let Ok(path) = env::var("BARS_FILE") {
        let json = tokio::fs::read_to_string(&path).await?;
        let symbols = provider.load_json(&json).await?;
        info!(path = %path, symbols = symbols, "Loaded bar history");
    }

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config, provider).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
