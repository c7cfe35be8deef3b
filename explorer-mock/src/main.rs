/// Explorer Mock Server
///
/// A lightweight mock of the ARK node API and a NEO explorer, served from an
/// in-memory ledger. Designed for wallet development and integration tests.

mod handlers;
mod ledger;
mod server;
mod types;

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use ledger::MockLedger;
use server::run_server;

#[derive(Debug)]
struct Config {
    // Seed data
    fixtures_path: Option<PathBuf>,

    // Server
    server_host: String,
    server_port: u16,
}

impl Config {
    fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let fixtures_path = env::var("FIXTURES_PATH").ok().map(PathBuf::from);

        let server_host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "4003".to_string())
            .parse()
            .context("Invalid SERVER_PORT")?;

        Ok(Self {
            fixtures_path,
            server_host,
            server_port,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting Explorer Mock Server...");

    // Load configuration
    let config = Config::from_env()
        .context("Failed to load configuration")?;

    log::info!("Server will listen on {}:{}", config.server_host, config.server_port);

    let ledger = match &config.fixtures_path {
        Some(path) => MockLedger::load(path)
            .with_context(|| format!("Failed to load fixtures from {}", path.display()))?,
        None => {
            log::info!("No FIXTURES_PATH set, starting with an empty ledger");
            MockLedger::new()
        }
    };

    // Run server
    run_server(Arc::new(ledger), config.server_host, config.server_port)
        .await
        .context("Server error")?;

    Ok(())
}
