/// Axum HTTP server setup and routing

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::*;
use crate::ledger::MockLedger;

pub fn create_router(ledger: Arc<MockLedger>) -> Router {
    // Configure CORS to allow requests from the wallet frontend/tests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // ARK node endpoints
        .route("/api/transactions", get(get_transactions))
        .route("/api/blocks/getFees", get(get_fees))

        // NEO explorer endpoints
        .route(
            "/neo/v1/get_last_transactions_by_address/:address",
            get(get_neo_transactions),
        )

        // Mock helper endpoints
        .route("/mock/ark/transactions", post(add_ark_transaction))
        .route("/mock/neo/:address", post(add_neo_activity))

        // Shared state
        .with_state(ledger)

        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(ledger: Arc<MockLedger>, host: String, port: u16) -> anyhow::Result<()> {
    let app = create_router(ledger);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("🚀 Explorer mock listening on http://{}", addr);
    log::info!("📡 ARK API base: http://{}", addr);
    log::info!("🔗 NEO API base: http://{}/neo", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve `ledger` on an ephemeral localhost port (for tests)
///
/// Returns the bound address; the server runs until the runtime shuts down.
pub async fn spawn_server(ledger: Arc<MockLedger>) -> anyhow::Result<(SocketAddr, JoinHandle<()>)> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = create_router(ledger);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("Explorer mock stopped: {}", e);
        }
    });

    log::debug!("Explorer mock serving on http://{}", addr);
    Ok((addr, handle))
}
