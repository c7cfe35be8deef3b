/// Axum HTTP handlers for the ARK node and NEO explorer endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::ledger::{LedgerError, MockLedger};
use crate::types::*;

/// Shared application state
pub type AppState = Arc<MockLedger>;

/// Custom error type for handlers
pub enum ApiError {
    /// ARK-style `{"success": false}` body with HTTP 200, as real nodes answer
    Rejected(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Rejected(error) => Json(FailureResponse {
                success: false,
                error,
            })
            .into_response(),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// GET /api/transactions
/// Returns transactions matching senderId/recipientId, newest first
pub async fn get_transactions(
    State(ledger): State<AppState>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    if query.limit == 0 || query.limit > 100 {
        return Err(ApiError::Rejected(format!(
            "Value {} is out of bounds for limit",
            query.limit
        )));
    }

    let (transactions, count) = ledger.transactions(&query)?;
    log::debug!(
        "Serving {} of {} transaction(s) for {:?}",
        transactions.len(),
        count,
        query.recipient_id
    );

    Ok(Json(TransactionsResponse {
        success: true,
        transactions,
        count: count.to_string(),
    }))
}

/// GET /api/blocks/getFees
pub async fn get_fees(State(ledger): State<AppState>) -> Result<Json<FeesResponse>, ApiError> {
    let fees = ledger.fees()?;
    Ok(Json(FeesResponse {
        success: true,
        fees,
    }))
}

/// GET /neo/v1/get_last_transactions_by_address/{address}
/// Returns the explorer's transaction list for a NEO address (empty when unknown)
pub async fn get_neo_transactions(
    State(ledger): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Vec<serde_json::Value>>, ApiError> {
    let transactions = ledger.neo_transactions(&address)?;
    Ok(Json(transactions))
}

// ============================================================================
// MOCK HELPER ENDPOINTS (not part of the real APIs)
// ============================================================================

/// POST /mock/ark/transactions
/// Add a transaction to the ARK ledger
pub async fn add_ark_transaction(
    State(ledger): State<AppState>,
    Json(transaction): Json<ArkTransaction>,
) -> StatusCode {
    log::info!(
        "Adding ARK transaction {} → {:?}",
        transaction.sender_id,
        transaction.recipient_id
    );
    ledger.add_ark_transaction(transaction);
    StatusCode::CREATED
}

/// POST /mock/neo/{address}
/// Mark an address as active on NEO
pub async fn add_neo_activity(
    State(ledger): State<AppState>,
    Path(address): Path<String>,
) -> StatusCode {
    log::info!("Marking {} as a NEO address", address);
    ledger.add_neo_activity(&address);
    StatusCode::CREATED
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
