//! Transaction-related types exchanged with the node API and the builder

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SendError;

/// ARK genesis epoch: 2017-03-21T13:00:00Z. Node timestamps count seconds from here.
pub const ARK_EPOCH_UNIX: i64 = 1_490_101_200;

/// Entry of an address' transaction history as returned by `/api/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub amount: u64,
    pub fee: u64,
    pub sender_id: String,
    #[serde(default)]
    pub recipient_id: Option<String>,
    #[serde(default)]
    pub vendor_field: Option<String>,
    /// Seconds since the ARK epoch
    pub timestamp: u32,
}

impl TransactionRecord {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(ARK_EPOCH_UNIX + i64::from(self.timestamp), 0)
            .single()
    }
}

/// A signed transaction, ready for review and broadcast
///
/// Kept as raw JSON: its layout is owned by the transaction builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction(pub serde_json::Value);

impl Transaction {
    /// Accept a JSON document as a transaction only if it carries a `type` field.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SendError> {
        match value.get("type") {
            Some(kind) if !kind.is_null() => Ok(Self(value)),
            _ => Err(SendError::InvalidTransactionFile),
        }
    }

    pub fn kind(&self) -> Option<u64> {
        self.0.get("type").and_then(|v| v.as_u64())
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(|v| v.as_str())
    }
}

/// Input to [`TransactionBuilder::create_send_transaction`](crate::services::TransactionBuilder)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionParams {
    pub ledger: bool,
    pub public_key: Option<String>,
    pub from_address: String,
    pub to_address: String,
    /// Amount in arktoshi
    pub amount: u64,
    pub smartbridge: Option<String>,
    #[serde(rename = "masterpassphrase")]
    pub master_passphrase: String,
    #[serde(rename = "secondpassphrase")]
    pub second_passphrase: Option<String>,
}

/// Fee table in arktoshi, as served by `/api/blocks/getFees`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct Fees {
    pub send: u64,
    pub vote: u64,
    #[serde(rename = "secondsignature")]
    pub second_signature: u64,
    pub delegate: u64,
    #[serde(rename = "multisignature")]
    pub multi_signature: u64,
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            send: 10_000_000,
            vote: 100_000_000,
            second_signature: 500_000_000,
            delegate: 2_500_000_000,
            multi_signature: 500_000_000,
        }
    }
}
