/// ARK node and NEO explorer response types
///
/// These types match the public API formats so clients can consume them transparently.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Transaction entry served by /api/transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArkTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub amount: u64,
    pub fee: u64,
    pub sender_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_field: Option<String>,
    pub timestamp: u32,
}

impl ArkTransaction {
    /// Plain transfer with a deterministic id
    pub fn transfer(sender: &str, recipient: &str, amount: u64, timestamp: u32) -> Self {
        Self {
            id: format!("{:064x}", timestamp as u64 ^ amount),
            kind: 0,
            amount,
            fee: 10_000_000,
            sender_id: sender.to_string(),
            recipient_id: Some(recipient.to_string()),
            vendor_field: None,
            timestamp,
        }
    }

    pub fn involves(&self, address: &str) -> bool {
        self.sender_id == address || self.recipient_id.as_deref() == Some(address)
    }
}

/// Query string of /api/transactions
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsQuery {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub recipient_id: Option<String>,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub order_by: Option<String>,
}

fn default_limit() -> usize {
    50
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub success: bool,
    pub transactions: Vec<ArkTransaction>,
    pub count: String,
}

/// Fee table served by /api/blocks/getFees
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeTable {
    pub send: u64,
    pub vote: u64,
    pub secondsignature: u64,
    pub delegate: u64,
    pub multisignature: u64,
}

impl Default for FeeTable {
    fn default() -> Self {
        Self {
            send: 10_000_000,
            vote: 100_000_000,
            secondsignature: 500_000_000,
            delegate: 2_500_000_000,
            multisignature: 500_000_000,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeesResponse {
    pub success: bool,
    pub fees: FeeTable,
}

/// ARK-style failure body (`success: false`)
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

/// Seed data for the mock, loadable from a JSON file
#[derive(Debug, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub ark_transactions: Vec<ArkTransaction>,
    /// NEO address → explorer transaction entries
    #[serde(default)]
    pub neo_activity: HashMap<String, Vec<serde_json::Value>>,
    #[serde(default)]
    pub fees: Option<FeeTable>,
}
