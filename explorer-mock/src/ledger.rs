/// In-memory ledger backing the mock
///
/// Holds ARK transfers, NEO explorer activity and the fee table, plus knobs
/// for simulating outages. Request counters let tests assert that a client
/// did (or did not) reach the network.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use thiserror::Error;

use crate::types::*;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Lookups for {0} are configured to fail")]
    Unavailable(String),

    #[error("Fee endpoint is configured to fail")]
    FeesUnavailable,

    #[error("Failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse fixtures: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Default)]
struct State {
    ark_transactions: Vec<ArkTransaction>,
    neo_activity: HashMap<String, Vec<serde_json::Value>>,
    fees: FeeTable,
    failing_addresses: HashSet<String>,
    fees_failing: bool,
}

#[derive(Default)]
pub struct MockLedger {
    state: RwLock<State>,
    ark_requests: AtomicUsize,
    neo_requests: AtomicUsize,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        let ledger = Self::new();
        {
            let mut state = ledger.write();
            state.ark_transactions = fixtures.ark_transactions;
            state.neo_activity = fixtures.neo_activity;
            state.fees = fixtures.fees.unwrap_or_default();
        }
        ledger
    }

    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let contents = std::fs::read_to_string(path)?;
        let fixtures: Fixtures = serde_json::from_str(&contents)?;
        log::info!(
            "Loaded {} ARK transaction(s), {} NEO address(es) from {}",
            fixtures.ark_transactions.len(),
            fixtures.neo_activity.len(),
            path.display()
        );
        Ok(Self::from_fixtures(fixtures))
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    pub fn add_ark_transaction(&self, transaction: ArkTransaction) {
        self.write().ark_transactions.push(transaction);
    }

    /// Record activity for `address` on the NEO explorer
    pub fn add_neo_activity(&self, address: &str) {
        self.write()
            .neo_activity
            .entry(address.to_string())
            .or_default()
            .push(serde_json::json!({
                "txid": format!("neo-{}", address),
                "balance_moved": "1",
                "asset_moved": "NEO",
            }));
    }

    pub fn set_fees(&self, fees: FeeTable) {
        self.write().fees = fees;
    }

    /// Make every ARK and NEO lookup for `address` fail with a server error
    pub fn fail_address(&self, address: &str) {
        self.write().failing_addresses.insert(address.to_string());
    }

    pub fn fail_fees(&self, failing: bool) {
        self.write().fees_failing = failing;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Transactions matching the query, newest first, with the total match count
    pub fn transactions(
        &self,
        query: &TransactionsQuery,
    ) -> Result<(Vec<ArkTransaction>, usize), LedgerError> {
        self.ark_requests.fetch_add(1, Ordering::SeqCst);
        let state = self.read();

        let filter: Vec<&str> = [query.sender_id.as_deref(), query.recipient_id.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if let Some(address) = filter.iter().find(|a| state.failing_addresses.contains(**a)) {
            return Err(LedgerError::Unavailable(address.to_string()));
        }

        let mut matching: Vec<ArkTransaction> = state
            .ark_transactions
            .iter()
            .filter(|tx| filter.is_empty() || filter.iter().any(|a| tx.involves(a)))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let count = matching.len();
        let page = matching
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect();
        Ok((page, count))
    }

    pub fn fees(&self) -> Result<FeeTable, LedgerError> {
        self.ark_requests.fetch_add(1, Ordering::SeqCst);
        let state = self.read();
        if state.fees_failing {
            return Err(LedgerError::FeesUnavailable);
        }
        Ok(state.fees)
    }

    pub fn neo_transactions(&self, address: &str) -> Result<Vec<serde_json::Value>, LedgerError> {
        self.neo_requests.fetch_add(1, Ordering::SeqCst);
        let state = self.read();
        if state.failing_addresses.contains(address) {
            return Err(LedgerError::Unavailable(address.to_string()));
        }
        Ok(state.neo_activity.get(address).cloned().unwrap_or_default())
    }

    pub fn ark_request_count(&self) -> usize {
        self.ark_requests.load(Ordering::SeqCst)
    }

    pub fn neo_request_count(&self) -> usize {
        self.neo_requests.load(Ordering::SeqCst)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
