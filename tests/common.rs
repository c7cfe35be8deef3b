//! Common test utilities for send-flow integration tests
//!
//! This module provides shared test infrastructure including:
//! - Deterministic ARK addresses
//! - A scripted chain (account service + NEO lookup) whose answers can be
//!   held back per address, to control lookup arrival order
//! - Recording notifier, hooks, dialogs and transaction builder

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use ark_send::address::address_from_public_key;
use ark_send::services::{
    AccountHooks, AccountService, ConfirmDialog, ContactStore, CrossChainLookup, Dialogs,
    Notifier, PromptDialog, TransactionBuilder,
};
use ark_send::{
    Account, AccountContext, ArkNetwork, Fees, SendError, SendServices, SendTransactionParams,
    Transaction, TransactionRecord,
};

// ============================================================================
// Addresses
// ============================================================================

/// Valid mainnet address derived from a fixed secret key
pub fn test_address(seed: u8) -> String {
    use secp256k1::{PublicKey, Secp256k1, SecretKey};

    let secp = Secp256k1::new();
    let secret = SecretKey::from_slice(&[seed.max(1); 32]).expect("Valid secret key");
    let public_key = hex::encode(PublicKey::from_secret_key(&secp, &secret).serialize());
    address_from_public_key(&public_key, ArkNetwork::Mainnet).expect("Valid public key")
}

pub fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

/// Let spawned lookup tasks run on the current-thread test runtime
pub async fn drain() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

// ============================================================================
// Scripted chain
// ============================================================================

/// Answer of the history lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum History {
    Empty,
    Active,
    Down,
}

/// Answer of the NEO lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neo {
    Unknown,
    Known,
    Down,
}

/// Per-address one-shot answers that are held until the test releases them
struct Gates<T> {
    pending: Mutex<HashMap<String, VecDeque<oneshot::Receiver<T>>>>,
}

impl<T> Gates<T> {
    fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }

    fn prepare(&self, address: &str) -> oneshot::Sender<T> {
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .unwrap()
            .entry(address.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    fn take(&self, address: &str) -> Option<oneshot::Receiver<T>> {
        self.pending
            .lock()
            .unwrap()
            .get_mut(address)
            .and_then(|queue| queue.pop_front())
    }
}

pub struct MockChain {
    history: Mutex<HashMap<String, History>>,
    neo: Mutex<HashMap<String, Neo>>,
    history_gates: Gates<History>,
    neo_gates: Gates<Neo>,
    history_calls: AtomicUsize,
    neo_calls: AtomicUsize,

    accounts: Mutex<Vec<Account>>,
    usernames: Mutex<HashMap<String, String>>,
    passphrases: Mutex<HashMap<String, Vec<String>>>,
    live_fees: Mutex<Option<Fees>>,
    fee_calls: AtomicUsize,

    format_hook: Mutex<Option<Box<dyn Fn() + Send + Sync>>>,
}

impl MockChain {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            history: Mutex::new(HashMap::new()),
            neo: Mutex::new(HashMap::new()),
            history_gates: Gates::new(),
            neo_gates: Gates::new(),
            history_calls: AtomicUsize::new(0),
            neo_calls: AtomicUsize::new(0),
            accounts: Mutex::new(Vec::new()),
            usernames: Mutex::new(HashMap::new()),
            passphrases: Mutex::new(HashMap::new()),
            live_fees: Mutex::new(Some(Fees::default())),
            fee_calls: AtomicUsize::new(0),
            format_hook: Mutex::new(None),
        })
    }

    /// Immediate answers for `address` (unscripted: active history, unknown on NEO)
    pub fn script(&self, address: &str, history: History, neo: Neo) {
        self.history.lock().unwrap().insert(address.to_string(), history);
        self.neo.lock().unwrap().insert(address.to_string(), neo);
    }

    /// Hold back the next history answer for `address` until the sender fires
    pub fn hold_history(&self, address: &str) -> oneshot::Sender<History> {
        self.history_gates.prepare(address)
    }

    /// Hold back the next NEO answer for `address` until the sender fires
    pub fn hold_neo(&self, address: &str) -> oneshot::Sender<Neo> {
        self.neo_gates.prepare(address)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn neo_calls(&self) -> usize {
        self.neo_calls.load(Ordering::SeqCst)
    }

    pub fn lookup_calls(&self) -> usize {
        self.history_calls() + self.neo_calls()
    }

    pub fn fee_calls(&self) -> usize {
        self.fee_calls.load(Ordering::SeqCst)
    }

    pub fn add_account(&self, account: Account) {
        self.accounts.lock().unwrap().push(account);
    }

    pub fn store_passphrases(&self, address: &str, passphrases: &[&str]) {
        self.passphrases.lock().unwrap().insert(
            address.to_string(),
            passphrases.iter().map(|p| p.to_string()).collect(),
        );
    }

    fn scripted_history(&self, address: &str) -> History {
        let history = self.history.lock().unwrap();
        history.get(address).copied().unwrap_or(History::Active)
    }

    fn scripted_neo(&self, address: &str) -> Neo {
        let neo = self.neo.lock().unwrap();
        neo.get(address).copied().unwrap_or(Neo::Unknown)
    }

    /// Run `hook` inside every address format check
    pub fn on_format_check(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.format_hook.lock().unwrap() = Some(Box::new(hook));
    }

    /// `None` makes the fee endpoint fail
    pub fn set_live_fees(&self, fees: Option<Fees>) {
        *self.live_fees.lock().unwrap() = fees;
    }
}

#[async_trait]
impl AccountService for MockChain {
    fn passphrases(&self, address: &str) -> Vec<String> {
        self.passphrases
            .lock()
            .unwrap()
            .get(address)
            .cloned()
            .unwrap_or_default()
    }

    fn is_valid_address(&self, address: &str) -> bool {
        if let Some(hook) = self.format_hook.lock().unwrap().as_ref() {
            hook();
        }
        ark_send::address::is_valid_address(address, ArkNetwork::Mainnet)
    }

    fn username(&self, address: &str) -> Option<String> {
        self.usernames.lock().unwrap().get(address).cloned()
    }

    fn set_username(&self, address: &str, label: &str) {
        self.usernames
            .lock()
            .unwrap()
            .insert(address.to_string(), label.to_string());
        for account in self
            .accounts
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|a| a.address == address)
        {
            account.username = Some(label.to_string());
        }
    }

    fn load_all_accounts(&self) -> Vec<Account> {
        self.accounts.lock().unwrap().clone()
    }

    fn default_fees(&self) -> Fees {
        Fees::default()
    }

    async fn get_transactions(
        &self,
        address: &str,
        _offset: u32,
        _limit: u32,
    ) -> Result<Vec<TransactionRecord>, SendError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);

        let answer = match self.history_gates.take(address) {
            Some(gate) => gate
                .await
                .map_err(|_| SendError::Network("gate dropped".to_string()))?,
            None => self.scripted_history(address),
        };

        match answer {
            History::Empty => Ok(Vec::new()),
            History::Active => Ok(vec![TransactionRecord {
                id: "f0".repeat(32),
                kind: 0,
                amount: 100_000_000,
                fee: 10_000_000,
                sender_id: test_address(200),
                recipient_id: Some(address.to_string()),
                vendor_field: None,
                timestamp: 1_000,
            }]),
            History::Down => Err(SendError::Network("node unreachable".to_string())),
        }
    }

    async fn remove_account(&self, account: &Account) -> Result<(), SendError> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.address != account.address);
        if accounts.len() == before {
            return Err(SendError::AccountNotFound(account.address.clone()));
        }
        Ok(())
    }

    async fn fees(&self, _refresh: bool) -> Result<Fees, SendError> {
        self.fee_calls.fetch_add(1, Ordering::SeqCst);
        let live = *self.live_fees.lock().unwrap();
        live.ok_or_else(|| SendError::Network("fee endpoint down".to_string()))
    }
}

#[async_trait]
impl CrossChainLookup for MockChain {
    async fn does_address_exist(&self, address: &str) -> Result<bool, SendError> {
        self.neo_calls.fetch_add(1, Ordering::SeqCst);

        let answer = match self.neo_gates.take(address) {
            Some(gate) => gate
                .await
                .map_err(|_| SendError::Network("gate dropped".to_string()))?,
            None => self.scripted_neo(address),
        };

        match answer {
            Neo::Unknown => Ok(false),
            Neo::Known => Ok(true),
            Neo::Down => Err(SendError::Api("explorer returned 500".to_string())),
        }
    }
}

// ============================================================================
// Recorders
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<(String, u64)>>,
    pub errors: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str, duration_ms: u64) {
        self.successes
            .lock()
            .unwrap()
            .push((message.to_string(), duration_ms));
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingHooks {
    pub events: Mutex<Vec<String>>,
    pub reviewed: Mutex<Vec<Transaction>>,
}

impl AccountHooks for RecordingHooks {
    fn open_explorer(&self, path: &str) {
        self.events.lock().unwrap().push(format!("explorer {}", path));
    }

    fn timestamp(&self, account: &Account) {
        self.events
            .lock()
            .unwrap()
            .push(format!("timestamp {}", account.address));
    }

    fn create_delegate(&self, account: &Account) {
        self.events
            .lock()
            .unwrap()
            .push(format!("delegate {}", account.address));
    }

    fn create_second_passphrase(&self, account: &Account) {
        self.events
            .lock()
            .unwrap()
            .push(format!("second-passphrase {}", account.address));
    }

    fn show_validate_transaction(&self, _account: &Account, transaction: &Transaction) {
        self.reviewed.lock().unwrap().push(transaction.clone());
    }

    fn format_error(&self, error: &SendError) -> String {
        format!("Failed: {}", error)
    }
}

pub struct ScriptedDialogs {
    pub confirm_answer: bool,
    pub prompt_answer: Option<String>,
    pub confirms: Mutex<Vec<ConfirmDialog>>,
    pub prompts: Mutex<Vec<PromptDialog>>,
}

impl ScriptedDialogs {
    pub fn new(confirm_answer: bool, prompt_answer: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            confirm_answer,
            prompt_answer: prompt_answer.map(str::to_string),
            confirms: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Dialogs for ScriptedDialogs {
    async fn confirm(&self, dialog: ConfirmDialog) -> bool {
        self.confirms.lock().unwrap().push(dialog);
        self.confirm_answer
    }

    async fn prompt(&self, dialog: PromptDialog) -> Option<String> {
        self.prompts.lock().unwrap().push(dialog);
        self.prompt_answer.clone()
    }
}

#[derive(Default)]
pub struct MockBuilder {
    pub fail_with: Option<String>,
    pub params: Mutex<Vec<SendTransactionParams>>,
}

#[async_trait]
impl TransactionBuilder for MockBuilder {
    async fn create_send_transaction(
        &self,
        params: SendTransactionParams,
    ) -> Result<Transaction, SendError> {
        self.params.lock().unwrap().push(params.clone());
        if let Some(reason) = &self.fail_with {
            return Err(SendError::Builder(reason.clone()));
        }
        Ok(Transaction(serde_json::json!({
            "type": 0,
            "id": "ab".repeat(32),
            "amount": params.amount,
            "recipientId": params.to_address,
        })))
    }
}

pub struct MemoryContacts(pub Option<serde_json::Value>);

impl ContactStore for MemoryContacts {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        if key == "contacts" {
            self.0.clone()
        } else {
            None
        }
    }
}

// ============================================================================
// Environment
// ============================================================================

/// Everything a card or session needs, with handles on the recorders
pub struct TestEnvironment {
    pub chain: Arc<MockChain>,
    pub context: AccountContext,
    pub notifier: Arc<RecordingNotifier>,
    pub hooks: Arc<RecordingHooks>,
    pub builder: Arc<MockBuilder>,
    pub services: SendServices,
}

impl TestEnvironment {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self::with(accounts, MockBuilder::default(), MemoryContacts(None))
    }

    pub fn with(accounts: Vec<Account>, builder: MockBuilder, contacts: MemoryContacts) -> Self {
        init_logging();

        let chain = MockChain::new();
        for account in &accounts {
            chain.add_account(account.clone());
        }
        let context = AccountContext::new(accounts);
        let notifier = Arc::new(RecordingNotifier::default());
        let hooks = Arc::new(RecordingHooks::default());
        let builder = Arc::new(builder);

        let services = SendServices {
            accounts: chain.clone(),
            cross_chain: chain.clone(),
            builder: builder.clone(),
            contacts: Arc::new(contacts),
            notifier: notifier.clone(),
            hooks: hooks.clone(),
            context: context.clone(),
        };

        Self {
            chain,
            context,
            notifier,
            hooks,
            builder,
            services,
        }
    }
}
