//! Collaborator interfaces
//!
//! The controller never signs, persists or renders anything itself. Those
//! concerns sit behind the traits below and are injected by the host.

use async_trait::async_trait;

use crate::account::Account;
use crate::error::SendError;
use crate::transaction::{Fees, SendTransactionParams, Transaction, TransactionRecord};

/// Account bookkeeping plus the node lookups the send flow needs
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Stored passphrases for an address: `[first, second]`, either may be missing.
    fn passphrases(&self, address: &str) -> Vec<String>;

    /// Synchronous address format predicate
    fn is_valid_address(&self, address: &str) -> bool;

    fn username(&self, address: &str) -> Option<String>;

    fn set_username(&self, address: &str, label: &str);

    fn load_all_accounts(&self) -> Vec<Account>;

    fn default_fees(&self) -> Fees;

    async fn get_transactions(
        &self,
        address: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<TransactionRecord>, SendError>;

    async fn remove_account(&self, account: &Account) -> Result<(), SendError>;

    /// Current fee table; `refresh` bypasses any cached copy.
    async fn fees(&self, refresh: bool) -> Result<Fees, SendError>;
}

/// Existence check against a foreign chain
#[async_trait]
pub trait CrossChainLookup: Send + Sync {
    async fn does_address_exist(&self, address: &str) -> Result<bool, SendError>;
}

#[async_trait]
pub trait TransactionBuilder: Send + Sync {
    async fn create_send_transaction(
        &self,
        params: SendTransactionParams,
    ) -> Result<Transaction, SendError>;
}

/// Key/value store the address book lives in
pub trait ContactStore: Send + Sync {
    fn get(&self, key: &str) -> Option<serde_json::Value>;
}

/// Toast notifications
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str, duration_ms: u64);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub text: String,
    pub ok: String,
    pub cancel: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDialog {
    pub title: String,
    pub text: String,
    pub placeholder: String,
    pub initial_value: Option<String>,
    pub ok: String,
    pub cancel: String,
}

/// Modal dialogs; presentation is entirely up to the host
#[async_trait]
pub trait Dialogs: Send + Sync {
    /// `true` when the user accepted
    async fn confirm(&self, dialog: ConfirmDialog) -> bool;

    /// `None` when the user cancelled
    async fn prompt(&self, dialog: PromptDialog) -> Option<String>;
}

/// Flows owned by the surrounding account controller
pub trait AccountHooks: Send + Sync {
    fn open_explorer(&self, path: &str);
    fn timestamp(&self, account: &Account);
    fn create_delegate(&self, account: &Account);
    fn create_second_passphrase(&self, account: &Account);
    fn show_validate_transaction(&self, account: &Account, transaction: &Transaction);

    /// Text shown for a failed build or broadcast
    fn format_error(&self, error: &SendError) -> String {
        error.to_string()
    }
}
