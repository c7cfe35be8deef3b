//! Account and contact models, plus the shared account list
//!
//! The account list is owned by the host (the wallet's account controller).
//! Components that only need to *read* the currently selected account get an
//! [`AccountContext`], which always reflects the live selection.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Balance in arktoshi
    #[serde(default)]
    pub balance: u64,
    #[serde(default)]
    pub second_signature: bool,
    #[serde(default)]
    pub ledger: bool,
    #[serde(default)]
    pub delegate: bool,
    /// Hex-encoded compressed public key (unknown until the account has sent once)
    #[serde(default)]
    pub public_key: Option<String>,
}

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            username: None,
            balance: 0,
            second_signature: false,
            ledger: false,
            delegate: false,
            public_key: None,
        }
    }
}

/// Address-book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: Option<String>,
    pub address: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            address: address.into(),
        }
    }

    /// Contact for a bare address (QR scan, payment URI)
    pub fn address_only(address: impl Into<String>) -> Self {
        Self {
            name: None,
            address: address.into(),
        }
    }
}

/// Accounts known to the wallet and the one currently selected
#[derive(Debug, Clone, Default)]
pub struct AccountList {
    pub accounts: Vec<Account>,
    pub selected: Option<Account>,
}

/// Shared handle on the host's account list
#[derive(Debug, Clone, Default)]
pub struct AccountContext {
    inner: Arc<RwLock<AccountList>>,
}

impl AccountContext {
    pub fn new(accounts: Vec<Account>) -> Self {
        let selected = accounts.first().cloned();
        Self {
            inner: Arc::new(RwLock::new(AccountList { accounts, selected })),
        }
    }

    /// Snapshot of the selected account
    pub fn selected(&self) -> Option<Account> {
        self.read(|list| list.selected.clone())
    }

    pub fn selected_address(&self) -> Option<String> {
        self.read(|list| list.selected.as_ref().map(|a| a.address.clone()))
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.read(|list| list.accounts.clone())
    }

    pub fn select(&self, account: Option<Account>) {
        self.write(|list| list.selected = account);
    }

    /// Replace the account list, keeping the selection untouched
    pub fn set_accounts(&self, accounts: Vec<Account>) {
        self.write(|list| list.accounts = accounts);
    }

    fn read<T>(&self, f: impl FnOnce(&AccountList) -> T) -> T {
        // A poisoned lock only means a writer panicked mid-assignment of plain data
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut AccountList)) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}
