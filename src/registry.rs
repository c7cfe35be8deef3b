//! In-memory account registry
//!
//! Concrete [`AccountService`] for hosts that keep accounts in memory and
//! reach an ARK node over HTTP. Persisting accounts is the host's job.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::account::Account;
use crate::address;
use crate::clients::ArkApiClient;
use crate::error::SendError;
use crate::network::ArkNetwork;
use crate::services::AccountService;
use crate::transaction::{Fees, TransactionRecord};

#[derive(Default)]
struct Book {
    accounts: Vec<Account>,
    usernames: HashMap<String, String>,
    passphrases: HashMap<String, Vec<String>>,
    fees: Option<Fees>,
}

pub struct AccountRegistry {
    network: ArkNetwork,
    api: ArkApiClient,
    book: RwLock<Book>,
}

impl AccountRegistry {
    pub fn new(network: ArkNetwork, api: ArkApiClient) -> Self {
        Self {
            network,
            api,
            book: RwLock::new(Book::default()),
        }
    }

    pub fn network(&self) -> ArkNetwork {
        self.network
    }

    /// Add or replace an account, keyed by address
    pub fn add_account(&self, account: Account) {
        let mut book = self.book.write().unwrap_or_else(|e| e.into_inner());
        match book.accounts.iter_mut().find(|a| a.address == account.address) {
            Some(existing) => *existing = account,
            None => book.accounts.push(account),
        }
    }

    pub fn store_passphrases(&self, address: &str, passphrases: Vec<String>) {
        let mut book = self.book.write().unwrap_or_else(|e| e.into_inner());
        book.passphrases.insert(address.to_string(), passphrases);
    }

    fn read<T>(&self, f: impl FnOnce(&Book) -> T) -> T {
        let book = self.book.read().unwrap_or_else(|e| e.into_inner());
        f(&book)
    }

    fn write<T>(&self, f: impl FnOnce(&mut Book) -> T) -> T {
        let mut book = self.book.write().unwrap_or_else(|e| e.into_inner());
        f(&mut book)
    }
}

#[async_trait]
impl AccountService for AccountRegistry {
    fn passphrases(&self, address: &str) -> Vec<String> {
        self.read(|book| book.passphrases.get(address).cloned().unwrap_or_default())
    }

    fn is_valid_address(&self, address: &str) -> bool {
        address::is_valid_address(address, self.network)
    }

    fn username(&self, address: &str) -> Option<String> {
        self.read(|book| book.usernames.get(address).cloned())
    }

    fn set_username(&self, address: &str, label: &str) {
        self.write(|book| {
            book.usernames.insert(address.to_string(), label.to_string());
            for account in book.accounts.iter_mut().filter(|a| a.address == address) {
                account.username = Some(label.to_string());
            }
        });
    }

    fn load_all_accounts(&self) -> Vec<Account> {
        self.read(|book| {
            book.accounts
                .iter()
                .cloned()
                .map(|mut account| {
                    if let Some(label) = book.usernames.get(&account.address) {
                        account.username = Some(label.clone());
                    }
                    account
                })
                .collect()
        })
    }

    fn default_fees(&self) -> Fees {
        Fees::default()
    }

    async fn get_transactions(
        &self,
        address: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<TransactionRecord>, SendError> {
        self.api.get_transactions(address, offset, limit).await
    }

    async fn remove_account(&self, account: &Account) -> Result<(), SendError> {
        self.write(|book| {
            let before = book.accounts.len();
            book.accounts.retain(|a| a.address != account.address);
            if book.accounts.len() == before {
                return Err(SendError::AccountNotFound(account.address.clone()));
            }
            book.passphrases.remove(&account.address);
            book.usernames.remove(&account.address);
            Ok(())
        })?;
        log::info!("Account {} removed", account.address);
        Ok(())
    }

    async fn fees(&self, refresh: bool) -> Result<Fees, SendError> {
        if !refresh {
            if let Some(fees) = self.read(|book| book.fees) {
                return Ok(fees);
            }
        }
        let fees = self.api.get_fees().await?;
        self.write(|book| book.fees = Some(fees));
        Ok(fees)
    }
}
