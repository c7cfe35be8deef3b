//! Receiver autocomplete over the address book and the wallet's own accounts

use std::cmp::Ordering;

use crate::account::{Account, Contact};
use crate::services::ContactStore;

/// Storage key the address book is kept under
pub const CONTACTS_KEY: &str = "contacts";

/// Address-book entries from storage; an unreadable entry list is treated as empty.
pub fn load_contacts(store: &dyn ContactStore) -> Vec<Contact> {
    match store.get(CONTACTS_KEY) {
        Some(value) => match serde_json::from_value(value) {
            Ok(contacts) => contacts,
            Err(e) => {
                log::warn!("Ignoring malformed contact list: {}", e);
                Vec::new()
            }
        },
        None => Vec::new(),
    }
}

/// Contacts followed by own accounts, named entries first (by name), filtered on
/// `text` appearing in the address or the name, case-insensitively.
pub fn query_search(text: &str, contacts: Vec<Contact>, accounts: &[Account]) -> Vec<Contact> {
    let needle = text.to_lowercase();

    let mut entries: Vec<Contact> = contacts
        .into_iter()
        .chain(accounts.iter().map(|account| Contact {
            name: account.username.clone(),
            address: account.address.clone(),
        }))
        .collect();

    entries.sort_by(|a, b| match (&a.name, &b.name) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    entries
        .into_iter()
        .filter(|entry| {
            entry.address.to_lowercase().contains(&needle)
                || entry
                    .name
                    .as_ref()
                    .map_or(false, |name| name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Inputs starting with `@` are contact handles, not addresses
pub fn check_contacts(input: &str) -> bool {
    !input.starts_with('@')
}
