use crate::account::{Account, Contact};
use crate::address;
use crate::error::SendError;
use crate::transaction::SendTransactionParams;
use crate::units;

use super::uri::UriScheme;

/// What the receiver field holds: typed text or a picked contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receiver {
    Text(String),
    Contact(Contact),
}

impl Receiver {
    pub fn address(&self) -> &str {
        match self {
            Receiver::Text(text) => text,
            Receiver::Contact(contact) => &contact.address,
        }
    }
}

impl Default for Receiver {
    fn default() -> Self {
        Receiver::Text(String::new())
    }
}

/// Editable state of the send dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendForm {
    pub ledger: bool,
    pub from_address: String,
    pub from_label: Option<String>,
    pub second_signature: bool,
    pub passphrase: String,
    pub second_passphrase: String,
    pub receiver: Receiver,
    /// ARK decimal text as typed
    pub amount: String,
    pub smartbridge: Option<String>,
}

impl SendForm {
    /// Prefill from the sending account, its stored passphrases and an optional payment URI
    pub fn for_account(account: &Account, passphrases: &[String], uri: Option<&UriScheme>) -> Self {
        let mut form = Self {
            ledger: account.ledger,
            from_address: account.address.clone(),
            from_label: account.username.clone(),
            second_signature: account.second_signature,
            passphrase: passphrases.first().cloned().unwrap_or_default(),
            second_passphrase: passphrases.get(1).cloned().unwrap_or_default(),
            ..Default::default()
        };

        if let Some(uri) = uri {
            form.amount = uri.amount.clone().unwrap_or_default();
            form.smartbridge = uri.vendor_field.clone();
        }

        form
    }

    /// Clean up copy/paste leftovers before submission
    ///
    /// A picked contact collapses to its address; receiver and passphrases are trimmed.
    pub fn normalize(&mut self) {
        let address = self.receiver.address().trim().to_string();
        self.receiver = Receiver::Text(address);
        self.passphrase = self.passphrase.trim().to_string();
        self.second_passphrase = self.second_passphrase.trim().to_string();
    }

    pub fn to_params(&self, account: &Account) -> Result<SendTransactionParams, SendError> {
        let amount = units::ark_to_arktoshi(&self.amount)?;

        if let Some(public_key) = &account.public_key {
            address::parse_public_key(public_key)?;
        } else if account.ledger {
            return Err(SendError::InvalidPublicKey(format!(
                "Ledger account {} has no public key",
                account.address
            )));
        }

        let second_passphrase = Some(self.second_passphrase.clone()).filter(|p| !p.is_empty());
        let smartbridge = self.smartbridge.clone().filter(|s| !s.is_empty());

        Ok(SendTransactionParams {
            ledger: account.ledger,
            public_key: account.public_key.clone(),
            from_address: self.from_address.clone(),
            to_address: self.receiver.address().to_string(),
            amount,
            smartbridge,
            master_passphrase: self.passphrase.clone(),
            second_passphrase,
        })
    }
}
