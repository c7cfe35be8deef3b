use std::path::Path;
use std::sync::Arc;

use crate::account::{Account, AccountContext, Contact};
use crate::error::SendError;
use crate::services::{
    AccountHooks, AccountService, ContactStore, CrossChainLookup, Notifier, TransactionBuilder,
};
use crate::transaction::Transaction;
use crate::units;
use crate::validation::{ReceiverValidator, Validation, ValidationState};

use super::contacts;
use super::form::{Receiver, SendForm};
use super::import;
use super::uri::UriScheme;

/// Collaborators shared by the account card and every send session it opens
#[derive(Clone)]
pub struct SendServices {
    pub accounts: Arc<dyn AccountService>,
    pub cross_chain: Arc<dyn CrossChainLookup>,
    pub builder: Arc<dyn TransactionBuilder>,
    pub contacts: Arc<dyn ContactStore>,
    pub notifier: Arc<dyn Notifier>,
    pub hooks: Arc<dyn AccountHooks>,
    pub context: AccountContext,
}

/// One open send dialog
///
/// Owns the form, the receiver validator and its request epoch; all of it is
/// dropped when the dialog closes.
pub struct SendSession {
    services: SendServices,
    account: Account,
    form: SendForm,
    validator: ReceiverValidator,
    remaining_balance: u64,
}

impl SendSession {
    /// Open a session for `account`, optionally prefilled from a payment URI.
    ///
    /// Must be called from within a tokio runtime when `uri` carries an
    /// address, since selecting it starts validation lookups.
    pub fn open(services: SendServices, account: Account, uri: Option<UriScheme>) -> Self {
        let passphrases = services.accounts.passphrases(&account.address);
        let form = SendForm::for_account(&account, &passphrases, uri.as_ref());
        let validator = ReceiverValidator::new(
            services.accounts.clone(),
            services.cross_chain.clone(),
            services.context.clone(),
        );

        log::debug!("Opening send session for {}", account.address);

        let mut session = Self {
            remaining_balance: account.balance,
            services,
            account,
            form,
            validator,
        };

        if let Some(uri) = uri {
            session.selected_contact_change(Some(Contact::address_only(uri.address)));
        }

        session
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn form(&self) -> &SendForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SendForm {
        &mut self.form
    }

    pub fn validator(&self) -> &ReceiverValidator {
        &self.validator
    }

    pub fn validation(&self) -> ValidationState {
        self.validator.state()
    }

    /// Receiver text edited by the user
    pub fn search_text_change(&mut self, text: &str) -> Validation {
        self.form.receiver = Receiver::Text(text.to_string());
        self.validator.validate(text)
    }

    /// Autocomplete selection changed; `None` (selection cleared) leaves the form alone.
    pub fn selected_contact_change(&mut self, contact: Option<Contact>) -> Option<Validation> {
        let contact = contact?;
        let validation = self.validator.validate(&contact.address);
        self.form.receiver = Receiver::Contact(contact);
        Some(validation)
    }

    pub fn qr_code_scanned(&mut self, address: &str) -> Validation {
        self.form.receiver = Receiver::Contact(Contact::address_only(address));
        self.validator.validate(address)
    }

    pub fn query_search(&self, text: &str) -> Vec<Contact> {
        let book = contacts::load_contacts(self.services.contacts.as_ref());
        contacts::query_search(text, book, &self.services.context.accounts())
    }

    pub fn check_contacts(input: &str) -> bool {
        contacts::check_contacts(input)
    }

    /// Account balance minus `fee`, in arktoshi, never negative
    pub fn total_balance(&self, fee: u64) -> u64 {
        units::sendable_balance(self.account.balance, fee)
    }

    pub fn remaining_balance(&self) -> u64 {
        self.remaining_balance
    }

    /// Updated by the amount field as the user types
    pub fn set_remaining_balance(&mut self, arktoshi: u64) {
        self.remaining_balance = arktoshi;
    }

    /// Put the whole sendable balance into the amount field.
    ///
    /// Uses the default send fee right away, then the node's live fee if it
    /// differs. Returns the final amount in arktoshi.
    pub async fn fill_sendable_balance(&mut self) -> u64 {
        let default_fee = self.services.accounts.default_fees().send;
        let mut amount = self.total_balance(default_fee);
        self.form.amount = units::arktoshi_to_ark(amount);

        match self.services.accounts.fees(true).await {
            Ok(fees) if fees.send != default_fee => {
                amount = self.total_balance(fees.send);
                self.form.amount = units::arktoshi_to_ark(amount);
            }
            Ok(_) => {}
            Err(e) => log::warn!("Keeping default send fee, fee lookup failed: {}", e),
        }

        amount
    }

    /// Build the transaction from the form.
    ///
    /// Returns `Ok(None)` when the surrounding form is not valid. On success
    /// the transaction is handed to the review flow; failures are toasted and
    /// returned.
    pub async fn submit(&mut self, form_valid: bool) -> Result<Option<Transaction>, SendError> {
        if !form_valid {
            return Ok(None);
        }

        self.form.normalize();

        let params = match self.form.to_params(&self.account) {
            Ok(params) => params,
            Err(e) => return Err(self.report(e)),
        };

        log::info!(
            "Building transfer {} → {} ({} arktoshi)",
            params.from_address,
            params.to_address,
            params.amount
        );

        match self.services.builder.create_send_transaction(params).await {
            Ok(transaction) => {
                self.services
                    .hooks
                    .show_validate_transaction(&self.account, &transaction);
                Ok(Some(transaction))
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// Load an offline-built transaction; `None` means the file dialog was cancelled.
    pub async fn import_transaction_file(
        &self,
        path: Option<&Path>,
    ) -> Result<Option<Transaction>, SendError> {
        let Some(path) = path else {
            return Ok(None);
        };

        match import::read_transaction_file(path).await {
            Ok(transaction) => {
                self.services
                    .hooks
                    .show_validate_transaction(&self.account, &transaction);
                Ok(Some(transaction))
            }
            Err(e) => {
                log::warn!("Rejected transaction file {}: {}", path.display(), e);
                self.services
                    .notifier
                    .error(&import::import_error_message(&e));
                Err(e)
            }
        }
    }

    fn report(&self, error: SendError) -> SendError {
        log::error!("Send from {} failed: {}", self.account.address, error);
        let message = self.services.hooks.format_error(&error);
        self.services.notifier.error(&message);
        error
    }
}
