//! Account card
//!
//! Per-account actions offered from the wallet's account view: the bottom
//! sheet menu, removal, labelling, and opening send dialogs (directly or
//! from an `ark:` URI).

use std::sync::Arc;

use crate::account::Account;
use crate::error::SendError;
use crate::send::{SendServices, SendSession, UriScheme};
use crate::services::{ConfirmDialog, Dialogs, PromptDialog};

const TOAST_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    OpenInExplorer,
    Remove,
    Label,
    RegisterDelegate,
    TimestampDocument,
    SecondPassphrase,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::OpenInExplorer => "Open in explorer",
            MenuAction::Remove => "Remove",
            MenuAction::Label => "Label",
            MenuAction::RegisterDelegate => "Register Delegate",
            MenuAction::TimestampDocument => "Timestamp Document",
            MenuAction::SecondPassphrase => "Second Passphrase",
        }
    }
}

/// Actions offered for `account`, in display order
pub fn menu_items(account: &Account) -> Vec<MenuAction> {
    let mut items = vec![MenuAction::OpenInExplorer];

    if !account.ledger {
        items.push(MenuAction::Remove);
    }
    if !account.delegate {
        items.push(MenuAction::Label);
        if !account.ledger {
            items.push(MenuAction::RegisterDelegate);
        }
    }

    items.push(MenuAction::TimestampDocument);

    if !account.second_signature && !account.ledger {
        items.push(MenuAction::SecondPassphrase);
    }

    items
}

pub struct AccountCard {
    services: SendServices,
    dialogs: Arc<dyn Dialogs>,
}

impl AccountCard {
    pub fn new(services: SendServices, dialogs: Arc<dyn Dialogs>) -> Self {
        Self { services, dialogs }
    }

    pub fn services(&self) -> &SendServices {
        &self.services
    }

    /// Ask for confirmation, then remove the account and move the selection
    /// to the first remaining one. Returns whether the account was removed.
    pub async fn confirm_removal(&self, account: &Account) -> Result<bool, SendError> {
        let dialog = ConfirmDialog {
            title: format!("Remove Account {}", account.address),
            text: "Remove this account from your wallet. \
                   The account may be added again using the original passphrase of the account."
                .to_string(),
            ok: "Remove account".to_string(),
            cancel: "Cancel".to_string(),
        };

        if !self.dialogs.confirm(dialog).await {
            return Ok(false);
        }

        self.services.accounts.remove_account(account).await?;

        let accounts = self.services.accounts.load_all_accounts();
        let next = accounts.first().cloned();
        self.services.context.set_accounts(accounts);
        self.services.context.select(next);

        self.services.notifier.success("Account removed!", TOAST_MS);
        Ok(true)
    }

    /// Prompt for a new label. Returns whether a label was set.
    pub async fn prompt_label(&self, account: &Account) -> bool {
        let dialog = PromptDialog {
            title: "Label".to_string(),
            text: "Please enter a short label.".to_string(),
            placeholder: "Label".to_string(),
            initial_value: self.services.accounts.username(&account.address),
            ok: "Set".to_string(),
            cancel: "Cancel".to_string(),
        };

        let Some(label) = self.dialogs.prompt(dialog).await else {
            return false;
        };

        self.services.accounts.set_username(&account.address, &label);
        self.services
            .context
            .set_accounts(self.services.accounts.load_all_accounts());
        self.services.notifier.success("Label set", TOAST_MS);
        true
    }

    /// Handle a bottom-sheet selection
    pub async fn answer(&self, action: MenuAction, account: &Account) -> Result<(), SendError> {
        log::debug!("Menu action {:?} for {}", action, account.address);
        let hooks = &self.services.hooks;

        match action {
            MenuAction::OpenInExplorer => {
                hooks.open_explorer(&format!("/address/{}", account.address))
            }
            MenuAction::TimestampDocument => hooks.timestamp(account),
            MenuAction::Remove => {
                self.confirm_removal(account).await?;
            }
            MenuAction::RegisterDelegate => hooks.create_delegate(account),
            MenuAction::Label => {
                self.prompt_label(account).await;
            }
            MenuAction::SecondPassphrase => hooks.create_second_passphrase(account),
        }

        Ok(())
    }

    pub fn show_send_transaction(&self, account: Account, uri: Option<UriScheme>) -> SendSession {
        SendSession::open(self.services.clone(), account, uri)
    }

    /// Payment URI opened by the OS: send from the currently selected account
    pub fn on_uri(&self, uri: UriScheme) -> Option<SendSession> {
        match self.services.context.selected() {
            Some(account) => Some(self.show_send_transaction(account, Some(uri))),
            None => {
                log::warn!("Ignoring payment URI for {}: no account selected", uri.address);
                None
            }
        }
    }
}
