use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::epoch::{Epoch, RequestToken};
use super::severity::Advisory;
use super::state::ValidationState;
use crate::account::AccountContext;
use crate::services::{AccountService, CrossChainLookup};

struct Shared {
    state: ValidationState,
    epoch: Epoch,
    updates: watch::Sender<ValidationState>,
}

impl Shared {
    fn publish(&self) {
        self.updates.send_replace(self.state);
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    // State is a plain value; a panic while holding the lock cannot leave it half-written
    shared.lock().unwrap_or_else(|e| e.into_inner())
}

/// Outcome of the synchronous checks
enum Verdict {
    Clear,
    Flag(Advisory),
    Lookup,
}

/// Raise `advisory` if `token` is still the live request.
fn apply(shared: &Mutex<Shared>, token: RequestToken, advisory: Advisory) {
    let mut shared = lock(shared);
    if !shared.epoch.is_current(token) {
        log::trace!(
            "Dropping stale {:?} from request #{}",
            advisory,
            token.generation()
        );
        return;
    }
    if shared.state.raise(advisory) {
        shared.publish();
    }
}

/// Validates the receiver address of one send session
///
/// Each call to [`validate`](Self::validate) supersedes every earlier one:
/// lookups still in flight for an older address finish, but their results
/// are discarded. Must be called from within a tokio runtime.
pub struct ReceiverValidator {
    accounts: Arc<dyn AccountService>,
    cross_chain: Arc<dyn CrossChainLookup>,
    context: AccountContext,
    shared: Arc<Mutex<Shared>>,
}

impl ReceiverValidator {
    pub fn new(
        accounts: Arc<dyn AccountService>,
        cross_chain: Arc<dyn CrossChainLookup>,
        context: AccountContext,
    ) -> Self {
        let (updates, _) = watch::channel(ValidationState::default());
        Self {
            accounts,
            cross_chain,
            context,
            shared: Arc::new(Mutex::new(Shared {
                state: ValidationState::default(),
                epoch: Epoch::default(),
                updates,
            })),
        }
    }

    /// Snapshot of the advisory currently shown
    pub fn state(&self) -> ValidationState {
        lock(&self.shared).state
    }

    /// Receive every change of the advisory
    pub fn subscribe(&self) -> watch::Receiver<ValidationState> {
        lock(&self.shared).updates.subscribe()
    }

    pub fn validate(&self, address: &str) -> Validation {
        // Host callbacks run before the lock is taken
        let verdict = if address.is_empty() {
            Verdict::Clear
        } else if !self.accounts.is_valid_address(address) {
            Verdict::Flag(Advisory::InvalidAddress)
        } else if self.context.selected_address().as_deref() == Some(address) {
            Verdict::Flag(Advisory::OwnAddress)
        } else {
            Verdict::Lookup
        };

        let token = {
            let mut shared = lock(&self.shared);
            shared.state.reset();
            let token = shared.epoch.advance();

            match verdict {
                Verdict::Lookup => {}
                Verdict::Clear => {
                    shared.publish();
                    return Validation::Settled(shared.state);
                }
                Verdict::Flag(advisory) => {
                    shared.state.raise(advisory);
                    shared.publish();
                    return Validation::Settled(shared.state);
                }
            }

            shared.publish();
            token
        };

        log::debug!(
            "Checking receiver {} (request #{})",
            address,
            token.generation()
        );

        let history = {
            let accounts = self.accounts.clone();
            let shared = self.shared.clone();
            let address = address.to_string();
            tokio::spawn(async move {
                match accounts.get_transactions(&address, 0, 1).await {
                    Ok(transactions) if transactions.is_empty() => {
                        apply(&shared, token, Advisory::NoTransactions)
                    }
                    Ok(_) => {}
                    Err(e) => log::debug!("History lookup for {} inconclusive: {}", address, e),
                }
            })
        };

        let cross_chain = {
            let lookup = self.cross_chain.clone();
            let shared = self.shared.clone();
            let address = address.to_string();
            tokio::spawn(async move {
                match lookup.does_address_exist(&address).await {
                    Ok(true) => apply(&shared, token, Advisory::ForeignChainAddress),
                    Ok(false) => {}
                    Err(e) => {
                        log::debug!("Cross-chain lookup for {} inconclusive: {}", address, e)
                    }
                }
            })
        };

        Validation::Pending(PendingLookups {
            token,
            history,
            cross_chain,
            shared: self.shared.clone(),
        })
    }
}

/// Outcome of [`ReceiverValidator::validate`]
pub enum Validation {
    /// Decided synchronously; no lookups were issued
    Settled(ValidationState),
    /// History and cross-chain lookups are in flight
    Pending(PendingLookups),
}

impl Validation {
    pub fn is_pending(&self) -> bool {
        matches!(self, Validation::Pending(_))
    }

    /// Wait for any lookups, then return the live state.
    pub async fn settled(self) -> ValidationState {
        match self {
            Validation::Settled(state) => state,
            Validation::Pending(pending) => pending.settled().await,
        }
    }
}

pub struct PendingLookups {
    token: RequestToken,
    history: JoinHandle<()>,
    cross_chain: JoinHandle<()>,
    shared: Arc<Mutex<Shared>>,
}

impl PendingLookups {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// Wait for both lookups to finish and return the live state.
    ///
    /// If a newer request was issued meanwhile, the returned state is the
    /// newer request's.
    pub async fn settled(self) -> ValidationState {
        let (history, cross_chain) = futures::future::join(self.history, self.cross_chain).await;
        for result in [history, cross_chain] {
            if let Err(e) = result {
                log::warn!("Lookup task for request #{} failed: {}", self.token.generation(), e);
            }
        }
        lock(&self.shared).state
    }
}
