//! ark-send: send flow and account card for the ARK desktop wallet
//!
//! Headless controller logic behind the wallet's account view. Rendering,
//! signing and persistence are delegated to injected services
//! (see [`services`]).
//!
//! # Architecture
//!
//! - **Receiver validation**: format and self-send checks plus concurrent
//!   history and NEO lookups, guarded by a request epoch so only the latest
//!   address is ever reported
//! - **Send session**: form state, contact search, sendable balance,
//!   submission and offline transaction import
//! - **Account card**: menu rules, removal and labelling flows
//! - **Clients**: reqwest clients for the ARK node API and a NEO explorer
//!
//! # Example
//!
//! ```ignore
//! use ark_send::{ReceiverValidator, Severity};
//!
//! let validator = ReceiverValidator::new(accounts, neo, context);
//! let state = validator.validate("AUexKjGtgsSpVzPLs6jNMM6vJ6znEVTQWK").settled().await;
//! if state.severity >= Severity::Warning {
//!     println!("{}", state.message().unwrap_or_default());
//! }
//! ```

pub mod account;
pub mod address;
pub mod card;
pub mod clients;
pub mod config;
pub mod error;
pub mod network;
pub mod registry;
pub mod send;
pub mod services;
pub mod transaction;
pub mod units;
pub mod validation;

// Re-exports for convenience
pub use account::{Account, AccountContext, Contact};
pub use card::{menu_items, AccountCard, MenuAction};
pub use clients::{ArkApiClient, NeoApiClient};
pub use config::SendConfig;
pub use error::SendError;
pub use network::ArkNetwork;
pub use registry::AccountRegistry;
pub use send::{SendServices, SendSession, UriScheme};
pub use transaction::{Fees, SendTransactionParams, Transaction, TransactionRecord};
pub use validation::{Advisory, ReceiverValidator, Severity, Validation, ValidationState};

// Common result type
pub type Result<T> = std::result::Result<T, SendError>;
