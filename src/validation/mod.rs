//! Receiver address validation
//!
//! Combines a synchronous format check and self-send check with two
//! concurrent lookups:
//!
//! - **History**: an address that never transacted gets an info advisory
//! - **Cross-chain**: an address known to the NEO explorer gets a warning
//!
//! Every call advances a request [`Epoch`]; lookups resuming with an older
//! [`RequestToken`] are dropped, so rapid typing can never surface the
//! verdict for an address the user already replaced.

mod epoch;
mod severity;
mod state;
mod validator;

pub use epoch::{Epoch, RequestToken};
pub use severity::{Advisory, Severity};
pub use state::ValidationState;
pub use validator::{PendingLookups, ReceiverValidator, Validation};
