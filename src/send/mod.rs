//! Send-transaction dialog logic
//!
//! - `session.rs` - One open dialog: form, receiver validation, submit
//! - `form.rs` - Form state and conversion to builder parameters
//! - `contacts.rs` - Receiver autocomplete
//! - `import.rs` - Offline transaction files
//! - `uri.rs` - `ark:` payment URIs

pub mod contacts;
pub mod form;
pub mod import;
pub mod session;
pub mod uri;

pub use form::{Receiver, SendForm};
pub use session::{SendServices, SendSession};
pub use uri::UriScheme;
