//! HTTP clients for the chains the send flow talks to
//!
//! - `ark` - ARK node API (transaction history, fees)
//! - `neo` - NEO explorer (cross-chain address check)

pub mod ark;
pub mod neo;

pub use ark::ArkApiClient;
pub use neo::NeoApiClient;
