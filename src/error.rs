//! Error types for the send flow
//!
//! Validation advisories are not errors: they live in
//! [`ValidationState`](crate::validation::ValidationState). The variants here
//! cover failures that abort an operation (submission, file import, node
//! queries, configuration).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unable to load file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(#[from] serde_json::Error),

    #[error("Invalid transaction file")]
    InvalidTransactionFile,

    #[error("Transaction builder error: {0}")]
    Builder(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SendError::Api(err.to_string())
        } else {
            SendError::Network(err.to_string())
        }
    }
}

impl SendError {
    /// Whether this error came from talking to a remote service
    /// (node, explorer) rather than from local input.
    pub fn is_remote(&self) -> bool {
        matches!(self, SendError::Api(_) | SendError::Network(_))
    }
}
