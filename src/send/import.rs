//! Import of a pre-built (offline-signed) transaction file

use std::path::Path;

use crate::error::SendError;
use crate::transaction::Transaction;

/// Read a JSON transaction from disk; it must carry a `type` field.
pub async fn read_transaction_file(path: &Path) -> Result<Transaction, SendError> {
    let data = tokio::fs::read_to_string(path).await?;
    let value: serde_json::Value = serde_json::from_str(&data)?;
    Transaction::from_json(value)
}

/// Toast text for a failed import
pub fn import_error_message(error: &SendError) -> String {
    match error {
        SendError::FileRead(_) => error.to_string(),
        SendError::InvalidFileFormat(_) => "Invalid file format".to_string(),
        SendError::InvalidTransactionFile => "Invalid transaction file".to_string(),
        other => other.to_string(),
    }
}
