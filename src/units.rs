//! ARK ↔ arktoshi conversion
//!
//! Amounts are exchanged with the user as decimal text and handled
//! internally as integer arktoshi (1 ARK = 10^8 arktoshi). No floating
//! point is involved in either direction.

use crate::error::SendError;

pub const ARKTOSHI_PER_ARK: u64 = 100_000_000;
const DECIMALS: usize = 8;

/// Parse a user-entered ARK amount ("1", "0.5", "12.00000001") into arktoshi.
pub fn ark_to_arktoshi(amount: &str) -> Result<u64, SendError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(SendError::InvalidAmount("empty amount".to_string()));
    }

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(SendError::InvalidAmount(amount.to_string()));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(SendError::InvalidAmount(amount.to_string()));
    }
    if fraction.len() > DECIMALS {
        return Err(SendError::InvalidAmount(format!(
            "{} has more than {} decimals",
            amount, DECIMALS
        )));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| SendError::InvalidAmount(amount.to_string()))?
    };
    let fraction: u64 = format!("{:0<width$}", fraction, width = DECIMALS)
        .parse()
        .map_err(|_| SendError::InvalidAmount(amount.to_string()))?;

    whole
        .checked_mul(ARKTOSHI_PER_ARK)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(|| SendError::InvalidAmount(format!("{} is out of range", amount)))
}

/// Format arktoshi as the shortest ARK decimal ("1", "0.1", "0.00000001").
pub fn arktoshi_to_ark(arktoshi: u64) -> String {
    let whole = arktoshi / ARKTOSHI_PER_ARK;
    let fraction = arktoshi % ARKTOSHI_PER_ARK;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{:0width$}", fraction, width = DECIMALS);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

/// Balance left after paying `fee`; never negative.
pub fn sendable_balance(balance: u64, fee: u64) -> u64 {
    balance.saturating_sub(fee)
}
