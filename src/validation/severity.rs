use serde::{Deserialize, Serialize};

/// How strongly the UI should flag the receiver address
///
/// Ordered: `None < Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    None,
    Info,
    Warning,
    Error,
}

/// Why an address was flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    InvalidAddress,
    OwnAddress,
    NoTransactions,
    ForeignChainAddress,
}

impl Advisory {
    pub fn severity(&self) -> Severity {
        match self {
            Advisory::InvalidAddress => Severity::Error,
            Advisory::OwnAddress => Severity::Warning,
            Advisory::NoTransactions => Severity::Info,
            Advisory::ForeignChainAddress => Severity::Warning,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advisory::InvalidAddress => "The address is not valid!",
            Advisory::OwnAddress => {
                "This address is your own address. Are you sure you want to send to your own address?"
            }
            Advisory::NoTransactions => {
                "It appears the address doesn't have any transactions. Are you sure it's correct?"
            }
            Advisory::ForeignChainAddress => {
                "It looks like this is a 'NEO' address. Are you sure it's correct?"
            }
        }
    }
}
