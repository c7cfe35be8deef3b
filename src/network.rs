//! ARK network parameters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArkNetwork {
    Mainnet,
    Devnet,
}

impl ArkNetwork {
    /// Address version byte (first byte of the base58check payload).
    ///
    /// - Mainnet: 0x17 (addresses start with `A`)
    /// - Devnet: 0x1e (addresses start with `D`)
    pub fn address_version(&self) -> u8 {
        match self {
            ArkNetwork::Mainnet => 0x17,
            ArkNetwork::Devnet => 0x1e,
        }
    }

    pub fn default_api_url(&self) -> &'static str {
        match self {
            ArkNetwork::Mainnet => "https://node1.arknet.cloud",
            ArkNetwork::Devnet => "https://dexplorer.ark.io:8443",
        }
    }

    pub fn default_explorer_url(&self) -> &'static str {
        match self {
            ArkNetwork::Mainnet => "https://explorer.ark.io",
            ArkNetwork::Devnet => "https://dexplorer.ark.io",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArkNetwork::Mainnet => "mainnet",
            ArkNetwork::Devnet => "devnet",
        }
    }
}

impl std::str::FromStr for ArkNetwork {
    type Err = crate::error::SendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "main" | "" => Ok(ArkNetwork::Mainnet),
            "devnet" | "dev" => Ok(ArkNetwork::Devnet),
            other => Err(crate::error::SendError::Config(format!(
                "Unknown network '{}'",
                other
            ))),
        }
    }
}
