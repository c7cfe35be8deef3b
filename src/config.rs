/// Send-flow configuration from environment variables
///
/// Controls the ARK network, the node API used for history and fee lookups,
/// and the NEO explorer used for the cross-chain address check.
/// Defaults to Mainnet.

use std::env;
use std::time::Duration;

use crate::network::ArkNetwork;

/// NEO explorer endpoint used for the cross-chain address check
pub const DEFAULT_NEO_API_URL: &str = "https://neoscan.io/api/main_net";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct SendConfig {
    /// ARK network (address version byte, default endpoints)
    pub network: ArkNetwork,
    /// ARK node API base URL
    pub ark_api_url: String,
    /// NEO explorer API base URL
    pub neo_api_url: String,
    /// Block explorer base URL (for "Open in explorer")
    pub explorer_url: String,
    /// Per-request timeout for the HTTP clients
    pub http_timeout: Duration,
}

impl SendConfig {
    /// Load configuration from environment variables (and `.env`, if present)
    ///
    /// Environment variables:
    /// - `ARK_NETWORK`: "mainnet" (default) or "devnet"
    /// - `ARK_API_URL`: ARK node API endpoint (optional, defaults per network)
    /// - `NEO_API_URL`: NEO explorer endpoint (optional)
    /// - `EXPLORER_URL`: block explorer base URL (optional, defaults per network)
    /// - `HTTP_TIMEOUT_SECS`: request timeout in seconds (default 10)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Devnet against a local explorer mock
    /// ARK_NETWORK=devnet ARK_API_URL=http://localhost:4003 NEO_API_URL=http://localhost:4003/neo cargo test
    /// ```
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let network = match env::var("ARK_NETWORK") {
            Ok(value) => match value.parse::<ArkNetwork>() {
                Ok(network) => network,
                Err(e) => {
                    log::warn!("⚠️  {}, defaulting to mainnet", e);
                    ArkNetwork::Mainnet
                }
            },
            Err(_) => ArkNetwork::Mainnet,
        };
        log::info!("🌐 Using ARK {} network", network.name());

        let ark_api_url = env::var("ARK_API_URL")
            .unwrap_or_else(|_| network.default_api_url().to_string());
        log::info!("📡 ARK API URL: {}", ark_api_url);

        let neo_api_url =
            env::var("NEO_API_URL").unwrap_or_else(|_| DEFAULT_NEO_API_URL.to_string());
        log::info!("🔗 NEO API URL: {}", neo_api_url);

        let explorer_url = env::var("EXPLORER_URL")
            .unwrap_or_else(|_| network.default_explorer_url().to_string());

        let http_timeout = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| match value.parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(_) => {
                    log::warn!("⚠️  Invalid HTTP_TIMEOUT_SECS '{}', using default", value);
                    None
                }
            })
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            network,
            ark_api_url,
            neo_api_url,
            explorer_url,
            http_timeout: Duration::from_secs(http_timeout),
        }
    }

    /// Full explorer URL for a path such as `/address/<addr>`
    pub fn explorer_link(&self, path: &str) -> String {
        format!("{}{}", self.explorer_url.trim_end_matches('/'), path)
    }
}

impl Default for SendConfig {
    /// Default configuration (Mainnet)
    fn default() -> Self {
        let network = ArkNetwork::Mainnet;
        Self {
            network,
            ark_api_url: network.default_api_url().to_string(),
            neo_api_url: DEFAULT_NEO_API_URL.to_string(),
            explorer_url: network.default_explorer_url().to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
