use async_trait::async_trait;

use crate::config::SendConfig;
use crate::error::SendError;
use crate::services::CrossChainLookup;

/// HTTP client for a NEO explorer (neoscan API)
///
/// ARK and legacy NEO addresses share the base58check layout and version
/// byte, so format checks cannot tell them apart. An address the explorer
/// has seen transact is assumed to be a NEO address.
#[derive(Clone)]
pub struct NeoApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NeoApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &SendConfig) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| SendError::Config(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.neo_api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn last_transactions(&self, address: &str) -> Result<Vec<serde_json::Value>, SendError> {
        let url = format!(
            "{}/v1/get_last_transactions_by_address/{}",
            self.base_url, address
        );

        let response = self.client.get(&url).send().await?;

        // Unknown addresses are reported as 404 by some explorer deployments
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(SendError::Api(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CrossChainLookup for NeoApiClient {
    async fn does_address_exist(&self, address: &str) -> Result<bool, SendError> {
        let transactions = self.last_transactions(address).await?;
        Ok(!transactions.is_empty())
    }
}
