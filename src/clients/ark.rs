use serde::Deserialize;

use crate::config::SendConfig;
use crate::error::SendError;
use crate::transaction::{Fees, TransactionRecord};

#[derive(Debug, Deserialize)]
struct TransactionsResponse {
    success: bool,
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FeesResponse {
    success: bool,
    #[serde(default)]
    fees: Option<Fees>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for an ARK node's public API
#[derive(Clone)]
pub struct ArkApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ArkApiClient {
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
            base_url: config.ark_api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Transactions sent or received by `address`, newest first
    pub async fn get_transactions(
        &self,
        address: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<TransactionRecord>, SendError> {
        let url = format!("{}/api/transactions", self.base_url);
        let offset = offset.to_string();
        let limit = limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("orderBy", "timestamp:desc"),
                ("offset", offset.as_str()),
                ("limit", limit.as_str()),
                ("recipientId", address),
                ("senderId", address),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SendError::Api(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }

        let body: TransactionsResponse = response.json().await?;
        if !body.success {
            return Err(SendError::Api(
                body.error
                    .unwrap_or_else(|| "transaction query rejected".to_string()),
            ));
        }

        log::debug!(
            "Fetched {} transaction(s) for {}",
            body.transactions.len(),
            address
        );
        Ok(body.transactions)
    }

    pub async fn get_fees(&self) -> Result<Fees, SendError> {
        let url = format!("{}/api/blocks/getFees", self.base_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SendError::Api(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }

        let body: FeesResponse = response.json().await?;
        match (body.success, body.fees) {
            (true, Some(fees)) => Ok(fees),
            _ => Err(SendError::Api(
                body.error.unwrap_or_else(|| "fee query rejected".to_string()),
            )),
        }
    }
}
