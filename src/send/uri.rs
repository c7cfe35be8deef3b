//! `ark:` payment URIs
//!
//! Format: `ark:<address>?amount=<ARK>&vendorField=<text>&label=<text>`

use reqwest::Url;

use crate::error::SendError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriScheme {
    pub address: String,
    /// Amount as ARK decimal text, exactly as given in the URI
    pub amount: Option<String>,
    pub vendor_field: Option<String>,
    pub label: Option<String>,
}

impl UriScheme {
    pub fn parse(uri: &str) -> Result<Self, SendError> {
        let url = Url::parse(uri.trim())
            .map_err(|e| SendError::InvalidAddress(format!("Malformed payment URI: {}", e)))?;

        if url.scheme() != "ark" {
            return Err(SendError::InvalidAddress(format!(
                "Unsupported URI scheme '{}'",
                url.scheme()
            )));
        }

        // `ark:ADDR` keeps the address in the path, `ark://ADDR` in the host
        let address = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => url.path().trim_start_matches('/').to_string(),
        };
        if address.is_empty() {
            return Err(SendError::InvalidAddress(
                "Payment URI has no address".to_string(),
            ));
        }

        let mut scheme = Self {
            address,
            amount: None,
            vendor_field: None,
            label: None,
        };

        for (key, value) in url.query_pairs() {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "amount" => scheme.amount = Some(value.to_string()),
                "vendorField" => scheme.vendor_field = Some(value.to_string()),
                "label" => scheme.label = Some(value.to_string()),
                other => log::debug!("Ignoring URI parameter '{}'", other),
            }
        }

        Ok(scheme)
    }
}
