use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::palette::Hex;

/// Default colornames.org search endpoint
pub const DEFAULT_NAMING_ENDPOINT: &str = "https://colornames.org/search/json/";

/// Resolves a hex color to a display name
pub trait ColorNamer: Send + Sync + 'static {
    /// `Ok(None)` means the service answered but knows no name
    fn lookup(&self, hex: &Hex) -> impl Future<Output = Result<Option<String>>> + Send;
}

#[derive(Debug, Deserialize)]
struct NameResponse {
    #[serde(default)]
    name: Option<String>,
}

/// HTTP client for the colornames.org JSON search
#[derive(Debug, Clone)]
pub struct ColorNamesClient {
    client: Client,
    endpoint: String,
}

impl ColorNamesClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::NamingLookupFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl ColorNamer for ColorNamesClient {
    async fn lookup(&self, hex: &Hex) -> Result<Option<String>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("hex", hex.as_str())])
            .send()
            .await
            .map_err(|e| Error::NamingLookupFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::NamingLookupFailed(format!("{}: {}", status, body.trim())));
        }

        let body: NameResponse = response
            .json()
            .await
            .map_err(|e| Error::NamingLookupFailed(e.to_string()))?;

        Ok(body.name)
    }
}
