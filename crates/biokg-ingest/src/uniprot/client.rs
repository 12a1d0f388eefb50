//! HTTP client for the UniProt query endpoint

use crate::error::{LookupError, Result};
use crate::uniprot::config::UniProtConfig;
use crate::uniprot::query::LookupQuery;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Issues one GET per lookup; no retries.
pub struct UniProtClient {
    client: Client,
    api_url: String,
}

impl UniProtClient {
    pub fn new(config: &UniProtConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Fetch the raw XML body for a query
    ///
    /// Failures are returned, not logged; the caller knows which gene they
    /// belong to.
    pub async fn fetch(&self, query: &LookupQuery<'_>) -> std::result::Result<String, LookupError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| {
                let url = e
                    .url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| self.api_url.clone());
                LookupError::Transport { url, source: e }
            })?;

        let url = response.url().to_string();
        let status = response.status();

        if !status.is_success() {
            return Err(LookupError::Status { url, status });
        }

        info!(url = %url, "GET");

        response
            .text()
            .await
            .map_err(|source| LookupError::Transport { url, source })
    }
}
