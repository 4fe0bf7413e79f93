use std::time::Duration;

use reqwest::Client as AsyncReqwestClient;
use runeset_types::Transaction;

use crate::Error;

use super::{decode_transaction, RunesIndexerApi, DEFAULT_TIMEOUT};

#[derive(Clone)]
pub struct AsyncClient {
    /// The async HTTP client from `reqwest`.
    http_client: AsyncReqwestClient,
    /// The base URL for all endpoints (e.g. https://mainnet-indexer-api.runealpha.xyz).
    base_url: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl AsyncClient {
    /// Creates a new `AsyncClient` for the given `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: AsyncReqwestClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn call_text(&self, path: &str) -> Result<String, Error> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http_client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;
        // Failures are reported inside the envelope, so the body is read
        // regardless of the HTTP status line.
        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl RunesIndexerApi for AsyncClient {
    async fn get_transaction(&self, txid: &str) -> Result<Transaction, Error> {
        let text = self.call_text(&format!("/transaction/{}", txid)).await?;
        decode_transaction(txid, &text)
    }
}
