use std::time::Duration;

use reqwest::blocking::Client as BlockingReqwestClient;
use runeset_types::Transaction;

use crate::Error;

use super::{decode_transaction, RunesIndexerApiBlocking, DEFAULT_TIMEOUT};

#[derive(Clone)]
pub struct SyncClient {
    /// The **blocking** HTTP client from `reqwest::blocking`.
    http_client: BlockingReqwestClient,
    /// The base URL for all endpoints (e.g. https://mainnet-indexer-api.runealpha.xyz).
    base_url: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl SyncClient {
    /// Creates a new `SyncClient` for the given `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: BlockingReqwestClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn call_text(&self, path: &str) -> Result<String, Error> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http_client.get(&url).timeout(self.timeout).send()?;
        Ok(response.text()?)
    }
}

impl RunesIndexerApiBlocking for SyncClient {
    fn get_transaction(&self, txid: &str) -> Result<Transaction, Error> {
        let text = self.call_text(&format!("/transaction/{}", txid))?;
        decode_transaction(txid, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[test]
    fn decodes_transaction_envelope() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/transaction/tx1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "statusCode": 200,
                    "data": {
                        "txid": "tx1",
                        "vin": [],
                        "vout": [{"runeInject": [{"utxo": {"rune_id": "840100:5", "amount": "1000"}}]}]
                    }
                })
                .to_string(),
            )
            .create();

        let client = SyncClient::new(&server.url());
        let tx = client.get_transaction("tx1").unwrap();

        assert_eq!(tx.txid, "tx1");
        assert_eq!(tx.vout[0].rune_inject[0].utxo.amount, 1000);
        mock.assert();
    }

    #[test]
    fn non_success_status_code_is_rejected() {
        let mut server = Server::new();
        server
            .mock("GET", "/transaction/tx1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"statusCode": 500, "message": "indexer lagging"}).to_string())
            .create();

        let client = SyncClient::new(&server.url());
        let err = client.get_transaction("tx1").unwrap_err();

        assert!(matches!(err, Error::Rejected { status: 500, .. }));
    }
}
