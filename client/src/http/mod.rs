mod client_async_impl;
mod client_sync_impl;
mod client_trait;

pub use client_async_impl::AsyncClient;
pub use client_sync_impl::SyncClient;
pub use client_trait::{RunesIndexerApi, RunesIndexerApiBlocking};

use runeset_types::{ApiResponse, Transaction};

use crate::Error;

/// Default per-request timeout, matching the indexer's own defaults.
pub(crate) const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Decodes a `/transaction/{txid}` response body. The envelope's
/// `statusCode` is authoritative; a non-success value means the indexer
/// has no effect to report for this transaction.
pub(crate) fn decode_transaction(txid: &str, body: &str) -> Result<Transaction, Error> {
    let envelope: ApiResponse<Transaction> = serde_json::from_str(body)?;

    if envelope.status_code != 200 {
        return Err(Error::Rejected {
            txid: txid.to_string(),
            status: envelope.status_code,
            message: envelope.message,
        });
    }

    envelope
        .data
        .ok_or_else(|| Error::MissingData(txid.to_string()))
}
