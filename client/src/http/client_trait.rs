use async_trait::async_trait;
use runeset_types::Transaction;

use crate::Error;

/// Trait for the **async** client methods.
#[async_trait]
pub trait RunesIndexerApi {
    /// Fetches the indexer's view of a transaction by `txid`, including
    /// its rune balance injections. A non-success envelope status maps
    /// to [`Error::Rejected`].
    async fn get_transaction(&self, txid: &str) -> Result<Transaction, Error>;
}

/// Trait for the **blocking** (synchronous) client methods.
pub trait RunesIndexerApiBlocking {
    /// Fetches a transaction by `txid` in a **blocking** manner.
    fn get_transaction(&self, txid: &str) -> Result<Transaction, Error>;
}
