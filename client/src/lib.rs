mod error;
mod http;
mod retry;

pub use error::Error;

pub use http::{
    AsyncClient as IndexerClient, RunesIndexerApi, RunesIndexerApiBlocking,
    SyncClient as IndexerBlockingClient,
};

pub use retry::{RetryConfig, RetryPolicy};

pub use runeset_types::*;
