use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode indexer response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("indexer rejected transaction {txid} with status {status}")]
    Rejected {
        txid: String,
        status: u16,
        message: Option<String>,
    },

    #[error("indexer response for {0} is missing the data payload")]
    MissingData(String),
}

impl Error {
    /// Transient failures are worth retrying. A `Rejected` envelope is
    /// the indexer's final word on the transaction, so the caller has to
    /// decide between skipping it and failing.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Error::Rejected { .. })
    }
}
