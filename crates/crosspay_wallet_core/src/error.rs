use thiserror::Error;

/// The only error a ledger mutation surfaces to callers.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Exchange rate not available for {0}")]
    RateUnavailable(String),
}

/// Rate-lookup failures. All variants are treated uniformly by the store:
/// logged, loading flag cleared, rate table left as-is.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("rate request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate endpoint returned status {0}")]
    Status(u16),

    #[error("malformed rate payload: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
}
