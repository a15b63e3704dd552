use thiserror::Error;

/// Failures while moving cases across the JSON boundary.
///
/// Single imports surface these directly; bulk imports convert them
/// into failure counts so one bad record never aborts a batch.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("malformed case JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("case record is missing an id")]
    MissingId,
}

/// Failures while reading a shared case package.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("invalid package format: {0}")]
    Invalid(#[from] serde_json::Error),
}
