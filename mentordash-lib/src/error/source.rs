//! SourceError for dataset loading

/// Error type for loading a dataset from disk.
///
/// Upstream fetch failures are the data-fetching collaborator's problem; the
/// engine only sees a dataset or the lack of one. This covers the local
/// file-backed source used by the CLI and tests.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset was not a valid JSON array of records.
    #[error("Failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
}
