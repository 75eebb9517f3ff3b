//! Error types for decoding provider data

use thiserror::Error;

/// Errors raised while reading provider snapshots
#[derive(Debug, Error)]
pub enum Error {
    /// Snapshot file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot content is not valid JSON for the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for provider data operations
pub type Result<T> = std::result::Result<T, Error>;
