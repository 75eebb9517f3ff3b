//! Error types for card_identity

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for identity builds
///
/// Only totally absent mandatory input is fatal to a build; everything a
/// single malformed printing can cause degrades to defaults instead.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The snapshot held no printings at all
    #[error("Snapshot contains no printings")]
    NoPrintings,
    /// A printing without a Scryfall id cannot receive an identity
    #[error("Printing #{index} ({name}) has no Scryfall id")]
    MissingProviderId { index: usize, name: String },
    /// Snapshot file could not be read or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] mtg_common::Error),
    /// A lookup file exists but is not valid JSON for its table
    #[error("Failed to parse {}: {source}", path.display())]
    Lookup {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to serialize output
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Legacy id cache database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// A background loading task panicked or was cancelled
    #[error("Loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Short alias used throughout the crate
pub type Error = BuildError;

/// Result alias for card_identity operations
pub type Result<T> = std::result::Result<T, BuildError>;
