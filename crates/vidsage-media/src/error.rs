//! Error types for temporary asset operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors that can occur while staging a temporary asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to write temporary asset at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
