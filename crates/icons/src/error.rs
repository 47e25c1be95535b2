//! Error types for batch icon generation

use std::path::PathBuf;

use painting::PaintingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: PaintingError,
    },

    #[error("Failed to report progress: {0}")]
    Report(#[from] std::io::Error),
}
