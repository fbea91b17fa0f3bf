//! Error types for the file boundary.
//!
//! The stages themselves are total and never fail; only reading the source
//! and writing the destination can.

use std::path::PathBuf;

/// Errors raised while reading the source or writing the destination.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file does not exist.
    #[error("Missing {}", path.display())]
    MissingSource { path: PathBuf },

    /// The source exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The destination could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used by the file boundary.
pub type Result<T> = std::result::Result<T, Error>;
