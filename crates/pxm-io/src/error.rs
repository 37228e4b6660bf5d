//! Error types for PPM I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error, including short reads of the binary payload.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Header or payload violates the P6 format contract.
    #[error("format error: {0}")]
    Format(String),
}

/// Result type for PPM I/O operations.
pub type IoResult<T> = Result<T, IoError>;
