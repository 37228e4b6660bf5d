//! Error types for convolution operations.

use thiserror::Error;

/// Error type for convolution operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Kernel fails its structural constraints (even side length, wrong
    /// element count, non-positive weight sum).
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for convolution operations.
pub type OpsResult<T> = Result<T, OpsError>;
