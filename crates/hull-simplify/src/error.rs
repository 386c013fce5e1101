//! Error types for outline simplification.

use thiserror::Error;

/// Errors that can occur during outline simplification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimplifyError {
    /// The input did not contain enough points to form a polyline.
    #[error("polyline needs at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points required.
        required: usize,
        /// Number of points actually supplied.
        actual: usize,
    },
}

/// Result type for outline simplification.
pub type SimplifyResult<T> = std::result::Result<T, SimplifyError>;
