//! Error types for hull flattening.

use thiserror::Error;

/// Errors that can occur while extracting a flattened hull.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlattenError {
    /// Projection discarded every input face as degenerate.
    #[error("projection produced no viable triangles")]
    NoViableGeometry,

    /// The polygon union engine failed internally. The underlying cause is
    /// not propagated.
    #[error("merging the projected triangles failed")]
    ClipFailed,

    /// The merged boundary collapsed to fewer than 3 unique points, so no
    /// hull can be built over it.
    #[error("expected at least 3 unique boundary points, got {actual}")]
    DegenerateProjection {
        /// Number of unique points that survived deduplication.
        actual: usize,
    },
}

/// Result type for hull flattening.
pub type FlattenResult<T> = std::result::Result<T, FlattenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FlattenError::NoViableGeometry;
        assert_eq!(format!("{err}"), "projection produced no viable triangles");

        let err = FlattenError::DegenerateProjection { actual: 2 };
        assert!(format!("{err}").contains('2'));
    }
}
