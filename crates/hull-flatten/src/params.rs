//! Flattening parameters and presets.

use hull_types::Axis;

/// Parameters for hull flattening.
///
/// The defaults reproduce the standard pipeline behavior: project along Z,
/// dig concavities considering the 20 nearest free points per edge, and
/// only accept digs that open the boundary by more than a right angle.
#[derive(Debug, Clone)]
pub struct FlattenParams {
    /// Projection axis.
    pub axis: Axis,

    /// Number of nearest candidate points examined per edge while digging
    /// concavities. `0` disables digging entirely, leaving the convex hull.
    pub neighbor_limit: usize,

    /// Cosine threshold for accepting a dig. A candidate may replace an
    /// edge only when the cosine of the angle it subtends over the edge is
    /// below this value. `0.0` requires the edge to span more than a right
    /// angle as seen from the candidate; lower values allow only shallower
    /// digs.
    pub concavity: f64,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            axis: Axis::Z,
            neighbor_limit: 20,
            concavity: 0.0,
        }
    }
}

impl FlattenParams {
    /// Parameters that skip concavity digging, returning the convex hull
    /// of the projected silhouette.
    #[must_use]
    pub fn convex_only() -> Self {
        Self {
            neighbor_limit: 0,
            ..Default::default()
        }
    }

    /// Set the projection axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the neighbor limit used while digging.
    #[must_use]
    pub const fn with_neighbor_limit(mut self, limit: usize) -> Self {
        self.neighbor_limit = limit;
        self
    }

    /// Set the concavity threshold.
    #[must_use]
    pub const fn with_concavity(mut self, concavity: f64) -> Self {
        self.concavity = concavity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = FlattenParams::default();
        assert_eq!(params.axis, Axis::Z);
        assert_eq!(params.neighbor_limit, 20);
        assert!(params.concavity.abs() < f64::EPSILON);
    }

    #[test]
    fn test_convex_only() {
        let params = FlattenParams::convex_only();
        assert_eq!(params.neighbor_limit, 0);
    }

    #[test]
    fn test_builder() {
        let params = FlattenParams::default()
            .with_axis(Axis::X)
            .with_neighbor_limit(5)
            .with_concavity(-0.5);

        assert_eq!(params.axis, Axis::X);
        assert_eq!(params.neighbor_limit, 5);
        assert!((params.concavity - -0.5).abs() < f64::EPSILON);
    }
}
