//! Principal-axis selector for planar projection.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three canonical world axes.
///
/// Selecting an axis projects geometry onto the plane perpendicular to it
/// by dropping the matching coordinate. The remaining two coordinates keep
/// their original order:
///
/// - `X` drops x, keeping (y, z)
/// - `Y` drops y, keeping (x, z)
/// - `Z` drops z, keeping (x, y)
///
/// # Example
///
/// ```
/// use hull_types::{Axis, Point3};
///
/// let p = Point3::new(1.0, 2.0, 3.0);
/// assert_eq!(Axis::X.project(&p), (2.0, 3.0));
/// assert_eq!(Axis::Y.project(&p), (1.0, 3.0));
/// assert_eq!(Axis::Z.project(&p), (1.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Project onto the YZ plane.
    X,
    /// Project onto the XZ plane.
    Y,
    /// Project onto the XY plane.
    #[default]
    Z,
}

impl Axis {
    /// Project a 3D point onto the plane perpendicular to this axis.
    #[inline]
    #[must_use]
    pub fn project(self, p: &Point3<f64>) -> (f64, f64) {
        match self {
            Self::X => (p.y, p.z),
            Self::Y => (p.x, p.z),
            Self::Z => (p.x, p.y),
        }
    }
}
