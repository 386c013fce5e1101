//! Fixed-point 2D coordinates and canonical triangles.

// Scaled coordinates stay far below 2^53; the f64 round trip is exact.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point quantized to a fixed-point integer grid.
///
/// Each coordinate is the original value multiplied by [`ScaledPoint::SCALE`]
/// and rounded to the nearest integer, giving 2 decimal digits of precision.
/// The integer domain makes downstream polygon merging exact: two points are
/// equal exactly when their integer coordinates are equal.
///
/// # Example
///
/// ```
/// use hull_types::ScaledPoint;
///
/// let p = ScaledPoint::from_unscaled(1.234, -0.5);
/// assert_eq!(p, ScaledPoint { x: 123, y: -50 });
///
/// let back = p.to_unscaled();
/// assert!((back.x - 1.23).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaledPoint {
    /// Scaled x coordinate.
    pub x: i64,
    /// Scaled y coordinate.
    pub y: i64,
}

impl ScaledPoint {
    /// Fixed-point scale factor: 2 decimal digits.
    pub const SCALE: f64 = 100.0;

    /// Quantize an unscaled coordinate pair onto the integer grid.
    #[inline]
    #[must_use]
    pub fn from_unscaled(u: f64, v: f64) -> Self {
        Self {
            x: (u * Self::SCALE).round() as i64,
            y: (v * Self::SCALE).round() as i64,
        }
    }

    /// Convert back to original units.
    #[inline]
    #[must_use]
    pub fn to_unscaled(self) -> Point2<f64> {
        Point2::new(self.x as f64 / Self::SCALE, self.y as f64 / Self::SCALE)
    }
}

/// A projected triangle on the fixed-point grid.
///
/// Vertices are stored in canonical order (see `hull-flatten`): sorted
/// ascending by x then y, with the second and third vertex arranged so that
/// every triangle carries the same winding. Invariants: the three vertices
/// are pairwise distinct and not collinear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle2 {
    /// First vertex (lowest x, then y).
    pub a: ScaledPoint,
    /// Second vertex.
    pub b: ScaledPoint,
    /// Third vertex.
    pub c: ScaledPoint,
}

impl Triangle2 {
    /// The three vertices in canonical order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [ScaledPoint; 3] {
        [self.a, self.b, self.c]
    }
}
