//! 2D line segments in original units.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line segment between two 2D points in original (unscaled) units.
///
/// This is the output unit of both the hull extractor and the simplifier:
/// an outline is an ordered sequence of segments, each segment's end meeting
/// the next segment's start.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment2 {
    /// Segment start point.
    pub start: Point2<f64>,
    /// Segment end point.
    pub end: Point2<f64>,
}

impl Segment2 {
    /// Create a segment from two endpoints.
    #[inline]
    #[must_use]
    pub const fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// The segment with its endpoints swapped.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Midpoint of the segment.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> Point2<f64> {
        nalgebra::center(&self.start, &self.end)
    }
}
