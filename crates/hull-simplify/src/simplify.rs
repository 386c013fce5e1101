//! Douglas-Peucker reduction over chained segment endpoints.

use hull_types::{Point2, Segment2};
use tracing::debug;

use crate::error::{SimplifyError, SimplifyResult};
use crate::result::SimplifiedOutline;

/// Reduce an outline's point count, bounding deviation by `epsilon`.
///
/// The segments are interpreted as a polyline by chaining their endpoints
/// in order; the polyline is then reduced with Douglas-Peucker: any point
/// whose perpendicular distance to the local chord exceeds `epsilon` is
/// kept, everything else collapses onto the chord. The polyline's first
/// and last points are always retained, and the result is reproducible for
/// identical input.
///
/// Callers that want no simplification at all should skip this call rather
/// than pass `epsilon = 0.0`: residual floating noise below the fixed-point
/// grid still counts as deviation and forces splits.
///
/// # Errors
///
/// Returns [`SimplifyError::InsufficientPoints`] when `segments` is empty.
///
/// # Example
///
/// ```
/// use hull_simplify::simplify_outline;
/// use hull_types::{Point2, Segment2};
///
/// let zigzag = vec![
///     Segment2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.001)),
///     Segment2::new(Point2::new(1.0, 0.001), Point2::new(2.0, 0.0)),
/// ];
///
/// let reduced = simplify_outline(&zigzag, 0.1).unwrap();
/// assert_eq!(reduced.segment_count(), 1);
/// ```
pub fn simplify_outline(segments: &[Segment2], epsilon: f64) -> SimplifyResult<SimplifiedOutline> {
    if segments.is_empty() {
        return Err(SimplifyError::InsufficientPoints {
            required: 2,
            actual: 0,
        });
    }

    let mut points = Vec::with_capacity(segments.len() * 2);
    for segment in segments {
        points.push(segment.start);
        points.push(segment.end);
    }

    let kept = reduce(&points, epsilon);
    debug!(
        original = points.len(),
        kept = kept.len(),
        epsilon,
        "reduced outline"
    );

    let reduced = kept
        .windows(2)
        .map(|pair| Segment2::new(pair[0], pair[1]))
        .collect();

    Ok(SimplifiedOutline {
        segments: reduced,
        original_points: points.len(),
        final_points: kept.len(),
    })
}

/// Recursive Douglas-Peucker over a point range. Returns the retained
/// points, endpoints included.
fn reduce(points: &[Point2<f64>], epsilon: f64) -> Vec<Point2<f64>> {
    let end = points.len() - 1;

    let mut dmax = 0.0;
    let mut index = 0;
    for (i, point) in points.iter().enumerate().take(end).skip(1) {
        let d = segment_distance(point, &points[0], &points[end]);
        if d > dmax {
            dmax = d;
            index = i;
        }
    }

    if dmax > epsilon {
        // split at the farthest point; both halves keep it, so drop the
        // duplicate when merging
        let mut left = reduce(&points[..=index], epsilon);
        let right = reduce(&points[index..], epsilon);
        left.pop();
        left.extend(right);
        left
    } else {
        vec![points[0], points[end]]
    }
}

/// Distance from a point to a segment, with the projection clamped onto the
/// segment. A zero-length segment degenerates to point distance.
fn segment_distance(point: &Point2<f64>, start: &Point2<f64>, end: &Point2<f64>) -> f64 {
    let chord = end - start;
    let len_sq = chord.norm_squared();
    if len_sq == 0.0 {
        return (point - start).norm();
    }

    let u = ((point - start).dot(&chord) / len_sq).clamp(0.0, 1.0);
    let projection = start + chord * u;
    (point - projection).norm()
}
