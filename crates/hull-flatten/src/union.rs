//! Boolean union of the projected triangle soup.
//!
//! The merge itself is delegated to `geo`'s boolean ops; this module only
//! converts between the fixed-point grid and the engine's coordinate space
//! and contains engine failures.

// Grid coordinates stay far below 2^53; the f64 round trip is exact.
#![allow(clippy::cast_precision_loss)]

use std::panic::{catch_unwind, AssertUnwindSafe};

use geo::{unary_union, Coord, LineString, MultiPolygon, Polygon};
use hull_types::{Point2, ScaledPoint, Triangle2};
use tracing::debug;

use crate::error::{FlattenError, FlattenResult};

/// Merge canonical triangles into boundary loops.
///
/// All triangles are treated as closed subject polygons and unioned into
/// one or more loops. The returned loops are in original (unscaled) units,
/// without a repeated closing point; outer boundaries and holes are both
/// included, since the hull stage digs from every boundary point.
///
/// # Errors
///
/// Returns [`FlattenError::ClipFailed`] if the union engine fails
/// internally. The cause is deliberately not propagated.
pub fn union_triangles(triangles: &[Triangle2]) -> FlattenResult<Vec<Vec<Point2<f64>>>> {
    let subjects: Vec<Polygon<f64>> = triangles
        .iter()
        .map(|t| {
            let ring: Vec<Coord<f64>> = t
                .vertices()
                .iter()
                .map(|p| Coord {
                    x: p.x as f64,
                    y: p.y as f64,
                })
                .collect();
            Polygon::new(LineString::from(ring), vec![])
        })
        .collect();

    let merged: MultiPolygon<f64> = catch_unwind(AssertUnwindSafe(|| unary_union(&subjects)))
        .map_err(|_| FlattenError::ClipFailed)?;

    let mut loops = Vec::new();
    for polygon in &merged {
        push_ring(&mut loops, polygon.exterior());
        for interior in polygon.interiors() {
            push_ring(&mut loops, interior);
        }
    }

    debug!(
        triangles = triangles.len(),
        loops = loops.len(),
        "merged triangle soup"
    );

    Ok(loops)
}

/// Append one ring as an unscaled loop, dropping the closing duplicate.
fn push_ring(loops: &mut Vec<Vec<Point2<f64>>>, ring: &LineString<f64>) {
    let mut points: Vec<Point2<f64>> = ring
        .coords()
        .map(|c| Point2::new(c.x / ScaledPoint::SCALE, c.y / ScaledPoint::SCALE))
        .collect();

    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    if !points.is_empty() {
        loops.push(points);
    }
}
