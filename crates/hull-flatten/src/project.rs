//! Axis projection of mesh faces onto the fixed-point plane.
//!
//! Each face is projected by dropping one coordinate, quantized onto the
//! integer grid, and rewound into a canonical vertex order so the union
//! stage sees a consistent winding regardless of the input mesh's own.

// Slope ratios of grid coordinates stay well inside f64 precision.
#![allow(clippy::cast_precision_loss)]

use hull_types::{Axis, ScaledPoint, TriMesh, Triangle2};
use tracing::debug;

use crate::error::{FlattenError, FlattenResult};

/// Project every face of a mesh onto the plane perpendicular to `axis`.
///
/// Faces that are degenerate before quantization (two projected vertices
/// exactly equal), collapse under quantization, or round to collinear are
/// discarded. Survivors are returned in canonical vertex order.
///
/// # Errors
///
/// Returns [`FlattenError::NoViableGeometry`] if no face survives.
///
/// # Example
///
/// ```
/// use hull_flatten::project_triangles;
/// use hull_types::{Axis, Point3, TriMesh};
///
/// let mesh = TriMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// let triangles = project_triangles(&mesh, Axis::Z).unwrap();
/// assert_eq!(triangles.len(), 1);
/// ```
pub fn project_triangles(mesh: &TriMesh, axis: Axis) -> FlattenResult<Vec<Triangle2>> {
    let mut triangles = Vec::with_capacity(mesh.face_count());
    let mut rejected = 0usize;

    for [a, b, c] in mesh.triangles() {
        let p1 = axis.project(&a);
        let p2 = axis.project(&b);
        let p3 = axis.project(&c);

        // degenerate before quantization
        if p1 == p2 || p2 == p3 || p3 == p1 {
            rejected += 1;
            continue;
        }

        let q1 = ScaledPoint::from_unscaled(p1.0, p1.1);
        let q2 = ScaledPoint::from_unscaled(p2.0, p2.1);
        let q3 = ScaledPoint::from_unscaled(p3.0, p3.1);

        match canonicalize([q1, q2, q3]) {
            Some(triangle) => triangles.push(triangle),
            None => rejected += 1,
        }
    }

    debug!(
        axis = ?axis,
        kept = triangles.len(),
        rejected,
        "projected mesh faces"
    );

    if triangles.is_empty() {
        return Err(FlattenError::NoViableGeometry);
    }

    Ok(triangles)
}

/// Arrange three quantized vertices into canonical order.
///
/// The vertices are sorted ascending by x then y, and the second and third
/// are swapped when the slope from the lowest vertex to the farthest is not
/// steeper than the slope to the middle one. Every surviving triangle thus
/// carries the same winding. Returns `None` when two vertices coincide or
/// all three are collinear on the grid.
///
/// Canonicalization is idempotent: feeding back the vertices of a returned
/// triangle reproduces it.
#[must_use]
pub fn canonicalize(mut points: [ScaledPoint; 3]) -> Option<Triangle2> {
    if points[0] == points[1] || points[1] == points[2] || points[2] == points[0] {
        return None;
    }

    points.sort_unstable();
    let [o1, mut o2, mut o3] = points;

    let s1 = slope(o1, o2);
    let s2 = slope(o1, o3);

    // rounded to collinear
    if s1 == s2 {
        return None;
    }

    if o3.x != o1.x && s2 <= s1 {
        std::mem::swap(&mut o2, &mut o3);
    }

    Some(Triangle2 {
        a: o1,
        b: o2,
        c: o3,
    })
}

/// Slope between two grid points, with a vertical run mapping to +∞.
fn slope(from: ScaledPoint, to: ScaledPoint) -> f64 {
    if to.x == from.x {
        f64::INFINITY
    } else {
        (to.y - from.y) as f64 / (to.x - from.x) as f64
    }
}
