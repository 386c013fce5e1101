//! Pipeline entry point: project, merge, extract.

use hull_types::TriMesh;
use tracing::info;

use crate::concave::concave_outline;
use crate::error::FlattenResult;
use crate::params::FlattenParams;
use crate::project::project_triangles;
use crate::result::FlattenedHull;
use crate::union::union_triangles;

/// Flatten a mesh into a planar outline.
///
/// Runs the full extraction pipeline: project the mesh faces along the
/// configured axis, merge the projected triangles into boundary loops, and
/// tighten the loops' points into a concave outline.
///
/// The call is self-contained: concurrent invocations (for example one per
/// axis) share no state.
///
/// # Arguments
///
/// * `mesh` - The input mesh
/// * `params` - Flattening parameters
///
/// # Errors
///
/// Returns [`crate::FlattenError`] when projection leaves no viable
/// triangles, the union engine fails, or the merged boundary degenerates.
///
/// # Example
///
/// ```
/// use hull_flatten::{flatten_hull, FlattenParams};
/// use hull_types::unit_cube;
///
/// let hull = flatten_hull(&unit_cube(), &FlattenParams::default()).unwrap();
/// println!("{hull}");
/// assert!(!hull.is_empty());
/// ```
pub fn flatten_hull(mesh: &TriMesh, params: &FlattenParams) -> FlattenResult<FlattenedHull> {
    let input_faces = mesh.face_count();

    let triangles = project_triangles(mesh, params.axis)?;
    info!(
        axis = ?params.axis,
        input_faces,
        triangles = triangles.len(),
        "projected mesh onto plane"
    );

    let loops = union_triangles(&triangles)?;
    let outline = concave_outline(&loops, params)?;
    info!(
        segments = outline.segments.len(),
        digs = outline.digs_performed,
        "extracted outline"
    );

    Ok(FlattenedHull {
        segments: outline.segments,
        input_faces,
        projected_triangles: triangles.len(),
        loop_count: loops.len(),
        node_count: outline.node_count,
        digs_performed: outline.digs_performed,
    })
}
