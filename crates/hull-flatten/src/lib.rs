//! Planar silhouette extraction for triangle meshes.
//!
//! This crate flattens a 3D triangle mesh into a simplified closed 2D
//! boundary: mesh faces are orthogonally projected onto one of the three
//! principal planes, merged into a silhouette by polygon union, and
//! tightened into a concave outline.
//!
//! # Features
//!
//! - **Axis projection**: Project faces onto the YZ, XZ, or XY plane with
//!   fixed-point quantization and canonical winding
//! - **Silhouette union**: Merge the projected triangle soup into boundary
//!   loops
//! - **Concave outline**: Tighten the loops' convex hull by neighbor-limited
//!   digging
//! - **Per-call state**: Safe to run concurrently, one invocation per axis
//!
//! # Example
//!
//! ```
//! use hull_flatten::{flatten_hull, FlattenParams};
//! use hull_types::{unit_cube, Axis};
//!
//! let cube = unit_cube();
//!
//! let hull = flatten_hull(&cube, &FlattenParams::default()).unwrap();
//! assert_eq!(hull.segment_count(), 4); // unit square silhouette
//!
//! // Project along a different axis
//! let params = FlattenParams::default().with_axis(Axis::X);
//! let side = flatten_hull(&cube, &params).unwrap();
//! assert!(!side.is_empty());
//! ```
//!
//! # Algorithm
//!
//! 1. Project each face along the chosen axis, discard faces that are
//!    degenerate before or after quantization onto the 0.01 grid, and
//!    rewind survivors into a canonical vertex order
//! 2. Union the triangles into boundary loops
//! 3. Deduplicate loop points, build their convex hull, then dig
//!    concavities: replace an edge with two edges through a nearby free
//!    point whenever the outline stays a simple cycle
//!
//! The output is an ordered cycle of [`hull_types::Segment2`] in the
//! mesh's original units, ready for reduction by `hull-simplify`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod concave;
mod error;
mod flatten;
mod params;
mod project;
mod result;
mod union;

pub use concave::{concave_outline, Outline};
pub use error::{FlattenError, FlattenResult};
pub use flatten::flatten_hull;
pub use params::FlattenParams;
pub use project::{canonicalize, project_triangles};
pub use result::FlattenedHull;
pub use union::union_triangles;
