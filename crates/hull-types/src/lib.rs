//! Core data types for flattened-hull extraction.
//!
//! This crate provides the foundational types shared by the hull pipeline:
//!
//! - [`TriMesh`] - An indexed triangle mesh, the pipeline input
//! - [`Axis`] - Principal-axis selector for planar projection
//! - [`ScaledPoint`] - A fixed-point 2D coordinate for exact integer geometry
//! - [`Triangle2`] - A projected triangle in canonical vertex order
//! - [`Segment2`] - A 2D line segment in original (unscaled) units
//!
//! # Layer 0 Crate
//!
//! This crate has no dependencies beyond the math stack. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`; the
//! fixed-point types quantize to 2 decimal digits of the input unit.
//!
//! # Example
//!
//! ```
//! use hull_types::{Axis, Point3, TriMesh};
//!
//! let mut mesh = TriMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(Axis::Z.project(&mesh.vertices[0]), (0.0, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod axis;
mod mesh;
mod scaled;
mod segment;

pub use axis::Axis;
pub use mesh::{unit_cube, TriMesh};
pub use scaled::{ScaledPoint, Triangle2};
pub use segment::Segment2;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
