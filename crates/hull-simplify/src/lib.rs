//! Outline simplification via Douglas-Peucker reduction.
//!
//! This crate reduces the point count of a hull outline while bounding the
//! geometric deviation by a tolerance. It operates on the segment sequences
//! produced by `hull-flatten`, but accepts any chained polyline.
//!
//! # Features
//!
//! - **Douglas-Peucker**: Recursive reduction keeping only points that
//!   deviate from the local chord by more than epsilon
//! - **Endpoint preservation**: The polyline's first and last points are
//!   never removed
//! - **Deterministic**: Identical input and epsilon reproduce the result
//!   exactly
//!
//! # Example
//!
//! ```
//! use hull_simplify::simplify_outline;
//! use hull_types::{Point2, Segment2};
//!
//! let noisy = vec![
//!     Segment2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.02)),
//!     Segment2::new(Point2::new(1.0, 0.02), Point2::new(2.0, 0.0)),
//! ];
//!
//! let reduced = simplify_outline(&noisy, 0.1).unwrap();
//! println!("{reduced}");
//! assert_eq!(reduced.segment_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod result;
mod simplify;

pub use error::{SimplifyError, SimplifyResult};
pub use result::SimplifiedOutline;
pub use simplify::simplify_outline;
