//! Mesh simplification using quadric error metrics.
//!
//! Iteratively collapses edges while minimizing geometric error using the
//! Quadric Error Metrics (QEM) algorithm. Isosurface meshes carry far more
//! vertices than their shape needs; this crate brings them down to a target
//! vertex count while keeping the surface closed.
//!
//! # Features
//!
//! - **Edge collapse** ordered by lowest quadric error
//! - **Vertex targets**: stop as soon as the live vertex count is reached
//! - **Boundary preservation**: optionally keep open borders in place
//! - **Fold-over rejection**: collapses that would flip a face are skipped
//!
//! # Example
//!
//! ```
//! use mesh_types::IndexedMesh;
//! use mesh_decimate::{decimate_mesh, DecimateParams};
//!
//! // Octahedron: 6 vertices, 8 faces
//! let octahedron = IndexedMesh::from_raw(
//!     &[
//!         1.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
//!         0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0,
//!     ],
//!     &[
//!         0, 2, 4, 2, 1, 4, 1, 3, 4, 3, 0, 4,
//!         2, 0, 5, 1, 2, 5, 3, 1, 5, 0, 3, 5,
//!     ],
//! );
//!
//! let result = decimate_mesh(&octahedron, &DecimateParams::with_target_vertices(4));
//! assert_eq!(result.final_vertices, 4);
//! assert_eq!(result.collapses_performed, 2);
//! assert!(result.mesh.is_closed());
//! println!("{result}");
//! ```
//!
//! # Algorithm
//!
//! 1. For each vertex, accumulate a quadric: the sum of squared distances to
//!    the planes of its faces
//! 2. For each edge, compute the position minimizing the combined quadric
//!    and its error
//! 3. Collapse the cheapest edge, merge quadrics, requeue the edges around
//!    the surviving vertex
//! 4. Repeat until the target is met or no valid collapse remains

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod decimate;
mod params;
mod quadric;
mod result;

pub use decimate::decimate_mesh;
pub use params::DecimateParams;
pub use quadric::Quadric;
pub use result::DecimationResult;
