//! Core mesh types for volume meshing.
//!
//! This crate provides the foundational types shared by the extraction,
//! decimation and export stages:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`EdgeUsage`] - Edge-to-face counts for watertightness checks
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`. Meshes fresh
//! out of isosurface extraction live in voxel-index space; exported meshes
//! live in whatever world units the volume's transform uses.
//!
//! # Winding
//!
//! A face `[a, b, c]` has its normal along `(b - a) × (c - a)`. For a closed
//! mesh whose normals point outward, [`IndexedMesh::signed_volume`] is
//! positive.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Vertex, IndexedMesh, Point3, MeshTopology};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod edges;
mod mesh;
mod traits;
mod vertex;

pub use bounds::Aabb;
pub use edges::{normalize_edge, EdgeUsage};
pub use mesh::{unit_cube, IndexedMesh};
pub use traits::{MeshBounds, MeshTopology};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
