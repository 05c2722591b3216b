//! Labeled voxel volume to watertight surface mesh.
//!
//! Turns a 3D array of voxel labels into a closed triangle mesh in world
//! coordinates and writes it as OBJ text.
//!
//! # Pipeline
//!
//! 1. **Mask** ([`build_mask`]): select voxels by label
//! 2. **Extract** ([`extract_surface`]): clamp the field's outer faces and
//!    run marching cubes, optionally after dilation and gaussian smoothing
//! 3. **Reduce** ([`reduce`]): optional quadric decimation to a fraction of
//!    the vertices
//! 4. **Export** ([`export_obj`]): voxel-to-world transform and OBJ output
//!
//! [`process`] runs all four stages.
//!
//! # Example
//!
//! ```
//! use mesh_volume::{process_to_writer, LabelVolume, MeshingParams, WorldTransform};
//!
//! // A 2x2x2 block of label 7 in a 6x6x6 volume
//! let volume = LabelVolume::from_fn((6, 6, 6), |i, j, k| {
//!     if (2..4).contains(&i) && (2..4).contains(&j) && (2..4).contains(&k) { 7u8 } else { 0 }
//! });
//!
//! let mut obj = Vec::new();
//! let report = process_to_writer(
//!     &volume,
//!     &WorldTransform::identity(),
//!     &mut obj,
//!     &MeshingParams::unsmoothed(),
//! )
//! .unwrap();
//!
//! assert_eq!(report.voxels_included, 8);
//! assert!(report.faces > 0);
//! ```
//!
//! # Orientation
//!
//! The smoothed path extracts with ascending normals and the unsmoothed path
//! with descending ones, and the exporter writes faces reversed unless
//! `reverse_winding` is set. With default settings the smoothed output faces
//! outward and the unsmoothed output faces inward.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod export;
mod extract;
mod filter;
mod grid;
mod marching_cubes;
mod mask;
mod params;
mod pipeline;
mod reduce;
mod tables;
mod transform;
mod volume;

pub use error::{MeshingError, MeshingResult};
pub use export::{
    COORDINATE_DECIMALS, export_obj, output_winding, round_coordinate, to_world_mesh, write_obj,
};
pub use extract::{
    BOUNDARY_VALUE, MASK_ISO_LEVEL, Preprocess, SurfaceStrategy, extract_surface,
    extract_with_strategy,
};
pub use filter::{GAUSSIAN_TRUNCATE, binary_dilation, gaussian_filter};
pub use grid::ScalarGrid;
pub use marching_cubes::{GradientDirection, MarchingCubesConfig, marching_cubes};
pub use mask::{build_mask, count_included};
pub use params::{DEFAULT_SIGMA, MeshingParams};
pub use pipeline::{MeshingReport, mesh_volume, process, process_to_writer};
pub use reduce::{reduce, reduce_by_ratio, target_vertex_count};
pub use transform::WorldTransform;
pub use volume::LabelVolume;
