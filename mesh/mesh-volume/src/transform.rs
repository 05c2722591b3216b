//! Voxel-index to world coordinate transform.

use mesh_types::{Matrix3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Affine map from voxel-index space to world space.
///
/// Row `r` of `directions` is the world-space step taken per unit of voxel
/// axis `r`, so `world = origin + i * row0 + j * row1 + k * row2`.
///
/// # Example
///
/// ```
/// use mesh_volume::WorldTransform;
/// use mesh_types::{Matrix3, Point3};
///
/// let transform = WorldTransform::new(Point3::new(1.0, 2.0, 3.0), Matrix3::identity());
/// let world = transform.to_world(&Point3::new(5.0, 6.0, 7.0));
/// assert_eq!(world, Point3::new(6.0, 8.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldTransform {
    /// World position of voxel `(0, 0, 0)`.
    pub origin: Point3<f64>,
    /// Axis directions, one per row.
    pub directions: Matrix3<f64>,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl WorldTransform {
    /// Create a transform from an origin and row-wise axis directions.
    #[must_use]
    pub const fn new(origin: Point3<f64>, directions: Matrix3<f64>) -> Self {
        Self { origin, directions }
    }

    /// Voxel coordinates are world coordinates.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Point3::origin(), Matrix3::identity())
    }

    /// Axis-aligned voxels of the given size.
    #[must_use]
    pub fn from_spacing(origin: Point3<f64>, spacing: Vector3<f64>) -> Self {
        Self::new(origin, Matrix3::from_diagonal(&spacing))
    }

    /// Map a voxel-index position to world space.
    #[must_use]
    pub fn to_world(&self, voxel: &Point3<f64>) -> Point3<f64> {
        self.origin + self.directions.transpose() * voxel.coords
    }
}
