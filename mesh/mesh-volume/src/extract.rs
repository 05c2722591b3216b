//! Boundary-safe isosurface extraction from a binary mask.
//!
//! Both paths clamp the outer faces of the field below the iso level before
//! running marching cubes, so foreground touching the array edge still
//! produces a closed surface.

use mesh_types::IndexedMesh;
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshingError, MeshingResult};
use crate::filter::{binary_dilation, gaussian_filter};
use crate::grid::ScalarGrid;
use crate::marching_cubes::{GradientDirection, MarchingCubesConfig, marching_cubes};

/// Value written to the six outer faces of the field before extraction.
pub const BOUNDARY_VALUE: f64 = -0.5;

/// Iso level for the raw mask: halfway between the clamped boundary and an
/// included voxel.
pub const MASK_ISO_LEVEL: f64 = (BOUNDARY_VALUE + 1.0) / 2.0;

/// How the mask is turned into a scalar field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Preprocess {
    /// Use the mask values as they are.
    Identity,
    /// Dilate by one voxel, recenter, then gaussian blur.
    DilateAndBlur {
        /// Gaussian standard deviation in voxels.
        sigma: f64,
    },
}

/// Field preparation plus triangle orientation for one extraction path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceStrategy {
    /// Mask to field transformation.
    pub preprocess: Preprocess,
    /// Level the surface is extracted at.
    pub iso_level: f64,
    /// Orientation handed to marching cubes.
    pub gradient: GradientDirection,
}

impl SurfaceStrategy {
    /// Dilate, blur with `sigma`, extract with ascending normals.
    #[must_use]
    pub const fn smoothed(sigma: f64) -> Self {
        Self {
            preprocess: Preprocess::DilateAndBlur { sigma },
            iso_level: 0.0,
            gradient: GradientDirection::Ascent,
        }
    }

    /// Extract the raw mask at [`MASK_ISO_LEVEL`] with the default
    /// (descending) normals.
    #[must_use]
    pub const fn unsmoothed() -> Self {
        Self {
            preprocess: Preprocess::Identity,
            iso_level: MASK_ISO_LEVEL,
            gradient: GradientDirection::Descent,
        }
    }

    /// Smoothed for a positive `sigma`, unsmoothed otherwise.
    #[must_use]
    pub fn for_sigma(sigma: f64) -> Self {
        if sigma > 0.0 {
            Self::smoothed(sigma)
        } else {
            Self::unsmoothed()
        }
    }

    /// Scalar field to extract at `iso_level`, before boundary clamping.
    #[must_use]
    pub fn prepare(&self, mask: &ScalarGrid) -> ScalarGrid {
        match self.preprocess {
            Preprocess::Identity => mask.clone(),
            Preprocess::DilateAndBlur { sigma } => {
                gaussian_filter(&binary_dilation(mask).map(|v| v - 0.5), sigma)
            }
        }
    }
}

/// Extract the surface of a binary mask in voxel-index space.
///
/// `sigma > 0` selects the smoothed path, `sigma == 0` the unsmoothed one.
/// A mask with nothing on the inside of the clamped boundary gives an empty
/// mesh.
///
/// # Errors
///
/// Returns [`MeshingError::InvalidSigma`] if `sigma` is negative or not
/// finite.
///
/// # Example
///
/// ```
/// use mesh_volume::{extract_surface, ScalarGrid};
///
/// let mut mask = ScalarGrid::new((3, 3, 3));
/// mask.set(1, 1, 1, 1.0);
///
/// let mesh = extract_surface(&mask, 0.0).unwrap();
/// assert!(mesh.is_closed());
/// assert_eq!(mesh.faces.len(), 8);
/// ```
pub fn extract_surface(mask: &ScalarGrid, sigma: f64) -> MeshingResult<IndexedMesh> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(MeshingError::InvalidSigma(sigma));
    }
    Ok(extract_with_strategy(mask, &SurfaceStrategy::for_sigma(sigma)))
}

/// Extract the surface of a binary mask with an explicit strategy.
#[must_use]
pub fn extract_with_strategy(mask: &ScalarGrid, strategy: &SurfaceStrategy) -> IndexedMesh {
    info!(
        dimensions = ?mask.dimensions(),
        preprocess = ?strategy.preprocess,
        iso_level = strategy.iso_level,
        gradient = ?strategy.gradient,
        "Extracting isosurface"
    );

    let field = strategy.prepare(mask).clamp_boundary(BOUNDARY_VALUE);
    if let Some((min, max)) = field.min_max() {
        debug!(min, max, "Field range after boundary clamp");
    }

    let config = MarchingCubesConfig::default()
        .with_iso_level(strategy.iso_level)
        .with_gradient(strategy.gradient);
    marching_cubes(&field, &config)
}
