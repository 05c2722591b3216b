//! Parameters for the volume meshing pipeline.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshingError, MeshingResult};

/// Default gaussian sigma in voxels.
pub const DEFAULT_SIGMA: f64 = 2.0;

/// Parameters for [`process`](crate::process) and
/// [`mesh_volume`](crate::mesh_volume).
///
/// # Example
///
/// ```
/// use mesh_volume::MeshingParams;
///
/// let params = MeshingParams::<u16>::default()
///     .with_mask_values(vec![3, 4])
///     .with_decimation(0.5)
///     .with_reverse_winding(true);
///
/// assert_eq!(params.sigma_smooth, 2.0);
/// assert_eq!(params.decimation, Some(0.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshingParams<T> {
    /// Labels to include. `None` (or empty) selects every non-zero voxel.
    pub mask_values: Option<Vec<T>>,

    /// Fraction of vertices to keep, in `(0, 1]`. `None` skips decimation.
    pub decimation: Option<f64>,

    /// Write faces in stored order instead of reversed.
    /// Default: false
    pub reverse_winding: bool,

    /// Gaussian sigma in voxels; 0 selects the unsmoothed path.
    /// Default: 2.0
    pub sigma_smooth: f64,
}

impl<T> Default for MeshingParams<T> {
    fn default() -> Self {
        Self {
            mask_values: None,
            decimation: None,
            reverse_winding: false,
            sigma_smooth: DEFAULT_SIGMA,
        }
    }
}

impl<T> MeshingParams<T> {
    /// Unsmoothed preset: blocky voxel surface, no decimation.
    #[must_use]
    pub fn unsmoothed() -> Self {
        Self {
            sigma_smooth: 0.0,
            ..Default::default()
        }
    }

    /// Restrict the mask to these labels.
    #[must_use]
    pub fn with_mask_values(mut self, values: Vec<T>) -> Self {
        self.mask_values = Some(values);
        self
    }

    /// Keep `ratio` of the extracted vertices.
    #[must_use]
    pub fn with_decimation(mut self, ratio: f64) -> Self {
        self.decimation = Some(ratio);
        self
    }

    /// Set the winding flag.
    #[must_use]
    pub fn with_reverse_winding(mut self, reverse: bool) -> Self {
        self.reverse_winding = reverse;
        self
    }

    /// Set the gaussian sigma.
    #[must_use]
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma_smooth = sigma;
        self
    }

    /// Check the numeric parameters before running.
    ///
    /// # Errors
    ///
    /// - [`MeshingError::InvalidSigma`] if `sigma_smooth` is negative or not
    ///   finite
    /// - [`MeshingError::InvalidDecimation`] if `decimation` is outside
    ///   `(0, 1]`
    pub fn validate(&self) -> MeshingResult<()> {
        if !self.sigma_smooth.is_finite() || self.sigma_smooth < 0.0 {
            return Err(MeshingError::InvalidSigma(self.sigma_smooth));
        }
        if let Some(ratio) = self.decimation {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(MeshingError::InvalidDecimation(ratio));
            }
        }
        Ok(())
    }
}
