//! Labeled voxel volume.

use crate::error::{MeshingError, MeshingResult};

/// A 3D array of voxel labels indexed `[i, j, k]`.
///
/// Storage is flat with `i` varying fastest. The background label is
/// `T::default()` (zero for every numeric type).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelVolume<T> {
    values: Vec<T>,
    dimensions: (usize, usize, usize),
}

impl<T: Copy + PartialEq + Default> LabelVolume<T> {
    /// Create a volume filled with the background label.
    #[must_use]
    pub fn new(dimensions: (usize, usize, usize)) -> Self {
        let (ni, nj, nk) = dimensions;
        Self {
            values: vec![T::default(); ni * nj * nk],
            dimensions,
        }
    }

    /// Wrap an existing voxel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MeshingError::DimensionMismatch`] if `values.len()` is not
    /// `ni * nj * nk`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_volume::LabelVolume;
    ///
    /// let volume = LabelVolume::from_vec((2, 1, 1), vec![0u8, 3]).unwrap();
    /// assert_eq!(volume.get(1, 0, 0), Some(3));
    /// assert!(LabelVolume::from_vec((2, 2, 2), vec![0u8; 7]).is_err());
    /// ```
    pub fn from_vec(dimensions: (usize, usize, usize), values: Vec<T>) -> MeshingResult<Self> {
        let (ni, nj, nk) = dimensions;
        let expected = ni * nj * nk;
        if values.len() != expected {
            return Err(MeshingError::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { values, dimensions })
    }

    /// Build a volume by evaluating `f(i, j, k)` at every voxel.
    #[must_use]
    pub fn from_fn(
        dimensions: (usize, usize, usize),
        mut f: impl FnMut(usize, usize, usize) -> T,
    ) -> Self {
        let (ni, nj, nk) = dimensions;
        let mut values = Vec::with_capacity(ni * nj * nk);
        for k in 0..nk {
            for j in 0..nj {
                for i in 0..ni {
                    values.push(f(i, j, k));
                }
            }
        }
        Self { values, dimensions }
    }

    /// Get the volume dimensions `(ni, nj, nk)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        self.dimensions
    }

    /// Label at `[i, j, k]`, `None` if out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<T> {
        self.index(i, j, k).map(|idx| self.values[idx])
    }

    /// Set the label at `[i, j, k]`.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        if let Some(idx) = self.index(i, j, k) {
            self.values[idx] = value;
        }
    }

    /// Flat voxel buffer, `i` fastest.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Total number of voxels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the volume has no voxels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    const fn index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        let (ni, nj, nk) = self.dimensions;
        if i < ni && j < nj && k < nk {
            Some(i + j * ni + k * ni * nj)
        } else {
            None
        }
    }
}
