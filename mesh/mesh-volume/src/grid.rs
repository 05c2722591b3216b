//! 3D scalar grid in voxel-index space.

/// A 3D grid of `f64` values, one per voxel.
///
/// Used for masks, filtered fields and as marching cubes input. Grid point
/// `(i, j, k)` sits at voxel-index coordinates `(i, j, k)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    /// Grid values stored with `i` varying fastest.
    values: Vec<f64>,
    /// Grid dimensions (ni, nj, nk).
    dimensions: (usize, usize, usize),
}

impl ScalarGrid {
    /// Create a zero-filled grid.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_volume::ScalarGrid;
    ///
    /// let grid = ScalarGrid::new((10, 10, 10));
    /// assert_eq!(grid.dimensions(), (10, 10, 10));
    /// assert_eq!(grid.len(), 1000);
    /// ```
    #[must_use]
    pub fn new(dimensions: (usize, usize, usize)) -> Self {
        Self::filled(dimensions, 0.0)
    }

    /// Create a grid with every value set to `value`.
    #[must_use]
    pub fn filled(dimensions: (usize, usize, usize), value: f64) -> Self {
        let (ni, nj, nk) = dimensions;
        Self {
            values: vec![value; ni * nj * nk],
            dimensions,
        }
    }

    /// Build a grid by evaluating `f(i, j, k)` at every grid point.
    #[must_use]
    pub fn from_fn(
        dimensions: (usize, usize, usize),
        mut f: impl FnMut(usize, usize, usize) -> f64,
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

    /// Get grid dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        self.dimensions
    }

    /// Get the value at grid coordinates.
    ///
    /// Returns 0.0 if coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        if self.contains(i, j, k) {
            self.values[self.index(i, j, k)]
        } else {
            0.0
        }
    }

    /// Set the value at grid coordinates.
    ///
    /// Does nothing if coordinates are out of bounds.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f64) {
        if self.contains(i, j, k) {
            let idx = self.index(i, j, k);
            self.values[idx] = value;
        }
    }

    /// Apply `f` to every value, returning a new grid.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            values: self.values.iter().map(|&v| f(v)).collect(),
            dimensions: self.dimensions,
        }
    }

    /// Smallest and largest value, `None` for an empty grid.
    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// Whether `(i, j, k)` lies on one of the six outer faces.
    #[must_use]
    pub const fn on_boundary(&self, i: usize, j: usize, k: usize) -> bool {
        let (ni, nj, nk) = self.dimensions;
        i == 0 || j == 0 || k == 0 || i + 1 == ni || j + 1 == nj || k + 1 == nk
    }

    /// Copy of the grid with every outer-face value set to `outside`.
    ///
    /// A field clamped below the iso level on its faces yields a closed
    /// isosurface even when the foreground touches the array edge.
    ///
    /// ```
    /// use mesh_volume::ScalarGrid;
    ///
    /// let grid = ScalarGrid::filled((3, 3, 3), 1.0).clamp_boundary(-0.5);
    /// assert_eq!(grid.get(0, 1, 1), -0.5);
    /// assert_eq!(grid.get(1, 1, 1), 1.0);
    /// ```
    #[must_use]
    pub fn clamp_boundary(&self, outside: f64) -> Self {
        let (ni, nj, _) = self.dimensions;
        let mut clamped = self.clone();
        for (idx, value) in clamped.values.iter_mut().enumerate() {
            let (i, j, k) = (idx % ni, (idx / ni) % nj, idx / (ni * nj));
            if self.on_boundary(i, j, k) {
                *value = outside;
            }
        }
        clamped
    }

    /// Flat value buffer, `i` fastest.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Mutable flat value buffer, `i` fastest.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Get the total number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the grid is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert 3D coordinates to linear index.
    #[must_use]
    pub const fn index(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.dimensions.0 + k * self.dimensions.0 * self.dimensions.1
    }

    const fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        i < self.dimensions.0 && j < self.dimensions.1 && k < self.dimensions.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn get_set() {
        let mut grid = ScalarGrid::new((5, 5, 5));

        grid.set(2, 3, 4, 42.0);
        assert_relative_eq!(grid.get(2, 3, 4), 42.0);
        assert_eq!(grid.index(2, 3, 4), 2 + 3 * 5 + 4 * 25);
    }

    #[test]
    fn get_out_of_bounds() {
        let grid = ScalarGrid::filled((5, 5, 5), 1.0);
        assert_relative_eq!(grid.get(100, 100, 100), 0.0);
    }

    #[test]
    fn from_fn_layout() {
        let grid = ScalarGrid::from_fn((2, 3, 4), |i, j, k| (i + 10 * j + 100 * k) as f64);
        assert_relative_eq!(grid.get(1, 2, 3), 321.0);
        assert_relative_eq!(grid.as_slice()[1], 1.0);
        assert_relative_eq!(grid.as_slice()[2], 10.0);
    }

    #[test]
    fn map_and_min_max() {
        let grid = ScalarGrid::from_fn((3, 1, 1), |i, _, _| i as f64).map(|v| v - 0.5);
        assert_eq!(grid.min_max(), Some((-0.5, 1.5)));
        assert_eq!(ScalarGrid::new((0, 0, 0)).min_max(), None);
    }

    #[test]
    fn clamp_boundary_touches_only_faces() {
        let grid = ScalarGrid::filled((4, 5, 6), 1.0);
        let clamped = grid.clamp_boundary(-0.5);

        for k in 0..6 {
            for j in 0..5 {
                for i in 0..4 {
                    let expected = if grid.on_boundary(i, j, k) { -0.5 } else { 1.0 };
                    assert_relative_eq!(clamped.get(i, j, k), expected);
                }
            }
        }
        // Interior of a 4x5x6 grid is 2x3x4
        let interior = clamped.as_slice().iter().filter(|&&v| v > 0.0).count();
        assert_eq!(interior, 24);
        // Input untouched
        assert!(grid.as_slice().iter().all(|&v| v > 0.0));
    }

    #[test]
    fn clamp_boundary_thin_grid_is_all_boundary() {
        let clamped = ScalarGrid::filled((2, 7, 7), 1.0).clamp_boundary(-0.5);
        assert!(clamped.as_slice().iter().all(|&v| v < 0.0));
    }

    #[test]
    fn is_empty() {
        assert!(ScalarGrid::new((0, 0, 0)).is_empty());
        assert!(!ScalarGrid::new((1, 1, 1)).is_empty());
    }
}
