//! Marching cubes isosurface extraction over a [`ScalarGrid`].
//!
//! Vertices are welded per crossed grid edge, so neighboring cells share
//! them and a surface that stays inside the grid comes out closed.

// Grid extents stay far below u32::MAX vertices
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use hashbrown::HashMap;
use mesh_types::{IndexedMesh, Point3, Vertex};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::ScalarGrid;
use crate::tables::{CORNER_OFFSETS, EDGE_CORNERS, TRI_TABLE};

/// Which side of the isosurface triangle normals face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GradientDirection {
    /// Normals point toward lower field values.
    ///
    /// For a field that is high inside the object, normals face outward.
    #[default]
    Descent,
    /// Normals point toward higher field values.
    Ascent,
}

/// Configuration for marching cubes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarchingCubesConfig {
    /// Iso level to extract.
    pub iso_level: f64,
    /// Triangle orientation.
    pub gradient: GradientDirection,
}

impl Default for MarchingCubesConfig {
    fn default() -> Self {
        Self {
            iso_level: 0.0,
            gradient: GradientDirection::Descent,
        }
    }
}

impl MarchingCubesConfig {
    /// Set the iso level.
    #[must_use]
    pub const fn with_iso_level(mut self, iso_level: f64) -> Self {
        self.iso_level = iso_level;
        self
    }

    /// Set the gradient direction.
    #[must_use]
    pub const fn with_gradient(mut self, gradient: GradientDirection) -> Self {
        self.gradient = gradient;
        self
    }
}

/// Extract the isosurface of `grid` at `config.iso_level`.
///
/// Vertex positions are in voxel-index coordinates. A grid point whose
/// value is below the iso level counts as outside. Grids thinner than two
/// points along any axis, and fields entirely on one side of the level,
/// give an empty mesh.
///
/// # Example
///
/// ```
/// use mesh_volume::{marching_cubes, MarchingCubesConfig, ScalarGrid};
///
/// let mut grid = ScalarGrid::filled((3, 3, 3), -0.5);
/// grid.set(1, 1, 1, 0.5);
///
/// let mesh = marching_cubes(&grid, &MarchingCubesConfig::default());
/// assert_eq!(mesh.vertices.len(), 6);
/// assert_eq!(mesh.faces.len(), 8);
/// assert!(mesh.is_closed());
/// ```
#[must_use]
pub fn marching_cubes(grid: &ScalarGrid, config: &MarchingCubesConfig) -> IndexedMesh {
    let (ni, nj, nk) = grid.dimensions();
    let mut mesh = IndexedMesh::new();
    if ni < 2 || nj < 2 || nk < 2 {
        return mesh;
    }

    let iso = config.iso_level;
    let values = grid.as_slice();
    // Keyed by (lower endpoint grid index, axis)
    let mut edge_vertices: HashMap<(usize, usize), u32> = HashMap::new();

    for k in 0..nk - 1 {
        for j in 0..nj - 1 {
            for i in 0..ni - 1 {
                let mut corners = [(0usize, [0usize; 3]); 8];
                let mut case = 0usize;
                for (c, offset) in CORNER_OFFSETS.iter().enumerate() {
                    let p = [i + offset[0], j + offset[1], k + offset[2]];
                    let idx = grid.index(p[0], p[1], p[2]);
                    corners[c] = (idx, p);
                    if values[idx] < iso {
                        case |= 1 << c;
                    }
                }

                for tri in TRI_TABLE[case] {
                    let mut face = tri.map(|edge| {
                        let [a, b] = EDGE_CORNERS[edge];
                        let (lo, hi) = if corners[a].0 < corners[b].0 {
                            (corners[a], corners[b])
                        } else {
                            (corners[b], corners[a])
                        };
                        let axis = usize::from(lo.1[1] != hi.1[1])
                            + 2 * usize::from(lo.1[2] != hi.1[2]);

                        *edge_vertices.entry((lo.0, axis)).or_insert_with(|| {
                            mesh.vertices
                                .push(interpolate(lo.1, hi.1, values[lo.0], values[hi.0], iso));
                            (mesh.vertices.len() - 1) as u32
                        })
                    });

                    if config.gradient == GradientDirection::Ascent {
                        face.reverse();
                    }
                    mesh.faces.push(face);
                }
            }
        }
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Marching cubes complete"
    );

    mesh
}

/// Point on the edge `a -> b` where the linear interpolant crosses `iso`.
fn interpolate(a: [usize; 3], b: [usize; 3], va: f64, vb: f64, iso: f64) -> Vertex {
    let t = (iso - va) / (vb - va);
    let pa = Point3::new(a[0] as f64, a[1] as f64, a[2] as f64);
    let pb = Point3::new(b[0] as f64, b[1] as f64, b[2] as f64);
    Vertex::new(pa + (pb - pa) * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::MeshTopology;

    fn single_voxel() -> ScalarGrid {
        let mut grid = ScalarGrid::filled((3, 3, 3), -0.5);
        grid.set(1, 1, 1, 0.5);
        grid
    }

    #[test]
    fn uniform_field_is_empty() {
        let config = MarchingCubesConfig::default();
        assert!(marching_cubes(&ScalarGrid::filled((4, 4, 4), -0.5), &config).is_empty());
        assert!(marching_cubes(&ScalarGrid::filled((4, 4, 4), 0.5), &config).is_empty());
    }

    #[test]
    fn thin_grid_is_empty() {
        let grid = ScalarGrid::filled((1, 5, 5), 1.0);
        assert!(marching_cubes(&grid, &MarchingCubesConfig::default()).is_empty());
    }

    #[test]
    fn single_voxel_is_octahedron() {
        let mesh = marching_cubes(&single_voxel(), &MarchingCubesConfig::default());

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.face_count(), 8);
        assert!(mesh.is_closed());
        assert!(mesh.has_valid_indices());
        // Each vertex sits halfway between the center and a face neighbor
        for v in &mesh.vertices {
            let d = v.position - Point3::new(1.0, 1.0, 1.0);
            assert_relative_eq!(d.norm(), 0.5, epsilon = 1e-12);
        }
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn ascent_reverses_orientation() {
        let grid = single_voxel();
        let descent = marching_cubes(&grid, &MarchingCubesConfig::default());
        let ascent = marching_cubes(
            &grid,
            &MarchingCubesConfig::default().with_gradient(GradientDirection::Ascent),
        );

        assert_eq!(descent.vertices, ascent.vertices);
        for (d, a) in descent.faces.iter().zip(&ascent.faces) {
            assert_eq!([d[2], d[1], d[0]], *a);
        }
        assert!(ascent.signed_volume() < 0.0);
    }

    #[test]
    fn iso_level_moves_vertices() {
        let mut grid = ScalarGrid::filled((3, 3, 3), 0.0);
        grid.set(1, 1, 1, 1.0);
        let mesh = marching_cubes(&grid, &MarchingCubesConfig::default().with_iso_level(0.25));
        for v in &mesh.vertices {
            let d = v.position - Point3::new(1.0, 1.0, 1.0);
            assert_relative_eq!(d.norm(), 0.75, epsilon = 1e-12);
        }
    }

    #[test]
    fn solid_block_is_closed_and_outward() {
        let grid = ScalarGrid::from_fn((6, 5, 7), |i, j, k| {
            if (1..4).contains(&i) && (1..4).contains(&j) && (2..5).contains(&k) {
                0.5
            } else {
                -0.5
            }
        });
        let mesh = marching_cubes(&grid, &MarchingCubesConfig::default());
        assert!(mesh.is_closed());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn output_is_deterministic() {
        let grid = ScalarGrid::from_fn((6, 6, 6), |i, j, k| {
            let d = Point3::new(i as f64, j as f64, k as f64) - Point3::new(2.5, 2.5, 2.5);
            1.8 - d.norm()
        });
        let config = MarchingCubesConfig::default();
        assert_eq!(marching_cubes(&grid, &config), marching_cubes(&grid, &config));
    }
}
