//! Edge usage counts.
//!
//! A closed 2-manifold surface uses every undirected edge in exactly two
//! faces. Counting edge usage is enough to tell whether an extracted
//! isosurface has holes where it meets the volume boundary.

use hashbrown::HashMap;

/// Order an edge's endpoints so `(a, b)` and `(b, a)` hash the same.
#[inline]
#[must_use]
pub const fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}

/// Number of faces using each undirected edge of a mesh.
///
/// # Example
///
/// ```
/// use mesh_types::{EdgeUsage, unit_cube};
///
/// let cube = unit_cube();
/// let usage = EdgeUsage::build(&cube.faces);
/// assert!(usage.is_watertight());
/// assert!(usage.is_manifold());
///
/// let open = EdgeUsage::build(&[[0, 1, 2], [1, 3, 2]]);
/// assert_eq!(open.boundary_edge_count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeUsage {
    counts: HashMap<(u32, u32), u32>,
}

impl EdgeUsage {
    /// Count edge usage over a face list.
    #[must_use]
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut counts: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);

        for face in faces {
            for i in 0..3 {
                *counts
                    .entry(normalize_edge(face[i], face[(i + 1) % 3]))
                    .or_default() += 1;
            }
        }

        Self { counts }
    }

    /// Number of faces using an edge (0 if the edge is absent).
    #[must_use]
    pub fn faces_on_edge(&self, v0: u32, v1: u32) -> u32 {
        self.counts
            .get(&normalize_edge(v0, v1))
            .copied()
            .unwrap_or(0)
    }

    /// Total number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.counts.len()
    }

    /// Edges used by only one face. These outline holes.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.counts.values().filter(|&&n| n == 1).count()
    }

    /// Edges used by more than two faces.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.counts.values().filter(|&&n| n > 2).count()
    }

    /// No edge has more than two faces.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.counts.values().all(|&n| n <= 2)
    }

    /// Every edge has at least two faces.
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.counts.values().all(|&n| n >= 2)
    }

    /// Watertight and manifold: every edge is shared by exactly two faces.
    #[must_use]
    pub fn is_closed_manifold(&self) -> bool {
        self.counts.values().all(|&n| n == 2)
    }
}
