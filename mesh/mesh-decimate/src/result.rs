//! Result types for decimation operations.

// Vertex and triangle counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use mesh_types::IndexedMesh;

/// Result of mesh decimation.
#[derive(Debug, Clone)]
pub struct DecimationResult {
    /// The decimated mesh.
    pub mesh: IndexedMesh,

    /// Number of vertices in the original mesh.
    pub original_vertices: usize,

    /// Number of vertices in the decimated mesh.
    pub final_vertices: usize,

    /// Number of triangles in the original mesh.
    pub original_triangles: usize,

    /// Number of triangles in the decimated mesh.
    pub final_triangles: usize,

    /// Number of edge collapses performed.
    pub collapses_performed: usize,

    /// Number of edge collapses rejected (non-manifold, fold-over, error cap).
    pub collapses_rejected: usize,
}

impl DecimationResult {
    /// Result for a mesh that was returned untouched.
    #[must_use]
    pub fn unchanged(mesh: &IndexedMesh) -> Self {
        Self {
            mesh: mesh.clone(),
            original_vertices: mesh.vertices.len(),
            final_vertices: mesh.vertices.len(),
            original_triangles: mesh.faces.len(),
            final_triangles: mesh.faces.len(),
            collapses_performed: 0,
            collapses_rejected: 0,
        }
    }

    /// Vertex reduction ratio (final / original).
    #[must_use]
    pub fn vertex_ratio(&self) -> f64 {
        if self.original_vertices == 0 {
            1.0
        } else {
            self.final_vertices as f64 / self.original_vertices as f64
        }
    }

    /// Percentage of vertices removed.
    #[must_use]
    pub fn reduction_percent(&self) -> f64 {
        (1.0 - self.vertex_ratio()) * 100.0
    }

    /// Check if any decimation occurred.
    #[must_use]
    pub const fn was_decimated(&self) -> bool {
        self.collapses_performed > 0
    }
}

impl std::fmt::Display for DecimationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decimation: {} → {} vertices, {} → {} triangles ({:.1}% reduction, {} collapses)",
            self.original_vertices,
            self.final_vertices,
            self.original_triangles,
            self.final_triangles,
            self.reduction_percent(),
            self.collapses_performed
        )
    }
}
