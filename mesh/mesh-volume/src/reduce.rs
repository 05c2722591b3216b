//! Optional vertex reduction of an extracted surface.

use mesh_decimate::{DecimateParams, DecimationResult, decimate_mesh};
use mesh_types::{IndexedMesh, Vertex};
use tracing::{info, warn};

use crate::error::{MeshingError, MeshingResult};

/// Vertex count to aim for when keeping `ratio` of `vertex_count`.
///
/// Truncates toward zero.
///
/// # Errors
///
/// Returns [`MeshingError::InvalidDecimation`] unless `0 < ratio <= 1`.
///
/// ```
/// use mesh_volume::target_vertex_count;
///
/// assert_eq!(target_vertex_count(1000, 0.25).unwrap(), 250);
/// assert_eq!(target_vertex_count(7, 0.5).unwrap(), 3);
/// assert!(target_vertex_count(10, 0.0).is_err());
/// ```
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn target_vertex_count(vertex_count: usize, ratio: f64) -> MeshingResult<usize> {
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(MeshingError::InvalidDecimation(ratio));
    }
    Ok((vertex_count as f64 * ratio).floor() as usize)
}

/// Reduce `mesh` to at most `target` vertices.
///
/// The surface is closed, so boundary preservation is turned off. A target
/// at or above the current vertex count returns the mesh unchanged.
///
/// A closed component cannot shrink below a tetrahedron. When edge
/// collapses stall above `target`, whole components are dropped, smallest
/// first, until the count fits. A target below 4 on a single closed surface
/// therefore gives an empty mesh.
#[must_use]
pub fn reduce(mesh: &IndexedMesh, target: usize) -> DecimationResult {
    info!(
        from = mesh.vertices.len(),
        to = target,
        "Decimating from {} to {} vertices",
        mesh.vertices.len(),
        target
    );

    let params = DecimateParams::with_target_vertices(target).with_preserve_boundary(false);
    let mut result = decimate_mesh(mesh, &params);

    if result.mesh.vertices.len() > target {
        warn!(
            remaining = result.mesh.vertices.len(),
            target, "Collapses stalled above target, dropping smallest components"
        );
        result.mesh = drop_smallest_components(&result.mesh, target);
        result.final_vertices = result.mesh.vertices.len();
        result.final_triangles = result.mesh.faces.len();
    }

    result
}

/// Reduce `mesh` to `ratio` of its vertices.
///
/// # Errors
///
/// Returns [`MeshingError::InvalidDecimation`] unless `0 < ratio <= 1`.
pub fn reduce_by_ratio(mesh: &IndexedMesh, ratio: f64) -> MeshingResult<DecimationResult> {
    let target = target_vertex_count(mesh.vertices.len(), ratio)?;
    Ok(reduce(mesh, target))
}

/// Union-find root of `v`, halving paths on the way.
fn find_root(parent: &mut [usize], mut v: usize) -> usize {
    while parent[v] != v {
        parent[v] = parent[parent[v]];
        v = parent[v];
    }
    v
}

/// Remove connected components, smallest first, until at most `target`
/// vertices remain. Survivors keep their relative order.
#[allow(clippy::cast_possible_truncation)]
fn drop_smallest_components(mesh: &IndexedMesh, target: usize) -> IndexedMesh {
    let n = mesh.vertices.len();
    let mut parent: Vec<usize> = (0..n).collect();

    for face in &mesh.faces {
        let root = find_root(&mut parent, face[0] as usize);
        for &v in &face[1..] {
            let other = find_root(&mut parent, v as usize);
            if other != root {
                parent[other] = root;
            }
        }
    }

    let roots: Vec<usize> = (0..n).map(|v| find_root(&mut parent, v)).collect();
    let mut sizes = vec![0usize; n];
    for &r in &roots {
        sizes[r] += 1;
    }

    // (size, root) ordering keeps the choice deterministic
    let mut components: Vec<(usize, usize)> = sizes
        .iter()
        .enumerate()
        .filter(|&(_, &size)| size > 0)
        .map(|(root, &size)| (size, root))
        .collect();
    components.sort_unstable();

    let mut dropped = vec![false; n];
    let mut remaining = n;
    for (size, root) in components {
        if remaining <= target {
            break;
        }
        dropped[root] = true;
        remaining -= size;
    }

    let mut remap = vec![u32::MAX; n];
    let mut vertices: Vec<Vertex> = Vec::with_capacity(remaining);
    for (old, vertex) in mesh.vertices.iter().enumerate() {
        if !dropped[roots[old]] {
            remap[old] = vertices.len() as u32;
            vertices.push(vertex.clone());
        }
    }

    let faces = mesh
        .faces
        .iter()
        .filter(|face| !dropped[roots[face[0] as usize]])
        .map(|face| face.map(|v| remap[v as usize]))
        .collect();

    IndexedMesh::from_parts(vertices, faces)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::extract::extract_surface;
    use crate::grid::ScalarGrid;
    use mesh_types::MeshTopology;

    fn ball() -> IndexedMesh {
        let mask = ScalarGrid::from_fn((12, 12, 12), |i, j, k| {
            let d2 = [i, j, k]
                .iter()
                .map(|&c| (c as f64 - 5.5).powi(2))
                .sum::<f64>();
            if d2 <= 9.0 { 1.0 } else { 0.0 }
        });
        extract_surface(&mask, 2.0).unwrap()
    }

    #[test]
    fn ratio_bounds() {
        assert!(target_vertex_count(10, 1.0).is_ok());
        assert!(matches!(
            target_vertex_count(10, 0.0),
            Err(MeshingError::InvalidDecimation(_))
        ));
        assert!(target_vertex_count(10, -0.5).is_err());
        assert!(target_vertex_count(10, 1.5).is_err());
        assert!(target_vertex_count(10, f64::NAN).is_err());
    }

    #[test]
    fn full_ratio_is_noop() {
        let mesh = ball();
        let result = reduce_by_ratio(&mesh, 1.0).unwrap();
        assert!(!result.was_decimated());
        assert_eq!(result.mesh, mesh);
    }

    #[test]
    fn reduction_meets_target_and_stays_closed() {
        let mesh = ball();
        let n = mesh.vertices.len();
        let result = reduce_by_ratio(&mesh, 0.5).unwrap();

        assert!(result.mesh.vertices.len() <= n / 2);
        assert!(result.mesh.has_valid_indices());
        assert!(result.mesh.is_closed());
    }

    fn voxels(dims: (usize, usize, usize), on: &[(usize, usize, usize)]) -> IndexedMesh {
        let mask = ScalarGrid::from_fn(dims, |i, j, k| {
            if on.contains(&(i, j, k)) { 1.0 } else { 0.0 }
        });
        extract_surface(&mask, 0.0).unwrap()
    }

    #[test]
    fn targets_below_a_tetrahedron_empty_the_mesh() {
        let octahedron = voxels((3, 3, 3), &[(1, 1, 1)]);
        assert_eq!(octahedron.vertices.len(), 6);

        for ratio in [0.5, 0.01] {
            let target = target_vertex_count(6, ratio).unwrap();
            let result = reduce_by_ratio(&octahedron, ratio).unwrap();
            assert!(result.mesh.vertices.len() <= target, "ratio {ratio}");
            assert!(result.mesh.is_empty(), "ratio {ratio}");
            assert_eq!(result.final_vertices, 0);
            assert_eq!(result.final_triangles, 0);
        }
    }

    #[test]
    fn stalled_reduction_drops_whole_components() {
        // Two separate octahedra can only shrink to two tetrahedra
        let pair = voxels((7, 3, 3), &[(1, 1, 1), (5, 1, 1)]);
        assert_eq!(pair.vertices.len(), 12);

        let result = reduce(&pair, 6);
        assert!(!result.mesh.is_empty());
        assert!(result.mesh.vertices.len() <= 6);
        assert!(result.mesh.has_valid_indices());
        assert!(result.mesh.is_closed());
        assert_eq!(result.final_vertices, result.mesh.vertices.len());
    }

    #[test]
    fn component_dropping_keeps_the_larger_surface() {
        let small = voxels((3, 3, 3), &[(1, 1, 1)]);
        let large = ball();
        let mut vertices = small.vertices.clone();
        vertices.extend(large.vertices.iter().cloned());
        let offset = u32::try_from(small.vertices.len()).unwrap();
        let mut faces = small.faces.clone();
        faces.extend(large.faces.iter().map(|f| f.map(|v| v + offset)));
        let both = IndexedMesh::from_parts(vertices, faces);

        let kept = drop_smallest_components(&both, large.vertices.len());
        assert_eq!(kept, large);
    }
}
