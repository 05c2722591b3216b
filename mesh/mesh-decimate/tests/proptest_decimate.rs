//! Property-based tests for decimation invariants.
//!
//! Run with: cargo test -p mesh-decimate -- proptest

#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

use hashbrown::HashMap;
use mesh_decimate::{DecimateParams, decimate_mesh};
use mesh_types::{IndexedMesh, Point3, Vertex, normalize_edge};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Subdivided octahedron with each vertex pushed to radius `1 + jitter`.
fn bumpy_sphere(levels: u32, jitter: &[f64]) -> IndexedMesh {
    let mut vertices: Vec<Vertex> = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ]
    .into_iter()
    .map(Vertex::from)
    .collect();
    let mut faces = vec![
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];

    for _ in 0..levels {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut next = Vec::with_capacity(faces.len() * 4);
        for &[a, b, c] in &faces {
            let mut mid = |u: u32, v: u32| {
                *midpoints.entry(normalize_edge(u, v)).or_insert_with(|| {
                    let p = nalgebra::center(
                        &vertices[u as usize].position,
                        &vertices[v as usize].position,
                    );
                    vertices.push(Vertex::new(Point3::from(p.coords.normalize())));
                    (vertices.len() - 1) as u32
                })
            };
            let ab = mid(a, b);
            let bc = mid(b, c);
            let ca = mid(c, a);
            next.extend([[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
        }
        faces = next;
    }

    for (vertex, &j) in vertices.iter_mut().zip(jitter.iter().cycle()) {
        vertex.position = Point3::from(vertex.position.coords * (1.0 + j));
    }

    IndexedMesh::from_parts(vertices, faces)
}

fn arb_sphere() -> impl Strategy<Value = IndexedMesh> {
    (1u32..=3, prop::collection::vec(-0.1..0.1f64, 1..32))
        .prop_map(|(levels, jitter)| bumpy_sphere(levels, &jitter))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Collapses keep the surface closed with valid indices.
    #[test]
    fn decimation_keeps_surface_closed(mesh in arb_sphere(), ratio in 0.05..1.0f64) {
        let target = (mesh.vertices.len() as f64 * ratio) as usize;
        let result = decimate_mesh(&mesh, &DecimateParams::with_target_vertices(target));

        prop_assert!(result.mesh.has_valid_indices());
        prop_assert!(result.mesh.is_closed());
        prop_assert!(result.mesh.vertices.len() <= mesh.vertices.len());
        prop_assert!(result.mesh.vertices.len() >= target.min(mesh.vertices.len()).max(4));
        prop_assert_eq!(result.final_triangles, result.mesh.faces.len());
    }

    /// The same input always produces the same output.
    #[test]
    fn decimation_is_deterministic(mesh in arb_sphere(), ratio in 0.05..1.0f64) {
        let target = (mesh.vertices.len() as f64 * ratio) as usize;
        let params = DecimateParams::with_target_vertices(target);
        let a = decimate_mesh(&mesh, &params);
        let b = decimate_mesh(&mesh, &params);
        prop_assert_eq!(a.mesh, b.mesh);
    }
}
