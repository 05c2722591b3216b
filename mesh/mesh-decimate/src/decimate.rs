//! Core mesh decimation algorithm.
//!
//! Implements edge collapse with quadric error metrics (QEM). Stale queue
//! entries are dropped lazily: each entry records a stamp per endpoint and
//! is ignored once either endpoint has changed since it was queued.

// Mesh indices and counts don't overflow in practice
#![allow(clippy::cast_possible_truncation)]

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashSet;
use mesh_types::{normalize_edge, IndexedMesh, Point3, Vector3, Vertex};
use tracing::{debug, info};

use crate::params::DecimateParams;
use crate::quadric::Quadric;
use crate::result::DecimationResult;

/// Squared cross-product length under which a face counts as degenerate.
const DEGENERATE_AREA_SQ: f64 = 1e-24;

/// An edge collapse candidate in the priority queue.
#[derive(Debug, Clone)]
struct EdgeCollapse {
    /// Surviving vertex (the lower index, so vertex order is kept).
    keep: u32,
    /// Vertex merged into `keep`.
    remove: u32,
    /// Quadric error of the collapse.
    cost: f64,
    /// Position of the merged vertex.
    position: Point3<f64>,
    /// Endpoint stamps at queue time.
    stamps: (u32, u32),
}

impl PartialEq for EdgeCollapse {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgeCollapse {}

impl PartialOrd for EdgeCollapse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeCollapse {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; index tie-break keeps runs deterministic
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.keep.cmp(&self.keep))
            .then_with(|| other.remove.cmp(&self.remove))
    }
}

/// Decimate a mesh using edge collapse with quadric error metrics.
///
/// Vertices that survive keep their relative order, as do faces. Vertices
/// no longer referenced by any face are dropped from the output.
///
/// If the mesh already meets the target it is returned unchanged.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_decimate::{decimate_mesh, DecimateParams};
///
/// let cube = unit_cube();
/// let result = decimate_mesh(&cube, &DecimateParams::with_target_vertices(8));
/// assert!(!result.was_decimated());
/// ```
#[must_use]
pub fn decimate_mesh(mesh: &IndexedMesh, params: &DecimateParams) -> DecimationResult {
    if mesh.faces.is_empty() {
        return DecimationResult::unchanged(mesh);
    }

    let target = params.target_vertices;
    let mut work = Workspace::new(mesh, params);

    if work.live_vertices <= target {
        return DecimationResult::unchanged(mesh);
    }

    info!(
        vertices = work.live_vertices,
        triangles = work.live_faces,
        target,
        "Starting mesh decimation"
    );

    let mut heap = work.initial_queue();
    let mut collapses_performed = 0;
    let mut collapses_rejected = 0;
    let mut progress_since_rebuild = false;

    while work.live_vertices > target {
        let Some(collapse) = heap.pop() else {
            // Rejected candidates may have become valid since they were queued
            if !progress_since_rebuild {
                break;
            }
            debug!(collapses_performed, "Rebuilding collapse queue");
            heap = work.initial_queue();
            progress_since_rebuild = false;
            continue;
        };

        if work.is_stale(&collapse) {
            continue;
        }

        if !work.is_collapse_valid(&collapse) {
            collapses_rejected += 1;
            continue;
        }

        if let Some(max_error) = params.max_error {
            let combined =
                work.quadrics[collapse.keep as usize] + work.quadrics[collapse.remove as usize];
            if combined.evaluate(&collapse.position) > max_error {
                collapses_rejected += 1;
                continue;
            }
        }

        work.collapse(&collapse);
        collapses_performed += 1;
        progress_since_rebuild = true;

        work.requeue_around(collapse.keep, &mut heap);
    }

    let final_mesh = work.into_mesh();

    info!(
        final_vertices = final_mesh.vertices.len(),
        final_triangles = final_mesh.faces.len(),
        collapses = collapses_performed,
        "Decimation complete"
    );

    DecimationResult {
        original_vertices: mesh.vertices.len(),
        final_vertices: final_mesh.vertices.len(),
        original_triangles: mesh.faces.len(),
        final_triangles: final_mesh.faces.len(),
        mesh: final_mesh,
        collapses_performed,
        collapses_rejected,
    }
}

/// Mutable decimation state.
struct Workspace<'a> {
    params: &'a DecimateParams,
    positions: Vec<Point3<f64>>,
    quadrics: Vec<Quadric>,
    faces: Vec<Option<[u32; 3]>>,
    vertex_faces: Vec<Vec<usize>>,
    stamps: Vec<u32>,
    live_vertices: usize,
    live_faces: usize,
}

impl<'a> Workspace<'a> {
    fn new(mesh: &IndexedMesh, params: &'a DecimateParams) -> Self {
        let positions: Vec<Point3<f64>> = mesh.vertices.iter().map(|v| v.position).collect();
        let mut quadrics = vec![Quadric::default(); positions.len()];
        let mut vertex_faces = vec![Vec::new(); positions.len()];

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let [p0, p1, p2] = face.map(|i| positions[i as usize]);
            let plane = Quadric::from_triangle(&p0, &p1, &p2);
            for &v in face {
                vertex_faces[v as usize].push(face_idx);
                if let Some(q) = plane {
                    quadrics[v as usize] += q;
                }
            }
        }

        let live_vertices = vertex_faces.iter().filter(|f| !f.is_empty()).count();

        Self {
            params,
            stamps: vec![0; positions.len()],
            positions,
            quadrics,
            faces: mesh.faces.iter().copied().map(Some).collect(),
            vertex_faces,
            live_vertices,
            live_faces: mesh.faces.len(),
        }
    }

    fn initial_queue(&self) -> BinaryHeap<EdgeCollapse> {
        let mut heap = BinaryHeap::new();
        let mut seen = HashSet::new();

        for face in self.faces.iter().flatten() {
            for i in 0..3 {
                let edge = normalize_edge(face[i], face[(i + 1) % 3]);
                if seen.insert(edge) {
                    if let Some(candidate) = self.candidate(edge.0, edge.1) {
                        heap.push(candidate);
                    }
                }
            }
        }

        heap
    }

    fn requeue_around(&self, vertex: u32, heap: &mut BinaryHeap<EdgeCollapse>) {
        for neighbor in self.neighbors(vertex) {
            let (a, b) = normalize_edge(vertex, neighbor);
            if let Some(candidate) = self.candidate(a, b) {
                heap.push(candidate);
            }
        }
    }

    fn candidate(&self, keep: u32, remove: u32) -> Option<EdgeCollapse> {
        let shared = self.shared_faces(keep, remove);
        if shared.is_empty() {
            return None;
        }

        if self.params.preserve_boundary
            && (shared.len() == 1
                || self.is_boundary_vertex(keep)
                || self.is_boundary_vertex(remove))
        {
            return None;
        }

        let combined = self.quadrics[keep as usize] + self.quadrics[remove as usize];
        let position = combined.optimal_point().unwrap_or_else(|| {
            nalgebra::center(
                &self.positions[keep as usize],
                &self.positions[remove as usize],
            )
        });

        Some(EdgeCollapse {
            keep,
            remove,
            cost: combined.evaluate(&position),
            position,
            stamps: (self.stamps[keep as usize], self.stamps[remove as usize]),
        })
    }

    fn is_stale(&self, c: &EdgeCollapse) -> bool {
        c.stamps != (self.stamps[c.keep as usize], self.stamps[c.remove as usize])
            || self.vertex_faces[c.keep as usize].is_empty()
            || self.vertex_faces[c.remove as usize].is_empty()
    }

    /// Link condition plus fold-over rejection.
    fn is_collapse_valid(&self, c: &EdgeCollapse) -> bool {
        let shared = self.shared_faces(c.keep, c.remove);
        if shared.is_empty() {
            return false;
        }

        let keep_ring = self.neighbors(c.keep);
        let remove_ring = self.neighbors(c.remove);
        if keep_ring.intersection(&remove_ring).count() > shared.len() {
            return false;
        }

        !self.creates_duplicate_face(c.keep, c.remove)
            && !self.flips_faces(c.keep, c.remove, &c.position)
            && !self.flips_faces(c.remove, c.keep, &c.position)
    }

    /// Would merging `remove` into `keep` make two faces share all three
    /// vertices? Happens when collapsing an edge of a tetrahedron.
    fn creates_duplicate_face(&self, keep: u32, remove: u32) -> bool {
        let sorted = |mut face: [u32; 3]| {
            face.sort_unstable();
            face
        };
        let existing: HashSet<[u32; 3]> = self.vertex_faces[keep as usize]
            .iter()
            .filter_map(|&fi| self.faces[fi])
            .filter(|face| !face.contains(&remove))
            .map(sorted)
            .collect();

        self.vertex_faces[remove as usize]
            .iter()
            .filter_map(|&fi| self.faces[fi])
            .filter(|face| !face.contains(&keep))
            .any(|face| existing.contains(&sorted(face.map(|v| if v == remove { keep } else { v }))))
    }

    /// Would moving `vertex` to `target` flip or flatten one of its faces
    /// that survives the collapse?
    fn flips_faces(&self, vertex: u32, other: u32, target: &Point3<f64>) -> bool {
        self.vertex_faces[vertex as usize].iter().any(|&fi| {
            let Some(face) = self.faces[fi] else {
                return false;
            };
            if face.contains(&other) {
                return false;
            }

            let before = self.face_cross(face);
            if before.norm_squared() < DEGENERATE_AREA_SQ {
                return false;
            }

            let [p0, p1, p2] = face.map(|i| {
                if i == vertex {
                    *target
                } else {
                    self.positions[i as usize]
                }
            });
            let after = (p1 - p0).cross(&(p2 - p0));
            after.dot(&before) <= 0.0
        })
    }

    fn collapse(&mut self, c: &EdgeCollapse) {
        let keep = c.keep as usize;
        let remove = c.remove as usize;

        self.positions[keep] = c.position;
        let merged = self.quadrics[remove];
        self.quadrics[keep] += merged;

        let mut touched: Vec<u32> = Vec::new();
        for fi in std::mem::take(&mut self.vertex_faces[remove]) {
            let Some(mut face) = self.faces[fi] else {
                continue;
            };

            if face.contains(&c.keep) {
                self.faces[fi] = None;
                self.live_faces -= 1;
                for &v in &face {
                    if v != c.remove {
                        self.vertex_faces[v as usize].retain(|&f| f != fi);
                        touched.push(v);
                    }
                }
            } else {
                for idx in &mut face {
                    if *idx == c.remove {
                        *idx = c.keep;
                    }
                }
                self.faces[fi] = Some(face);
                self.vertex_faces[keep].push(fi);
            }
        }

        self.live_vertices -= 1;
        self.stamps[keep] += 1;
        self.stamps[remove] += 1;

        touched.sort_unstable();
        touched.dedup();
        for v in touched {
            if self.vertex_faces[v as usize].is_empty() {
                self.live_vertices -= 1;
                self.stamps[v as usize] += 1;
            }
        }
    }

    fn neighbors(&self, vertex: u32) -> HashSet<u32> {
        self.vertex_faces[vertex as usize]
            .iter()
            .filter_map(|&fi| self.faces[fi])
            .flatten()
            .filter(|&v| v != vertex)
            .collect()
    }

    fn shared_faces(&self, a: u32, b: u32) -> Vec<[u32; 3]> {
        self.vertex_faces[a as usize]
            .iter()
            .filter_map(|&fi| self.faces[fi])
            .filter(|face| face.contains(&b))
            .collect()
    }

    fn is_boundary_vertex(&self, vertex: u32) -> bool {
        self.neighbors(vertex)
            .into_iter()
            .any(|n| self.shared_faces(vertex, n).len() == 1)
    }

    fn face_cross(&self, face: [u32; 3]) -> Vector3<f64> {
        let [p0, p1, p2] = face.map(|i| self.positions[i as usize]);
        (p1 - p0).cross(&(p2 - p0))
    }

    fn into_mesh(self) -> IndexedMesh {
        let mut remap = vec![u32::MAX; self.positions.len()];
        let mut vertices = Vec::with_capacity(self.live_vertices);

        for (old, position) in self.positions.iter().enumerate() {
            if !self.vertex_faces[old].is_empty() {
                remap[old] = vertices.len() as u32;
                vertices.push(Vertex::new(*position));
            }
        }

        let faces: Vec<[u32; 3]> = self
            .faces
            .iter()
            .flatten()
            .map(|face| face.map(|i| remap[i as usize]))
            .collect();

        debug!(
            vertices = vertices.len(),
            faces = faces.len(),
            "Built final decimated mesh"
        );

        IndexedMesh::from_parts(vertices, faces)
    }
}
