//! World-space OBJ export.
//!
//! Writes `v X Y Z` lines for every vertex, then `f A B C` lines with
//! 1-based indices. No header, normals or materials.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, Vertex};
use tracing::info;

use crate::error::{MeshingError, MeshingResult};
use crate::transform::WorldTransform;

/// Decimal places kept for exported coordinates.
pub const COORDINATE_DECIMALS: i32 = 4;

/// Round a coordinate for the text form.
///
/// Negative zero is folded into zero. Values too large to scale are kept.
#[must_use]
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_DECIMALS);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value + 0.0;
    }
    scaled.round() / scale + 0.0
}

/// Rounded coordinate in plain decimal form.
///
/// Whole numbers keep one fractional digit (`6.0`). Large magnitudes are
/// written out in full, never in exponent form, so strict OBJ readers accept
/// them.
struct Coordinate(f64);

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = round_coordinate(self.0);
        if value.fract() == 0.0 {
            write!(f, "{value:.1}")
        } else {
            write!(f, "{value}")
        }
    }
}

/// Triangle as written to the file, 0-based.
///
/// The default (`reverse_winding == false`) writes `[c, b, a]` for a face
/// `[a, b, c]`; reversed writes it as stored.
#[must_use]
pub const fn output_winding(face: [u32; 3], reverse_winding: bool) -> [u32; 3] {
    if reverse_winding {
        face
    } else {
        [face[2], face[1], face[0]]
    }
}

/// Copy of `mesh` with every vertex mapped to world space.
///
/// Coordinates are not rounded and faces keep their stored winding.
#[must_use]
pub fn to_world_mesh(mesh: &IndexedMesh, transform: &WorldTransform) -> IndexedMesh {
    IndexedMesh::from_parts(
        mesh.vertices
            .iter()
            .map(|v| Vertex::new(transform.to_world(&v.position)))
            .collect(),
        mesh.faces.clone(),
    )
}

/// Stream a voxel-space mesh as world-space OBJ text.
///
/// # Errors
///
/// Returns [`MeshingError::Io`] if writing fails.
///
/// # Example
///
/// ```
/// use mesh_types::IndexedMesh;
/// use mesh_volume::{write_obj, WorldTransform};
///
/// let mesh = IndexedMesh::from_raw(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2]);
/// let mut out = Vec::new();
/// write_obj(&mut out, &mesh, &WorldTransform::identity(), false).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text, "v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nf 3 2 1\n");
/// ```
pub fn write_obj<W: Write>(
    writer: &mut W,
    mesh: &IndexedMesh,
    transform: &WorldTransform,
    reverse_winding: bool,
) -> MeshingResult<()> {
    for vertex in &mesh.vertices {
        let p = transform.to_world(&vertex.position);
        writeln!(
            writer,
            "v {} {} {}",
            Coordinate(p.x),
            Coordinate(p.y),
            Coordinate(p.z)
        )?;
    }

    for face in &mesh.faces {
        let [a, b, c] = output_winding(*face, reverse_winding);
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }

    Ok(())
}

/// Write a voxel-space mesh as a world-space OBJ file.
///
/// The file is created (or truncated) and written through one buffered
/// writer.
///
/// # Errors
///
/// Returns [`MeshingError::OutputFile`] if the file cannot be created or
/// written.
pub fn export_obj<P: AsRef<Path>>(
    mesh: &IndexedMesh,
    transform: &WorldTransform,
    reverse_winding: bool,
    path: P,
) -> MeshingResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| MeshingError::output_file(path, e))?;
    let mut writer = BufWriter::new(file);

    write_obj(&mut writer, mesh, transform, reverse_winding).map_err(|e| match e {
        MeshingError::Io(source) => MeshingError::output_file(path, source),
        other => other,
    })?;
    writer
        .flush()
        .map_err(|e| MeshingError::output_file(path, e))?;

    info!(
        path = %path.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Mesh exported"
    );

    Ok(())
}
