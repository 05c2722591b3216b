//! End-to-end pipeline: mask, extract, optionally reduce, export.

use std::io::Write;
use std::path::Path;

use mesh_types::IndexedMesh;
use tracing::{debug, info};

use crate::error::MeshingResult;
use crate::export::{export_obj, write_obj};
use crate::extract::extract_surface;
use crate::mask::{build_mask, count_included};
use crate::params::MeshingParams;
use crate::reduce::reduce_by_ratio;
use crate::transform::WorldTransform;
use crate::volume::LabelVolume;

/// Summary of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshingReport {
    /// Voxels selected by the mask.
    pub voxels_included: usize,
    /// Vertex count straight out of extraction.
    pub extracted_vertices: usize,
    /// Face count straight out of extraction.
    pub extracted_faces: usize,
    /// Vertex count written.
    pub vertices: usize,
    /// Face count written.
    pub faces: usize,
    /// Edge collapses performed by decimation (0 when skipped).
    pub collapses: usize,
}

impl MeshingReport {
    /// Whether decimation changed the mesh.
    #[must_use]
    pub const fn was_decimated(&self) -> bool {
        self.collapses > 0 || self.vertices != self.extracted_vertices
    }
}

impl std::fmt::Display for MeshingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} voxels → {} vertices, {} faces",
            self.voxels_included, self.extracted_vertices, self.extracted_faces
        )?;
        if self.was_decimated() {
            write!(
                f,
                " → decimated to {} vertices, {} faces",
                self.vertices, self.faces
            )?;
        }
        Ok(())
    }
}

/// Run mask, extraction and optional decimation, in voxel-index space.
///
/// # Errors
///
/// Returns an error if the parameters are invalid.
///
/// # Example
///
/// ```
/// use mesh_volume::{mesh_volume, LabelVolume, MeshingParams};
///
/// let mut volume = LabelVolume::<u8>::new((3, 3, 3));
/// volume.set(1, 1, 1, 1);
///
/// let mesh = mesh_volume(&volume, &MeshingParams::unsmoothed()).unwrap();
/// assert_eq!(mesh.vertices.len(), 6);
/// ```
pub fn mesh_volume<T>(
    volume: &LabelVolume<T>,
    params: &MeshingParams<T>,
) -> MeshingResult<IndexedMesh>
where
    T: Copy + PartialEq + Default,
{
    run(volume, params).map(|(mesh, _)| mesh)
}

/// Run the pipeline and stream OBJ text to `writer`.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or writing fails.
pub fn process_to_writer<T, W>(
    volume: &LabelVolume<T>,
    transform: &WorldTransform,
    writer: &mut W,
    params: &MeshingParams<T>,
) -> MeshingResult<MeshingReport>
where
    T: Copy + PartialEq + Default,
    W: Write,
{
    let (mesh, report) = run(volume, params)?;
    write_obj(writer, &mesh, transform, params.reverse_winding)?;
    Ok(report)
}

/// Run the pipeline and write an OBJ file at `output_path`.
///
/// An empty selection writes an empty file.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the file cannot be
/// written.
pub fn process<T, P>(
    volume: &LabelVolume<T>,
    transform: &WorldTransform,
    output_path: P,
    params: &MeshingParams<T>,
) -> MeshingResult<MeshingReport>
where
    T: Copy + PartialEq + Default,
    P: AsRef<Path>,
{
    let (mesh, report) = run(volume, params)?;
    export_obj(&mesh, transform, params.reverse_winding, output_path)?;
    info!(%report, "Meshing complete");
    Ok(report)
}

fn run<T>(
    volume: &LabelVolume<T>,
    params: &MeshingParams<T>,
) -> MeshingResult<(IndexedMesh, MeshingReport)>
where
    T: Copy + PartialEq + Default,
{
    params.validate()?;

    let mask = build_mask(volume, params.mask_values.as_deref());
    let voxels_included = count_included(&mask);
    debug!(voxels_included, total = volume.len(), "Mask built");

    let mut mesh = extract_surface(&mask, params.sigma_smooth)?;
    let extracted_vertices = mesh.vertices.len();
    let extracted_faces = mesh.faces.len();

    let mut collapses = 0;
    if let Some(ratio) = params.decimation {
        let result = reduce_by_ratio(&mesh, ratio)?;
        collapses = result.collapses_performed;
        mesh = result.mesh;
    }

    let report = MeshingReport {
        voxels_included,
        extracted_vertices,
        extracted_faces,
        vertices: mesh.vertices.len(),
        faces: mesh.faces.len(),
        collapses,
    };
    Ok((mesh, report))
}
