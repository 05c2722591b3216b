//! Error types for volume meshing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for volume meshing operations.
pub type MeshingResult<T> = Result<T, MeshingError>;

/// Errors that can occur while meshing a labeled volume.
#[derive(Debug, Error)]
pub enum MeshingError {
    /// Voxel buffer length does not match the volume dimensions.
    #[error("volume dimension mismatch: expected {expected} voxels, got {actual}")]
    DimensionMismatch {
        /// `ni * nj * nk`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },

    /// Smoothing sigma is negative or not finite.
    #[error("invalid smoothing sigma: {0} (must be finite and >= 0)")]
    InvalidSigma(f64),

    /// Decimation ratio outside `(0, 1]`.
    #[error("invalid decimation ratio: {0} (must be in (0, 1])")]
    InvalidDecimation(f64),

    /// The output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    OutputFile {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error while streaming to a writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshingError {
    /// Wrap an I/O error with the output path it occurred on.
    pub(crate) fn output_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = MeshingError::DimensionMismatch {
            expected: 27,
            actual: 26,
        };
        assert_eq!(
            err.to_string(),
            "volume dimension mismatch: expected 27 voxels, got 26"
        );

        assert!(MeshingError::InvalidDecimation(0.0).to_string().contains("(0, 1]"));
        assert!(MeshingError::InvalidSigma(-1.0).to_string().contains("-1"));
    }

    #[test]
    fn output_file_keeps_path_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir");
        let err = MeshingError::output_file("/nope/out.obj", io);
        let message = err.to_string();
        assert!(message.contains("/nope/out.obj"));
        assert!(message.contains("missing dir"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
