//! Parameters for mesh decimation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for mesh decimation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimateParams {
    /// Stop once at most this many vertices remain.
    pub target_vertices: usize,

    /// Whether to keep boundary edges (edges with only one adjacent face)
    /// and the vertices on them in place.
    /// Default: true
    pub preserve_boundary: bool,

    /// Maximum quadric error allowed for a single collapse. If None, no limit.
    pub max_error: Option<f64>,
}

impl DecimateParams {
    /// Target a maximum vertex count.
    #[must_use]
    pub const fn with_target_vertices(count: usize) -> Self {
        Self {
            target_vertices: count,
            preserve_boundary: true,
            max_error: None,
        }
    }

    /// Set preserve boundary option.
    #[must_use]
    pub const fn with_preserve_boundary(mut self, preserve: bool) -> Self {
        self.preserve_boundary = preserve;
        self
    }

    /// Set maximum error threshold.
    #[must_use]
    pub const fn with_max_error(mut self, max_error: f64) -> Self {
        self.max_error = Some(max_error);
        self
    }
}
