use thiserror::Error;

use crate::utils::types::VertexIdx;

/// Errors raised by a triangulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriangulationError {
    /// The circumcircle is undefined: all three vertices lie on one near-horizontal line.
    ///
    /// Indices refer to the working vertex list, i.e. the input followed by the three
    /// super-triangle corners.
    #[error("can't get circumcircle since vertices {vertices:?} are y-aligned")]
    DegenerateTriangle { vertices: [VertexIdx; 3] },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
