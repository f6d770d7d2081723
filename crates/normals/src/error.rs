//! Error types for normal editing operations.

use polymesh::PolyMeshError;
use splitnorm_ipc::{MeshSelectionMode, ViewMode};

/// Errors that can occur while computing or committing loop normals.
///
/// An empty selection is not an error: operations return the base normals
/// unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalEditError {
    #[error(
        "Hard per-face normals require face selection in edit view (view {view:?}, selection {selection_mode:?})"
    )]
    PreconditionViolation {
        view: ViewMode,
        selection_mode: MeshSelectionMode,
    },

    #[error("Direction vector has zero length")]
    ZeroDirection,

    #[error(transparent)]
    Mesh(#[from] PolyMeshError),
}
