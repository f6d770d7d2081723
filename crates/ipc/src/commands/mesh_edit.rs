//! Selection context supplied by the host.

use serde::{Deserialize, Serialize};

/// Viewing context of the host.
///
/// In `Object` view there is no element-level selection, so operations act on
/// the whole mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Whole-mesh editing, element selection is ignored
    Object,
    /// Element-level editing with vertex, edge, or face selection
    #[default]
    Edit,
}

/// Sub-object selection granularity for mesh editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeshSelectionMode {
    /// Select individual vertices
    #[default]
    Vertex,
    /// Select edges
    Edge,
    /// Select faces
    Face,
}

/// Host state that decides how the selection masks an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionContext {
    pub view: ViewMode,
    pub selection_mode: MeshSelectionMode,
}

impl SelectionContext {
    /// Element-level context with the given granularity
    pub fn edit(selection_mode: MeshSelectionMode) -> Self {
        Self {
            view: ViewMode::Edit,
            selection_mode,
        }
    }

    /// Whole-mesh context
    pub fn object() -> Self {
        Self {
            view: ViewMode::Object,
            selection_mode: MeshSelectionMode::default(),
        }
    }

    /// Whether element selection is meaningful in this context
    pub fn uses_selection(&self) -> bool {
        self.view == ViewMode::Edit
    }

    pub fn is_face_mode(&self) -> bool {
        self.uses_selection() && self.selection_mode == MeshSelectionMode::Face
    }
}
