//! Normal editing command types.

use serde::{Deserialize, Serialize};

/// Commands for editing custom split normals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NormalEditCommand {
    /// Average face normals around selected vertices
    Soften {
        /// Only mask using selected faces regardless of the selection mode
        #[serde(default)]
        always_use_face_mask: bool,
    },
    /// Area-weighted average of face normals
    WeightedSoften,
    /// Set loops of selected faces to their face normal
    Harden,
    /// Reverse winding of selected faces along with their custom normals
    FlipDirection,
    /// Point selected normals along an explicit direction
    SetDirection {
        direction: [f32; 3],
        /// Write per-face loops, allowing seams at the selection boundary
        #[serde(default)]
        allow_seams: bool,
    },
}

impl NormalEditCommand {
    /// Short label for logging and UI display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Soften { .. } => "soften",
            Self::WeightedSoften => "weighted_soften",
            Self::Harden => "harden",
            Self::FlipDirection => "flip_direction",
            Self::SetDirection { .. } => "set_direction",
        }
    }
}
