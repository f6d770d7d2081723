//! Request envelope sent from the host to the normal editing core.

use serde::{Deserialize, Serialize};

use crate::commands::{NormalEditCommand, SelectionContext};
use crate::error::IpcError;

/// A single normal editing request.
///
/// Each request is an independent transform of the mesh's loop normals; no
/// state carries over between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalEditRequest {
    pub command: NormalEditCommand,
    #[serde(default)]
    pub context: SelectionContext,
}

impl NormalEditRequest {
    pub fn new(command: NormalEditCommand, context: SelectionContext) -> Self {
        Self { command, context }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a request from JSON
    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        if json.trim().is_empty() {
            return Err(IpcError::InvalidFormat("empty request".to_string()));
        }
        Ok(serde_json::from_str(json)?)
    }
}
