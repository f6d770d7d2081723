//! Command types sent by the host to the normal editing core.

mod mesh_edit;
mod normals;

pub use mesh_edit::*;
pub use normals::*;
