//! Selection-masked custom split normal editing.
//!
//! This crate rewrites the per-loop normals of a [`polymesh::PolyMesh`] while
//! leaving every loop outside the selection mask untouched:
//! - Soften: average face normals at selected vertices, optionally area weighted
//! - Harden: selected faces shade flat with their own face normal
//! - Flip: reverse winding of selected faces and remap their custom normals
//! - Set direction: point selected normals along a vector, per vertex or per face
//!
//! # Architecture
//!
//! Aggregation and direction setting produce sparse per-vertex
//! [`NormalOverrides`]. The writer merges them into a full loop-normal array on
//! top of base normals chosen by [`splitnorm_config::SplitNormalSource`]. Hard
//! edits (harden, per-face direction, flip) write face loop ranges directly.
//! [`NormalEditor`] dispatches host requests to these steps.

pub mod aggregate;
pub mod direction;
pub mod editor;
pub mod error;
pub mod flip;
pub mod harden;
pub mod overrides;
pub mod writer;

pub use aggregate::{smoothed_vertex_normals, AggregationTarget, Weighting};
pub use direction::{direction_overrides, set_face_loop_normals};
pub use editor::NormalEditor;
pub use error::NormalEditError;
pub use flip::{flip_loop_normals, flip_selected};
pub use harden::harden_selected;
pub use overrides::NormalOverrides;
pub use writer::{base_normals, merge_overrides};
