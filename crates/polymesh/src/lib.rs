//! Polygon mesh with per-loop custom normals
//!
//! Stores vertices, edges, faces, and face corners ("loops"). Every loop
//! carries its own custom split normal, so a vertex shared by several faces
//! can shade differently in each of them. Vertex, edge, and face adjacency is
//! cached at construction; winding flips reorder loop references but never
//! change which elements are adjacent.

mod construction;
mod linked;
mod modification;
mod selection;
mod split;
mod topology;
mod types;
mod validation;

#[cfg(feature = "bevy")]
mod bevy_mesh;

use std::collections::HashMap;

use glam::Vec3;

pub use linked::FaceMask;
pub use split::normals_as_bytes;
pub use types::{Edge, EdgeId, Face, FaceId, Loop, LoopId, PolyMeshError, Vertex, VertexId};

/// Polygon mesh data structure
///
/// Provides adjacency queries and per-loop normal storage for normal editing.
#[derive(Debug, Clone)]
pub struct PolyMesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) loops: Vec<Loop>,
    /// Custom split normal per loop, indexed by `LoopId`
    pub(crate) loop_normals: Vec<Vec3>,
    /// Map from (low, high) vertex pair to edge
    pub(crate) edge_map: HashMap<(VertexId, VertexId), EdgeId>,
    pub(crate) vertex_faces: Vec<Vec<FaceId>>,
    pub(crate) vertex_edges: Vec<Vec<EdgeId>>,
    pub(crate) edge_faces: Vec<Vec<FaceId>>,
}
