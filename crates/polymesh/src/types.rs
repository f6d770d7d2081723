//! Type definitions for the polygon mesh data structure.

use glam::Vec3;

/// Type-safe vertex identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

/// Type-safe edge identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

/// Type-safe face identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

/// Type-safe loop (face corner) identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoopId(pub u32);

/// A vertex in the mesh
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: VertexId,
    pub position: Vec3,
    pub select: bool,
}

/// An undirected edge between two vertices
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    /// Endpoints, lower index first
    pub vertices: (VertexId, VertexId),
    pub select: bool,
}

impl Edge {
    /// Whether the edge touches the given vertex
    pub fn has_vertex(&self, vertex_id: VertexId) -> bool {
        self.vertices.0 == vertex_id || self.vertices.1 == vertex_id
    }
}

/// A face (polygon) in the mesh
///
/// Corners are the contiguous loop range `loop_start..loop_start + loop_total`.
#[derive(Debug, Clone)]
pub struct Face {
    pub id: FaceId,
    pub loop_start: u32,
    pub loop_total: u32,
    pub select: bool,
    /// Smooth shading: derived split normals blend with neighboring faces
    pub use_smooth: bool,
}

impl Face {
    /// Loop indices of this face in winding order
    pub fn loop_range(&self) -> std::ops::Range<usize> {
        let start = self.loop_start as usize;
        start..start + self.loop_total as usize
    }
}

/// A face corner
///
/// Each loop references exactly one vertex and belongs to exactly one face. A
/// vertex is shared by one loop per adjacent face corner, which is what allows
/// split normals.
#[derive(Debug, Clone)]
pub struct Loop {
    pub id: LoopId,
    pub vertex: VertexId,
    pub face: FaceId,
}

/// Errors that can occur during mesh construction and updates
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolyMeshError {
    #[error("Face {face} has {corners} corners, at least 3 are required")]
    TooFewCorners { face: u32, corners: usize },
    #[error("Face {face} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        face: u32,
        vertex: u32,
        vertex_count: usize,
    },
    #[error("Face {face} references vertex {vertex} more than once")]
    RepeatedVertex { face: u32, vertex: u32 },
    #[error("Index count {0} is not divisible by 3")]
    PartialTriangle(usize),
    #[error("Expected {expected} loop normals, got {actual}")]
    NormalCountMismatch { expected: usize, actual: usize },
    #[error("Invalid mesh topology: {0}")]
    InvalidTopology(String),
    #[cfg(feature = "bevy")]
    #[error("Mesh has no position attribute")]
    NoPositions,
    #[cfg(feature = "bevy")]
    #[error("Mesh has no indices")]
    NoIndices,
}
