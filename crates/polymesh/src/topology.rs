//! Topology query methods for PolyMesh.

use glam::Vec3;

use super::construction::edge_key;
use super::types::{Edge, EdgeId, Face, FaceId, Loop, LoopId, Vertex, VertexId};
use super::PolyMesh;

impl PolyMesh {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get vertex by ID
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0 as usize)
    }

    /// Get edge by ID
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0 as usize)
    }

    /// Get face by ID
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id.0 as usize)
    }

    /// Get loop by ID
    pub fn get_loop(&self, id: LoopId) -> Option<&Loop> {
        self.loops.get(id.0 as usize)
    }

    /// Get all vertices
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get all edges
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get all faces
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Get all loops
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    /// Custom split normal of every loop, indexed by `LoopId`
    pub fn loop_normals(&self) -> &[Vec3] {
        &self.loop_normals
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    // ========================================================================
    // Adjacency
    // ========================================================================

    /// Faces that have a corner at the vertex
    pub fn vertex_faces(&self, vertex_id: VertexId) -> &[FaceId] {
        self.vertex_faces
            .get(vertex_id.0 as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Edges that end at the vertex
    pub fn vertex_edges(&self, vertex_id: VertexId) -> &[EdgeId] {
        self.vertex_edges
            .get(vertex_id.0 as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Faces bordering the edge
    pub fn edge_faces(&self, edge_id: EdgeId) -> &[FaceId] {
        self.edge_faces
            .get(edge_id.0 as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find the edge between two vertices, in either direction
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edge_map.get(&edge_key(a, b)).copied()
    }

    /// Check if an edge borders only one face
    pub fn is_boundary_edge(&self, edge_id: EdgeId) -> bool {
        self.edge_faces(edge_id).len() < 2
    }

    /// Loop indices of a face (empty for unknown faces)
    pub fn face_loops(&self, face_id: FaceId) -> std::ops::Range<usize> {
        self.face(face_id).map(Face::loop_range).unwrap_or(0..0)
    }

    /// Get the vertices of a face in winding order
    pub fn face_vertices(&self, face_id: FaceId) -> Vec<VertexId> {
        self.face_loops(face_id)
            .map(|l| self.loops[l].vertex)
            .collect()
    }

    // ========================================================================
    // Face geometry
    // ========================================================================

    /// Newell's normal of a face: direction is the face normal, length is
    /// twice the face area. Works for non-planar polygons.
    fn newell_vector(&self, face_id: FaceId) -> Vec3 {
        let range = self.face_loops(face_id);
        let count = range.len();
        let start = range.start;
        let mut sum = Vec3::ZERO;
        for i in 0..count {
            let current = self.vertices[self.loops[start + i].vertex.0 as usize].position;
            let next = self.vertices[self.loops[start + (i + 1) % count].vertex.0 as usize].position;
            sum += current.cross(next);
        }
        sum
    }

    /// Unit face normal (right-hand rule over the winding), zero if degenerate
    pub fn face_normal(&self, face_id: FaceId) -> Vec3 {
        self.newell_vector(face_id).normalize_or_zero()
    }

    /// Planar area of a face
    pub fn face_area(&self, face_id: FaceId) -> f32 {
        0.5 * self.newell_vector(face_id).length()
    }

    /// Face normals of every face, indexed by `FaceId`
    pub fn face_normals(&self) -> Vec<Vec3> {
        self.faces.iter().map(|f| self.face_normal(f.id)).collect()
    }

    /// Face areas of every face, indexed by `FaceId`
    pub fn face_areas(&self) -> Vec<f32> {
        self.faces.iter().map(|f| self.face_area(f.id)).collect()
    }
}
