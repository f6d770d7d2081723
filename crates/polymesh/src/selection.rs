//! Element selection flags.
//!
//! Selecting an element also selects the lower-order elements it is built
//! from, the way edit-mode selection flushes down. Deselecting only clears the
//! element itself.

use super::types::{EdgeId, FaceId, VertexId};
use super::PolyMesh;

impl PolyMesh {
    pub fn select_vertex(&mut self, vertex_id: VertexId, select: bool) {
        if let Some(v) = self.vertices.get_mut(vertex_id.0 as usize) {
            v.select = select;
        }
    }

    /// Select or deselect an edge; selecting also selects both endpoints
    pub fn select_edge(&mut self, edge_id: EdgeId, select: bool) {
        let Some(edge) = self.edges.get_mut(edge_id.0 as usize) else {
            return;
        };
        edge.select = select;
        if select {
            let (a, b) = edge.vertices;
            self.vertices[a.0 as usize].select = true;
            self.vertices[b.0 as usize].select = true;
        }
    }

    /// Select or deselect a face; selecting also selects its vertices and edges
    pub fn select_face(&mut self, face_id: FaceId, select: bool) {
        let Some(face) = self.faces.get_mut(face_id.0 as usize) else {
            return;
        };
        face.select = select;
        if !select {
            return;
        }

        let corners = self.face_vertices(face_id);
        for (i, &v) in corners.iter().enumerate() {
            self.vertices[v.0 as usize].select = true;
            let next = corners[(i + 1) % corners.len()];
            if let Some(edge_id) = self.find_edge(v, next) {
                self.edges[edge_id.0 as usize].select = true;
            }
        }
    }

    pub fn select_all(&mut self) {
        self.vertices.iter_mut().for_each(|v| v.select = true);
        self.edges.iter_mut().for_each(|e| e.select = true);
        self.faces.iter_mut().for_each(|f| f.select = true);
    }

    pub fn deselect_all(&mut self) {
        self.vertices.iter_mut().for_each(|v| v.select = false);
        self.edges.iter_mut().for_each(|e| e.select = false);
        self.faces.iter_mut().for_each(|f| f.select = false);
    }

    /// Recompute edge and face selection from vertex selection.
    ///
    /// An edge or face is selected exactly when all of its vertices are.
    pub fn flush_selection_from_vertices(&mut self) {
        for i in 0..self.edges.len() {
            let (a, b) = self.edges[i].vertices;
            self.edges[i].select =
                self.vertices[a.0 as usize].select && self.vertices[b.0 as usize].select;
        }
        for i in 0..self.faces.len() {
            let range = self.faces[i].loop_range();
            self.faces[i].select = range
                .into_iter()
                .all(|l| self.vertices[self.loops[l].vertex.0 as usize].select);
        }
    }

    pub fn selected_vertices(&self) -> Vec<VertexId> {
        self.vertices.iter().filter(|v| v.select).map(|v| v.id).collect()
    }

    pub fn selected_edges(&self) -> Vec<EdgeId> {
        self.edges.iter().filter(|e| e.select).map(|e| e.id).collect()
    }

    pub fn selected_faces(&self) -> Vec<FaceId> {
        self.faces.iter().filter(|f| f.select).map(|f| f.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_meshes::*;

    #[test]
    fn test_select_face_flushes_down() {
        let mut mesh = split_quad();
        mesh.select_face(FaceId(0), true);
        assert_eq!(mesh.selected_faces(), vec![FaceId(0)]);
        assert_eq!(
            mesh.selected_vertices(),
            vec![VertexId(0), VertexId(1), VertexId(2)]
        );
        assert_eq!(mesh.selected_edges().len(), 3);
    }

    #[test]
    fn test_deselect_face_keeps_vertices() {
        let mut mesh = split_quad();
        mesh.select_face(FaceId(0), true);
        mesh.select_face(FaceId(0), false);
        assert!(mesh.selected_faces().is_empty());
        assert_eq!(mesh.selected_vertices().len(), 3);
    }

    #[test]
    fn test_select_edge_selects_endpoints() {
        let mut mesh = split_quad();
        let edge = mesh.find_edge(VertexId(1), VertexId(2)).unwrap();
        mesh.select_edge(edge, true);
        assert_eq!(mesh.selected_vertices(), vec![VertexId(1), VertexId(2)]);
        assert!(mesh.selected_faces().is_empty());
    }

    #[test]
    fn test_flush_from_vertices() {
        let mut mesh = split_quad();
        for v in [0, 2, 3] {
            mesh.select_vertex(VertexId(v), true);
        }
        mesh.flush_selection_from_vertices();
        assert_eq!(mesh.selected_faces(), vec![FaceId(1)]);
        assert_eq!(mesh.selected_edges().len(), 3);
    }

    #[test]
    fn test_select_all_and_deselect_all() {
        let mut mesh = split_quad();
        mesh.select_all();
        assert_eq!(mesh.selected_vertices().len(), 4);
        assert_eq!(mesh.selected_edges().len(), 5);
        assert_eq!(mesh.selected_faces().len(), 2);
        mesh.deselect_all();
        assert!(mesh.selected_vertices().is_empty());
        assert!(mesh.selected_faces().is_empty());
    }
}
