//! Selection-masked face neighborhoods of a vertex.

use super::types::{FaceId, VertexId};
use super::PolyMesh;

/// Which linked faces contribute to a vertex's aggregate normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceMask {
    /// Selected faces at the vertex
    #[default]
    Face,
    /// Faces bordering selected edges at the vertex
    Edge,
    /// Every face at the vertex
    Neighborhood,
    /// Every face at the vertex; used for whole-mesh edits
    All,
}

impl PolyMesh {
    /// Faces used to compute the aggregate normal of a vertex.
    ///
    /// An empty result means the vertex gets no override.
    pub fn linked_faces(
        &self,
        vertex_id: VertexId,
        mask: FaceMask,
        ignore_selection: bool,
    ) -> Vec<FaceId> {
        match mask {
            FaceMask::Face => self
                .vertex_faces(vertex_id)
                .iter()
                .copied()
                .filter(|&f| ignore_selection || self.faces[f.0 as usize].select)
                .collect(),
            FaceMask::Edge => {
                let mut faces = Vec::new();
                for &edge_id in self.vertex_edges(vertex_id) {
                    if !ignore_selection && !self.edges[edge_id.0 as usize].select {
                        continue;
                    }
                    for &face_id in self.edge_faces(edge_id) {
                        if !faces.contains(&face_id) {
                            faces.push(face_id);
                        }
                    }
                }
                faces
            }
            FaceMask::Neighborhood | FaceMask::All => self.vertex_faces(vertex_id).to_vec(),
        }
    }
}
