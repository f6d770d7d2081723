//! Modification methods for PolyMesh.

use glam::Vec3;
use tracing::debug;

use super::types::{FaceId, PolyMeshError, VertexId};
use super::PolyMesh;

impl PolyMesh {
    /// Set whether a face uses smooth shading for derived split normals
    pub fn set_face_smooth(&mut self, face_id: FaceId, use_smooth: bool) {
        if let Some(f) = self.faces.get_mut(face_id.0 as usize) {
            f.use_smooth = use_smooth;
        }
    }

    /// Replace the custom normals of every loop.
    ///
    /// The buffer must have exactly one normal per loop.
    pub fn set_loop_normals(&mut self, normals: Vec<Vec3>) -> Result<(), PolyMeshError> {
        if normals.len() != self.loops.len() {
            return Err(PolyMeshError::NormalCountMismatch {
                expected: self.loops.len(),
                actual: normals.len(),
            });
        }
        self.loop_normals = normals;
        Ok(())
    }

    /// Reverse the winding of one face.
    ///
    /// The first loop keeps its vertex; the remaining corners are traversed
    /// in the opposite direction. Only vertex references move: the custom
    /// normals stay in their loop slots, so callers that keep normals attached
    /// to corners must reorder them the same way.
    ///
    /// ```text
    ///   loops:   l0  l1  l2  l3
    ///   before:  v0  v1  v2  v3
    ///   after:   v0  v3  v2  v1
    /// ```
    pub fn flip_face_winding(&mut self, face_id: FaceId) {
        let range = self.face_loops(face_id);
        if range.len() < 3 {
            return;
        }
        let mut corners: Vec<VertexId> = self.loops[range.clone()].iter().map(|l| l.vertex).collect();
        corners[1..].reverse();
        for (l, v) in self.loops[range].iter_mut().zip(corners) {
            l.vertex = v;
        }
    }

    /// Reverse the winding of every selected face.
    ///
    /// Returns the flipped faces. Adjacency is unchanged.
    pub fn flip_selected_winding(&mut self) -> Vec<FaceId> {
        let flipped = self.selected_faces();
        for &face_id in &flipped {
            self.flip_face_winding(face_id);
        }
        debug!("flip_selected_winding: reversed {} faces", flipped.len());
        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_meshes::*;

    #[test]
    fn test_flip_face_winding_keeps_first_corner() {
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let mut mesh = PolyMesh::from_polygons(&positions, &[[0u32, 1, 2, 3]]).unwrap();
        mesh.flip_face_winding(FaceId(0));
        assert_eq!(
            mesh.face_vertices(FaceId(0)),
            vec![VertexId(0), VertexId(3), VertexId(2), VertexId(1)]
        );
        assert!((mesh.face_normal(FaceId(0)) + Vec3::Z).length() < 1e-6);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_flip_selected_winding_only_selected() {
        let mut mesh = split_quad();
        mesh.select_face(FaceId(1), true);
        let flipped = mesh.flip_selected_winding();
        assert_eq!(flipped, vec![FaceId(1)]);
        assert_eq!(
            mesh.face_vertices(FaceId(0)),
            vec![VertexId(0), VertexId(1), VertexId(2)]
        );
        assert_eq!(
            mesh.face_vertices(FaceId(1)),
            vec![VertexId(0), VertexId(3), VertexId(2)]
        );
    }

    #[test]
    fn test_flip_twice_restores_winding() {
        let mut mesh = folded_quad();
        mesh.select_all();
        let before: Vec<_> = mesh.faces().iter().map(|f| mesh.face_vertices(f.id)).collect();
        mesh.flip_selected_winding();
        mesh.flip_selected_winding();
        let after: Vec<_> = mesh.faces().iter().map(|f| mesh.face_vertices(f.id)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_loop_normals_checks_length() {
        let mut mesh = split_quad();
        let err = mesh.set_loop_normals(vec![Vec3::Z; 5]).unwrap_err();
        assert_eq!(
            err,
            PolyMeshError::NormalCountMismatch {
                expected: 6,
                actual: 5
            }
        );
        assert!(mesh.set_loop_normals(vec![Vec3::X; 6]).is_ok());
        assert_eq!(mesh.loop_normals(), &[Vec3::X; 6]);
    }
}
