//! Validation methods for PolyMesh.
//!
//! Checks the invariants the normal editing code relies on:
//! - Face loop ranges tile the loop array in order
//! - Loops point back at their face and at an existing vertex
//! - Cached adjacency agrees with face corners
//! - One custom normal per loop

use super::construction::edge_key;
use super::types::{LoopId, PolyMeshError};
use super::PolyMesh;

impl PolyMesh {
    /// Validate the mesh topology.
    pub fn validate(&self) -> Result<(), PolyMeshError> {
        if self.loop_normals.len() != self.loops.len() {
            return Err(PolyMeshError::NormalCountMismatch {
                expected: self.loops.len(),
                actual: self.loop_normals.len(),
            });
        }

        // Face ranges must be contiguous and cover every loop exactly once
        let mut next_start = 0usize;
        for face in &self.faces {
            if face.loop_start as usize != next_start {
                return Err(PolyMeshError::InvalidTopology(format!(
                    "Face {} starts at loop {}, expected {}",
                    face.id.0, face.loop_start, next_start
                )));
            }
            if face.loop_total < 3 {
                return Err(PolyMeshError::TooFewCorners {
                    face: face.id.0,
                    corners: face.loop_total as usize,
                });
            }
            next_start += face.loop_total as usize;
        }
        if next_start != self.loops.len() {
            return Err(PolyMeshError::InvalidTopology(format!(
                "Faces cover {} loops, mesh has {}",
                next_start,
                self.loops.len()
            )));
        }

        for face in &self.faces {
            let range = face.loop_range();
            let count = range.len();
            for (i, l) in range.clone().enumerate() {
                let corner = &self.loops[l];
                if corner.id != LoopId(l as u32) || corner.face != face.id {
                    return Err(PolyMeshError::InvalidTopology(format!(
                        "Loop {} does not belong to face {}",
                        l, face.id.0
                    )));
                }
                if corner.vertex.0 as usize >= self.vertices.len() {
                    return Err(PolyMeshError::VertexOutOfRange {
                        face: face.id.0,
                        vertex: corner.vertex.0,
                        vertex_count: self.vertices.len(),
                    });
                }
                if !self.vertex_faces(corner.vertex).contains(&face.id) {
                    return Err(PolyMeshError::InvalidTopology(format!(
                        "Vertex {} is missing face {} in its adjacency",
                        corner.vertex.0, face.id.0
                    )));
                }

                let next = self.loops[range.start + (i + 1) % count].vertex;
                let edge_id = self
                    .edge_map
                    .get(&edge_key(corner.vertex, next))
                    .copied()
                    .ok_or_else(|| {
                        PolyMeshError::InvalidTopology(format!(
                            "Face {} has no edge between vertices {} and {}",
                            face.id.0, corner.vertex.0, next.0
                        ))
                    })?;
                if !self.edge_faces(edge_id).contains(&face.id) {
                    return Err(PolyMeshError::InvalidTopology(format!(
                        "Edge {} is missing face {} in its adjacency",
                        edge_id.0, face.id.0
                    )));
                }
            }
        }

        Ok(())
    }

    /// Loops whose custom normal is not unit length within `tolerance`
    pub fn non_unit_normals(&self, tolerance: f32) -> Vec<LoopId> {
        self.loop_normals
            .iter()
            .enumerate()
            .filter(|(_, n)| (n.length() - 1.0).abs() > tolerance)
            .map(|(i, _)| LoopId(i as u32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_meshes::*;
    use glam::Vec3;

    #[test]
    fn test_valid_mesh() {
        assert!(split_quad().validate().is_ok());
        assert!(folded_quad().validate().is_ok());
    }

    #[test]
    fn test_corrupt_loop_range() {
        let mut mesh = split_quad();
        mesh.faces[1].loop_start = 2;
        assert!(matches!(
            mesh.validate(),
            Err(PolyMeshError::InvalidTopology(_))
        ));
    }

    #[test]
    fn test_missing_normals() {
        let mut mesh = split_quad();
        mesh.loop_normals.pop();
        assert_eq!(
            mesh.validate(),
            Err(PolyMeshError::NormalCountMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_non_unit_normals() {
        let mut mesh = split_quad();
        assert!(mesh.non_unit_normals(1e-6).is_empty());
        let mut normals = mesh.loop_normals().to_vec();
        normals[4] = Vec3::new(0.0, 0.0, 2.0);
        mesh.set_loop_normals(normals).unwrap();
        assert_eq!(mesh.non_unit_normals(1e-6), vec![LoopId(4)]);
    }
}
