//! Conversion between PolyMesh and Bevy render meshes.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::Mesh;
use glam::Vec3;
use std::collections::HashMap;

use super::types::PolyMeshError;
use super::PolyMesh;

impl PolyMesh {
    /// Build a mesh from a Bevy triangle-list mesh.
    ///
    /// Render meshes duplicate vertices wherever an attribute is split, so
    /// positionally identical vertices are welded first. The source normals
    /// survive as custom loop normals, one per triangle corner.
    pub fn from_bevy_mesh(mesh: &Mesh) -> Result<Self, PolyMeshError> {
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|attr| attr.as_float3())
            .ok_or(PolyMeshError::NoPositions)?;

        let normals: Option<Vec<[f32; 3]>> = mesh
            .attribute(Mesh::ATTRIBUTE_NORMAL)
            .and_then(|attr| attr.as_float3())
            .map(|n| n.to_vec());

        let indices: Vec<u32> = match mesh.indices() {
            Some(Indices::U16(idx)) => idx.iter().map(|&i| i as u32).collect(),
            Some(Indices::U32(idx)) => idx.to_vec(),
            None => return Err(PolyMeshError::NoIndices),
        };

        if indices.len() % 3 != 0 {
            return Err(PolyMeshError::PartialTriangle(indices.len()));
        }

        // === Vertex Welding ===
        let quantize = |p: &[f32; 3]| -> [i64; 3] {
            [
                (p[0] * 1_000_000.0) as i64,
                (p[1] * 1_000_000.0) as i64,
                (p[2] * 1_000_000.0) as i64,
            ]
        };

        let mut position_to_welded: HashMap<[i64; 3], u32> = HashMap::new();
        let mut welded_positions: Vec<Vec3> = Vec::new();
        let mut welded_map: Vec<u32> = Vec::with_capacity(positions.len());

        for pos in positions {
            let next = welded_positions.len() as u32;
            let welded = *position_to_welded.entry(quantize(pos)).or_insert(next);
            if welded == next {
                welded_positions.push(Vec3::from_array(*pos));
            }
            welded_map.push(welded);
        }

        if welded_positions.len() < positions.len() {
            tracing::debug!(
                "from_bevy_mesh: welded {} duplicate vertices ({} unique of {} total)",
                positions.len() - welded_positions.len(),
                welded_positions.len(),
                positions.len()
            );
        }

        // Drop triangles that collapse after welding, remembering the source
        // corners of the survivors for their normals
        let mut triangles: Vec<[u32; 3]> = Vec::new();
        let mut source_corners: Vec<u32> = Vec::new();
        for tri in indices.chunks(3) {
            let welded = [
                welded_map[tri[0] as usize],
                welded_map[tri[1] as usize],
                welded_map[tri[2] as usize],
            ];
            if welded[0] == welded[1] || welded[1] == welded[2] || welded[0] == welded[2] {
                continue;
            }
            triangles.push(welded);
            source_corners.extend_from_slice(tri);
        }

        let mut result = Self::from_polygons(&welded_positions, &triangles)?;

        if let Some(normals) = normals {
            let loop_normals = source_corners
                .iter()
                .zip(result.loop_normals.iter())
                .map(|(&corner, &face_normal)| {
                    normals
                        .get(corner as usize)
                        .map(|n| Vec3::from_array(*n).normalize_or_zero())
                        .filter(|n| *n != Vec3::ZERO)
                        .unwrap_or(face_normal)
                })
                .collect();
            result.set_loop_normals(loop_normals)?;
        }

        Ok(result)
    }

    /// Convert to a Bevy mesh.
    ///
    /// Emits one render vertex per loop so every corner keeps its own custom
    /// normal. Faces are fan triangulated.
    pub fn to_bevy_mesh(&self) -> Mesh {
        let mut positions: Vec<[f32; 3]> = Vec::with_capacity(self.loops.len());
        let mut normals: Vec<[f32; 3]> = Vec::with_capacity(self.loops.len());
        let mut indices: Vec<u32> = Vec::new();

        for face in &self.faces {
            let range = face.loop_range();
            let base_idx = range.start as u32;
            for l in range.clone() {
                let v = &self.vertices[self.loops[l].vertex.0 as usize];
                positions.push(v.position.to_array());
                normals.push(self.loop_normals[l].to_array());
            }

            // Fan triangulation
            for i in 1..(range.len() as u32 - 1) {
                indices.push(base_idx);
                indices.push(base_idx + i);
                indices.push(base_idx + i + 1);
            }
        }

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FaceId;

    fn create_test_quad_mesh() -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        // Two triangles with duplicated diagonal vertices, as a render mesh has
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
        );
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_NORMAL,
            vec![
                [0.0, 0.0, 1.0],
                [0.0, 0.0, 1.0],
                [0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
        );
        mesh.insert_indices(Indices::U32(vec![0, 1, 2, 3, 4, 5]));
        mesh
    }

    #[test]
    fn test_from_bevy_mesh_welds_vertices() {
        let mesh = PolyMesh::from_bevy_mesh(&create_test_quad_mesh()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.edge_count(), 5);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_from_bevy_mesh_keeps_corner_normals() {
        let mesh = PolyMesh::from_bevy_mesh(&create_test_quad_mesh()).unwrap();
        for l in mesh.face_loops(FaceId(1)) {
            assert_eq!(mesh.loop_normals()[l], Vec3::Y);
        }
    }

    #[test]
    fn test_to_bevy_mesh_emits_loop_vertices() {
        let mesh = PolyMesh::from_bevy_mesh(&create_test_quad_mesh()).unwrap();
        let render = mesh.to_bevy_mesh();
        let normals = render
            .attribute(Mesh::ATTRIBUTE_NORMAL)
            .and_then(|attr| attr.as_float3())
            .unwrap();
        assert_eq!(normals.len(), mesh.loop_count());
        assert_eq!(normals[3], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_missing_indices() {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0f32, 0.0, 0.0]]);
        let err = PolyMesh::from_bevy_mesh(&mesh).unwrap_err();
        assert_eq!(err, PolyMeshError::NoIndices);
    }
}
