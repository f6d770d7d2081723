//! Construction methods for PolyMesh.

use glam::Vec3;
use std::collections::HashMap;

use super::types::{Edge, EdgeId, Face, FaceId, Loop, LoopId, PolyMeshError, Vertex, VertexId};
use super::PolyMesh;

/// Key for the undirected edge between two vertices
pub(crate) fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl PolyMesh {
    /// Build a mesh from vertex positions and polygon corner lists.
    ///
    /// Each polygon lists its vertex indices in winding order. Polygons need at
    /// least three corners and may not repeat a vertex. Every polygon starts
    /// flat shaded, so the initial loop normals are the face normals.
    pub fn from_polygons<P: AsRef<[u32]>>(
        positions: &[Vec3],
        polygons: &[P],
    ) -> Result<Self, PolyMeshError> {
        let vertices: Vec<Vertex> = positions
            .iter()
            .enumerate()
            .map(|(i, &position)| Vertex {
                id: VertexId(i as u32),
                position,
                select: false,
            })
            .collect();

        let mut edges: Vec<Edge> = Vec::new();
        let mut faces: Vec<Face> = Vec::with_capacity(polygons.len());
        let mut loops: Vec<Loop> = Vec::new();
        let mut edge_map: HashMap<(VertexId, VertexId), EdgeId> = HashMap::new();
        let mut vertex_faces: Vec<Vec<FaceId>> = vec![Vec::new(); vertices.len()];
        let mut vertex_edges: Vec<Vec<EdgeId>> = vec![Vec::new(); vertices.len()];
        let mut edge_faces: Vec<Vec<FaceId>> = Vec::new();

        for (face_idx, polygon) in polygons.iter().enumerate() {
            let corners = polygon.as_ref();
            let face_id = FaceId(face_idx as u32);

            if corners.len() < 3 {
                return Err(PolyMeshError::TooFewCorners {
                    face: face_id.0,
                    corners: corners.len(),
                });
            }

            for (i, &v) in corners.iter().enumerate() {
                if v as usize >= vertices.len() {
                    return Err(PolyMeshError::VertexOutOfRange {
                        face: face_id.0,
                        vertex: v,
                        vertex_count: vertices.len(),
                    });
                }
                if corners[..i].contains(&v) {
                    return Err(PolyMeshError::RepeatedVertex {
                        face: face_id.0,
                        vertex: v,
                    });
                }
            }

            faces.push(Face {
                id: face_id,
                loop_start: loops.len() as u32,
                loop_total: corners.len() as u32,
                select: false,
                use_smooth: false,
            });

            for (i, &v) in corners.iter().enumerate() {
                let vertex_id = VertexId(v);
                loops.push(Loop {
                    id: LoopId(loops.len() as u32),
                    vertex: vertex_id,
                    face: face_id,
                });
                vertex_faces[v as usize].push(face_id);

                // Edge from this corner to the next one around the face
                let next = VertexId(corners[(i + 1) % corners.len()]);
                let key = edge_key(vertex_id, next);
                let edge_id = *edge_map.entry(key).or_insert_with(|| {
                    let id = EdgeId(edges.len() as u32);
                    edges.push(Edge {
                        id,
                        vertices: key,
                        select: false,
                    });
                    edge_faces.push(Vec::new());
                    vertex_edges[key.0.0 as usize].push(id);
                    vertex_edges[key.1.0 as usize].push(id);
                    id
                });
                let linked = &mut edge_faces[edge_id.0 as usize];
                if !linked.contains(&face_id) {
                    linked.push(face_id);
                }
            }
        }

        let mut mesh = Self {
            vertices,
            edges,
            faces,
            loops,
            loop_normals: Vec::new(),
            edge_map,
            vertex_faces,
            vertex_edges,
            edge_faces,
        };

        let face_normals = mesh.face_normals();
        mesh.loop_normals = mesh
            .loops
            .iter()
            .map(|l| face_normals[l.face.0 as usize])
            .collect();

        tracing::debug!(
            "from_polygons: {} vertices, {} edges, {} faces, {} loops",
            mesh.vertices.len(),
            mesh.edges.len(),
            mesh.faces.len(),
            mesh.loops.len()
        );

        Ok(mesh)
    }

    /// Build a mesh from a flat triangle index list.
    pub fn from_triangles(positions: &[Vec3], indices: &[u32]) -> Result<Self, PolyMeshError> {
        if indices.len() % 3 != 0 {
            return Err(PolyMeshError::PartialTriangle(indices.len()));
        }
        let triangles: Vec<&[u32]> = indices.chunks(3).collect();
        Self::from_polygons(positions, &triangles)
    }
}
