//! Selection-masked averaging of face normals into vertex normals.

use glam::Vec3;
use polymesh::{FaceMask, PolyMesh, VertexId};
use splitnorm_ipc::{MeshSelectionMode, SelectionContext};
use tracing::{debug, trace};

use crate::overrides::NormalOverrides;

/// How linked face normals are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weighting {
    /// Plain average of face normals
    #[default]
    Uniform,
    /// Face normals scaled by face area before summing
    Area,
}

/// Vertices to aggregate and the mask that picks their faces.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationTarget {
    pub vertices: Vec<VertexId>,
    pub mask: FaceMask,
    pub ignore_selection: bool,
}

impl AggregationTarget {
    /// Target the selected vertices, or every vertex for [`FaceMask::All`].
    pub fn new(mesh: &PolyMesh, mask: FaceMask, ignore_selection: bool) -> Self {
        let vertices = match mask {
            FaceMask::All => mesh.vertices().iter().map(|v| v.id).collect(),
            _ => mesh.selected_vertices(),
        };
        Self {
            vertices,
            mask,
            ignore_selection,
        }
    }

    /// Derive the target from the host's selection context.
    ///
    /// Object view works on every vertex with all of its faces. Edit view works
    /// on the selected vertices with a mask following the selection mode, or
    /// selected faces when `always_use_face_mask` is set.
    pub fn resolve(mesh: &PolyMesh, ctx: &SelectionContext, always_use_face_mask: bool) -> Self {
        if !ctx.uses_selection() {
            return Self::new(mesh, FaceMask::All, true);
        }

        let mask = if always_use_face_mask {
            FaceMask::Face
        } else {
            match ctx.selection_mode {
                MeshSelectionMode::Face => FaceMask::Face,
                MeshSelectionMode::Edge => FaceMask::Edge,
                MeshSelectionMode::Vertex => FaceMask::Neighborhood,
            }
        };
        Self::new(mesh, mask, false)
    }
}

/// Average linked face normals at each target vertex.
///
/// Vertices whose mask yields no faces, or whose faces cancel out, get no
/// override.
pub fn smoothed_vertex_normals(
    mesh: &PolyMesh,
    target: &AggregationTarget,
    weighting: Weighting,
) -> NormalOverrides {
    let face_normals = mesh.face_normals();
    let face_areas = match weighting {
        Weighting::Uniform => None,
        Weighting::Area => Some(mesh.face_areas()),
    };

    let mut overrides = NormalOverrides::new();
    for &vertex_id in &target.vertices {
        let faces = mesh.linked_faces(vertex_id, target.mask, target.ignore_selection);
        if faces.is_empty() {
            trace!("vertex {:?}: no faces under {:?} mask", vertex_id, target.mask);
            continue;
        }

        let sum = faces.iter().fold(Vec3::ZERO, |acc, f| {
            let idx = f.0 as usize;
            let weight = face_areas.as_ref().map_or(1.0, |areas| areas[idx]);
            acc + face_normals[idx] * weight
        });
        let average = match weighting {
            Weighting::Uniform => sum / faces.len() as f32,
            Weighting::Area => sum,
        };

        match average.try_normalize() {
            Some(normal) => overrides.insert(vertex_id, normal),
            None => trace!("vertex {:?}: linked face normals cancel out", vertex_id),
        }
    }

    debug!(
        "smoothed_vertex_normals: {} of {} vertices overridden ({:?}, {:?})",
        overrides.len(),
        target.vertices.len(),
        target.mask,
        weighting
    );
    overrides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_meshes::*;
    use polymesh::FaceId;

    #[test]
    fn test_target_new_uses_selected_vertices() {
        let mut mesh = split_quad();
        mesh.select_vertex(VertexId(2), true);
        let target = AggregationTarget::new(&mesh, FaceMask::Face, false);
        assert_eq!(target.vertices, vec![VertexId(2)]);
        let all = AggregationTarget::new(&mesh, FaceMask::All, true);
        assert_eq!(all.vertices.len(), 4);
    }

    #[test]
    fn test_resolve_object_view_forces_all() {
        let mesh = split_quad();
        let target = AggregationTarget::resolve(&mesh, &SelectionContext::object(), false);
        assert_eq!(target.mask, FaceMask::All);
        assert!(target.ignore_selection);
        assert_eq!(target.vertices.len(), mesh.vertex_count());
    }

    #[test]
    fn test_resolve_edit_view_masks() {
        let mesh = split_quad();
        let cases = [
            (MeshSelectionMode::Face, FaceMask::Face),
            (MeshSelectionMode::Edge, FaceMask::Edge),
            (MeshSelectionMode::Vertex, FaceMask::Neighborhood),
        ];
        for (mode, mask) in cases {
            let target = AggregationTarget::resolve(&mesh, &SelectionContext::edit(mode), false);
            assert_eq!(target.mask, mask);
            assert!(!target.ignore_selection);
        }
        let forced = AggregationTarget::resolve(
            &mesh,
            &SelectionContext::edit(MeshSelectionMode::Vertex),
            true,
        );
        assert_eq!(forced.mask, FaceMask::Face);
    }

    #[test]
    fn test_uniform_average_at_fold() {
        let mut mesh = folded_quad();
        mesh.select_all();
        let target = AggregationTarget::new(&mesh, FaceMask::Face, false);
        let overrides = smoothed_vertex_normals(&mesh, &target, Weighting::Uniform);

        let expected = (mesh.face_normal(FaceId(0)) + mesh.face_normal(FaceId(1))).normalize();
        assert_eq!(overrides.len(), 4);
        assert!((overrides.get(VertexId(0)).unwrap() - expected).length() < 1e-6);
        assert!((overrides.get(VertexId(2)).unwrap() - expected).length() < 1e-6);
        assert!((overrides.get(VertexId(1)).unwrap() - mesh.face_normal(FaceId(0))).length() < 1e-6);
    }

    #[test]
    fn test_vertex_without_faces_is_skipped() {
        let mut mesh = split_quad();
        // Vertex 1 is selected but its only face is not
        mesh.select_face(FaceId(1), true);
        mesh.select_vertex(VertexId(1), true);
        let target = AggregationTarget::new(&mesh, FaceMask::Face, false);
        let overrides = smoothed_vertex_normals(&mesh, &target, Weighting::Uniform);
        assert!(!overrides.contains(VertexId(1)));
        assert_eq!(overrides.len(), 3);
    }

    #[test]
    fn test_area_weighting_favors_larger_face() {
        // Large face in XY, small face folded up along the shared edge 0-1
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.5, 4.0, 0.0),
            Vec3::new(0.5, -0.1, 0.1),
        ];
        let mut mesh = PolyMesh::from_triangles(&positions, &[0, 1, 2, 1, 0, 3]).unwrap();
        mesh.select_all();
        let target = AggregationTarget::new(&mesh, FaceMask::Face, false);
        let uniform = smoothed_vertex_normals(&mesh, &target, Weighting::Uniform);
        let weighted = smoothed_vertex_normals(&mesh, &target, Weighting::Area);

        let large = mesh.face_normal(FaceId(0));
        let u = uniform.get(VertexId(0)).unwrap();
        let w = weighted.get(VertexId(0)).unwrap();
        assert!(w.dot(large) > u.dot(large));
        assert!((w.length() - 1.0).abs() < 1e-6);
    }
}
