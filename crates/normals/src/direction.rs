//! Explicit direction assignment for selected normals.

use glam::Vec3;
use polymesh::{PolyMesh, VertexId};
use tracing::debug;

use crate::error::NormalEditError;
use crate::overrides::NormalOverrides;
use crate::writer::check_len;

fn unit_direction(direction: Vec3) -> Result<Vec3, NormalEditError> {
    direction.try_normalize().ok_or(NormalEditError::ZeroDirection)
}

/// Overrides pointing every listed vertex along `direction`.
///
/// Soft edit: routed through [`crate::merge_overrides`], so every loop of a
/// vertex shares the new normal.
pub fn direction_overrides(
    vertices: &[VertexId],
    direction: Vec3,
) -> Result<NormalOverrides, NormalEditError> {
    let normal = unit_direction(direction)?;
    Ok(vertices.iter().map(|&v| (v, normal)).collect())
}

/// Point every loop of every selected face along `direction`.
///
/// Hard edit: loops of unselected faces keep their base normal even where
/// they share a vertex with a selected face, leaving a seam at the boundary.
pub fn set_face_loop_normals(
    mesh: &PolyMesh,
    base: &[Vec3],
    direction: Vec3,
) -> Result<Vec<Vec3>, NormalEditError> {
    check_len(mesh, base)?;
    let normal = unit_direction(direction)?;

    let mut normals = base.to_vec();
    let mut face_count = 0usize;
    for face in mesh.faces().iter().filter(|f| f.select) {
        normals[face.loop_range()].fill(normal);
        face_count += 1;
    }
    debug!("set_face_loop_normals: {} faces set to {:?}", face_count, normal);
    Ok(normals)
}
