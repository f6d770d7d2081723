//! Hardening: selected faces shade flat with their own face normal.

use glam::Vec3;
use polymesh::PolyMesh;
use tracing::{debug, trace};

use crate::error::NormalEditError;
use crate::writer::check_len;

/// Set every loop of each selected face to that face's normal.
///
/// Degenerate faces (zero normal) keep their base normals.
pub fn harden_selected(mesh: &PolyMesh, base: &[Vec3]) -> Result<Vec<Vec3>, NormalEditError> {
    check_len(mesh, base)?;

    let mut normals = base.to_vec();
    let mut face_count = 0usize;
    for face in mesh.faces().iter().filter(|f| f.select) {
        let normal = mesh.face_normal(face.id);
        if normal == Vec3::ZERO {
            trace!("harden_selected: face {:?} is degenerate", face.id);
            continue;
        }
        normals[face.loop_range()].fill(normal);
        face_count += 1;
    }

    if face_count == 0 {
        debug!("harden_selected: no faces selected");
    } else {
        debug!("harden_selected: hardened {} faces", face_count);
    }
    Ok(normals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_meshes::*;
    use polymesh::FaceId;

    #[test]
    fn test_harden_sets_face_normal() {
        let mut mesh = folded_quad();
        mesh.set_loop_normals(vec![Vec3::X; mesh.loop_count()]).unwrap();
        mesh.select_face(FaceId(1), true);

        let base = mesh.loop_normals().to_vec();
        let normals = harden_selected(&mesh, &base).unwrap();
        for l in mesh.face_loops(FaceId(1)) {
            assert_eq!(normals[l], mesh.face_normal(FaceId(1)));
        }
        for l in mesh.face_loops(FaceId(0)) {
            assert_eq!(normals[l], Vec3::X);
        }
    }

    #[test]
    fn test_harden_without_selection_is_noop() {
        let mesh = folded_quad();
        let base = mesh.loop_normals().to_vec();
        assert_eq!(harden_selected(&mesh, &base).unwrap(), base);
    }
}
