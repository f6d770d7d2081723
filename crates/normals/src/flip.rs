//! Custom normal bookkeeping for polygon winding flips.
//!
//! [`PolyMesh::flip_face_winding`] keeps each face's first loop and reverses
//! the rest. Normals captured before the flip are remapped the same way and
//! negated, so every corner keeps its direction relative to the new winding.
//!
//! ```text
//!   loop slot:       l0    l1    l2    l3
//!   before flip:     n0    n1    n2    n3
//!   after transform: -n0   -n3   -n2   -n1
//! ```

use glam::Vec3;
use polymesh::PolyMesh;
use tracing::debug;

use crate::error::NormalEditError;
use crate::writer::check_len;

/// Transform normals captured before a winding flip of the selected faces.
///
/// `normals` must predate the flip and the mesh must already be flipped;
/// both refer to the same loop ranges. Loops of unselected faces are copied
/// unchanged.
pub fn flip_loop_normals(mesh: &PolyMesh, normals: &[Vec3]) -> Result<Vec<Vec3>, NormalEditError> {
    check_len(mesh, normals)?;

    let mut flipped = normals.to_vec();
    let mut face_count = 0usize;
    for face in mesh.faces().iter().filter(|f| f.select) {
        let corners = &mut flipped[face.loop_range()];
        for n in corners.iter_mut() {
            *n = -*n;
        }
        corners[1..].reverse();
        face_count += 1;
    }

    debug!("flip_loop_normals: remapped {} faces", face_count);
    Ok(flipped)
}

/// Flip winding of the selected faces and return their remapped normals.
///
/// The mesh topology is modified immediately; the returned array must be
/// committed for the stored normals to line up with the new winding again.
pub fn flip_selected(mesh: &mut PolyMesh, base: &[Vec3]) -> Result<Vec<Vec3>, NormalEditError> {
    check_len(mesh, base)?;
    let flipped_faces = mesh.flip_selected_winding();
    if flipped_faces.is_empty() {
        debug!("flip_selected: no faces selected");
        return Ok(base.to_vec());
    }
    flip_loop_normals(mesh, base)
}
