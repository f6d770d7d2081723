//! Derivation of default split normals from face geometry.

use glam::Vec3;

use super::PolyMesh;

/// View a loop-normal buffer as raw bytes (e.g. for upload or exact comparison)
pub fn normals_as_bytes(normals: &[Vec3]) -> &[u8] {
    bytemuck::cast_slice(normals)
}

impl PolyMesh {
    /// Compute default split normals for every loop.
    ///
    /// Loops of flat faces get the face normal. Loops of smooth faces get the
    /// normalized sum of the normals of smooth faces around their vertex that
    /// lie within `auto_smooth_angle` (radians) of the owning face's normal.
    /// Stored custom normals are ignored.
    pub fn compute_split_normals(&self, auto_smooth_angle: f32) -> Vec<Vec3> {
        let face_normals = self.face_normals();
        let cos_limit = auto_smooth_angle.cos();

        self.loops
            .iter()
            .map(|l| {
                let own = face_normals[l.face.0 as usize];
                if !self.faces[l.face.0 as usize].use_smooth {
                    return own;
                }

                let mut sum = Vec3::ZERO;
                for &face_id in self.vertex_faces(l.vertex) {
                    let face = &self.faces[face_id.0 as usize];
                    if !face.use_smooth {
                        continue;
                    }
                    let normal = face_normals[face_id.0 as usize];
                    if face_id == l.face || own.dot(normal) >= cos_limit {
                        sum += normal;
                    }
                }

                let smoothed = sum.normalize_or_zero();
                if smoothed == Vec3::ZERO { own } else { smoothed }
            })
            .collect()
    }
}
