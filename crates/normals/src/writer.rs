//! Merging vertex overrides into the full per-loop normal array.

use glam::Vec3;
use polymesh::{PolyMesh, PolyMeshError};
use splitnorm_config::SplitNormalSource;

use crate::error::NormalEditError;
use crate::overrides::NormalOverrides;

/// Loop normals that overrides are merged on top of.
///
/// `Existing` returns the stored custom normals. `Recompute` derives fresh
/// split normals from face geometry, discarding earlier custom edits.
pub fn base_normals(mesh: &PolyMesh, source: SplitNormalSource, auto_smooth_angle: f32) -> Vec<Vec3> {
    match source {
        SplitNormalSource::Existing => mesh.loop_normals().to_vec(),
        SplitNormalSource::Recompute => mesh.compute_split_normals(auto_smooth_angle),
    }
}

pub(crate) fn check_len(mesh: &PolyMesh, normals: &[Vec3]) -> Result<(), NormalEditError> {
    if normals.len() != mesh.loop_count() {
        return Err(PolyMeshError::NormalCountMismatch {
            expected: mesh.loop_count(),
            actual: normals.len(),
        }
        .into());
    }
    Ok(())
}

/// Apply vertex-wide overrides to every loop of the overridden vertices.
///
/// Loops of vertices without an override keep their base normal bit for bit.
pub fn merge_overrides(
    mesh: &PolyMesh,
    base: &[Vec3],
    overrides: &NormalOverrides,
) -> Result<Vec<Vec3>, NormalEditError> {
    check_len(mesh, base)?;

    let lookup = overrides.to_dense(mesh.vertex_count());
    let merged = mesh
        .loops()
        .iter()
        .zip(base)
        .map(|(l, &normal)| lookup[l.vertex.0 as usize].unwrap_or(normal))
        .collect();

    tracing::debug!(
        "merge_overrides: {} vertex overrides over {} loops",
        overrides.len(),
        base.len()
    );
    Ok(merged)
}
