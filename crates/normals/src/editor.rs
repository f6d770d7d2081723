//! Normal editing operations driven by host requests.
//!
//! Each operation computes a replacement loop-normal array from the mesh, its
//! selection flags, and the selection context. Nothing persists between
//! calls. `apply` additionally commits the result into the mesh.

use glam::Vec3;
use polymesh::{FaceMask, PolyMesh};
use splitnorm_config::{HardSeamPolicy, NormalEditConfig};
use splitnorm_ipc::{NormalEditCommand, NormalEditRequest, SelectionContext};
use tracing::{debug, warn};

use crate::aggregate::{smoothed_vertex_normals, AggregationTarget, Weighting};
use crate::direction::{direction_overrides, set_face_loop_normals};
use crate::error::NormalEditError;
use crate::flip;
use crate::harden::harden_selected;
use crate::writer::{base_normals, merge_overrides};

/// Executes normal edits with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct NormalEditor {
    config: NormalEditConfig,
}

impl NormalEditor {
    pub fn new(config: NormalEditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalEditConfig {
        &self.config
    }

    /// Loop normals that untouched loops keep
    pub fn base_normals(&self, mesh: &PolyMesh) -> Vec<Vec3> {
        base_normals(
            mesh,
            self.config.split_source,
            self.config.auto_smooth_angle(),
        )
    }

    fn aggregate(
        &self,
        mesh: &PolyMesh,
        target: &AggregationTarget,
        weighting: Weighting,
    ) -> Result<Vec<Vec3>, NormalEditError> {
        let overrides = smoothed_vertex_normals(mesh, target, weighting);
        merge_overrides(mesh, &self.base_normals(mesh), &overrides)
    }

    /// Average face normals around the selected vertices (every vertex for
    /// [`FaceMask::All`]).
    pub fn smooth(
        &self,
        mesh: &PolyMesh,
        mask: FaceMask,
        ignore_selection: bool,
    ) -> Result<Vec<Vec3>, NormalEditError> {
        let target = AggregationTarget::new(mesh, mask, ignore_selection);
        self.aggregate(mesh, &target, Weighting::Uniform)
    }

    /// Area-weighted variant of [`Self::smooth`].
    pub fn weighted_smooth(&self, mesh: &PolyMesh, mask: FaceMask) -> Result<Vec<Vec3>, NormalEditError> {
        let target = AggregationTarget::new(mesh, mask, mask == FaceMask::All);
        self.aggregate(mesh, &target, Weighting::Area)
    }

    /// Soften in the given selection context.
    pub fn soften(
        &self,
        mesh: &PolyMesh,
        ctx: &SelectionContext,
        always_use_face_mask: bool,
        weighting: Weighting,
    ) -> Result<Vec<Vec3>, NormalEditError> {
        let face_only = always_use_face_mask || self.config.always_use_face_mask;
        let target = AggregationTarget::resolve(mesh, ctx, face_only);
        self.aggregate(mesh, &target, weighting)
    }

    /// Set loops of selected faces to their face normal.
    pub fn harden(&self, mesh: &PolyMesh) -> Result<Vec<Vec3>, NormalEditError> {
        harden_selected(mesh, &self.base_normals(mesh))
    }

    /// Reverse winding of the selected faces and remap their normals.
    ///
    /// The winding change takes effect immediately; commit the returned array
    /// to keep the stored normals consistent.
    pub fn flip_selected(&self, mesh: &mut PolyMesh) -> Result<Vec<Vec3>, NormalEditError> {
        let base = self.base_normals(mesh);
        flip::flip_selected(mesh, &base)
    }

    /// Point selected normals along `direction`.
    ///
    /// With `hard` set and face selection, loops of selected faces are written
    /// directly, leaving seams. Otherwise selected vertices are overridden.
    /// Object view overrides every vertex.
    pub fn set_direction(
        &self,
        mesh: &PolyMesh,
        ctx: &SelectionContext,
        direction: Vec3,
        hard: bool,
    ) -> Result<Vec<Vec3>, NormalEditError> {
        let base = self.base_normals(mesh);

        if hard {
            if ctx.is_face_mode() {
                return set_face_loop_normals(mesh, &base, direction);
            }
            match self.config.hard_seam_policy {
                HardSeamPolicy::Reject => {
                    return Err(NormalEditError::PreconditionViolation {
                        view: ctx.view,
                        selection_mode: ctx.selection_mode,
                    });
                }
                HardSeamPolicy::Fallback => warn!(
                    "set_direction: hard normals need face selection ({:?}, {:?}), using per-vertex normals",
                    ctx.view, ctx.selection_mode
                ),
            }
        }

        let vertices = if ctx.uses_selection() {
            mesh.selected_vertices()
        } else {
            mesh.vertices().iter().map(|v| v.id).collect()
        };
        let overrides = direction_overrides(&vertices, direction)?;
        merge_overrides(mesh, &base, &overrides)
    }

    /// Compute the loop normals for a host request.
    pub fn execute(
        &self,
        mesh: &mut PolyMesh,
        request: &NormalEditRequest,
    ) -> Result<Vec<Vec3>, NormalEditError> {
        debug!(
            "execute: {} ({:?}, {:?})",
            request.command.label(),
            request.context.view,
            request.context.selection_mode
        );
        let ctx = &request.context;
        match &request.command {
            NormalEditCommand::Soften {
                always_use_face_mask,
            } => self.soften(mesh, ctx, *always_use_face_mask, Weighting::Uniform),
            NormalEditCommand::WeightedSoften => self.soften(mesh, ctx, false, Weighting::Area),
            NormalEditCommand::Harden => self.harden(mesh),
            NormalEditCommand::FlipDirection => self.flip_selected(mesh),
            NormalEditCommand::SetDirection {
                direction,
                allow_seams,
            } => self.set_direction(mesh, ctx, Vec3::from_array(*direction), *allow_seams),
        }
    }

    /// Execute a request and commit the result into the mesh.
    pub fn apply(
        &self,
        mesh: &mut PolyMesh,
        request: &NormalEditRequest,
    ) -> Result<(), NormalEditError> {
        let normals = self.execute(mesh, request)?;
        mesh.set_loop_normals(normals)?;
        Ok(())
    }
}
