//! Shared configuration for split-normal editing
//!
//! This crate provides the single source of truth for the knobs that decide
//! how normal edits are computed: where the base loop normals come from, how
//! smooth polygons derive their split normals, and what happens when a hard
//! per-polygon edit is requested with the wrong selection granularity.

use serde::{Deserialize, Serialize};

/// Default auto-smooth angle in degrees
pub const DEFAULT_AUTO_SMOOTH_ANGLE: f32 = 30.0;

/// Largest auto-smooth angle accepted by [`NormalEditConfig::validate`]
pub const MAX_AUTO_SMOOTH_ANGLE: f32 = 180.0;

/// Where the base loop normals of a write come from.
///
/// Loops that receive no override keep their base normal, so `Recompute`
/// discards any manual split-normal edits outside the current mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitNormalSource {
    /// Use the custom normals currently stored on the mesh loops
    #[default]
    Existing,
    /// Re-derive split normals from face geometry before merging
    Recompute,
}

/// Behavior of a hard per-polygon direction edit when the selection
/// granularity is not polygon-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardSeamPolicy {
    /// Fall back to the soft per-vertex edit and log a warning
    #[default]
    Fallback,
    /// Fail with a precondition error
    Reject,
}

/// Errors produced while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration for normal editing operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalEditConfig {
    /// Source of the base normals merged with overrides
    pub split_source: SplitNormalSource,
    /// Maximum angle between face normals that still shade smoothly
    pub auto_smooth_angle_degrees: f32,
    /// Hard direction edits with non-face selection
    pub hard_seam_policy: HardSeamPolicy,
    /// Mask softening by selected faces regardless of selection granularity
    pub always_use_face_mask: bool,
}

impl Default for NormalEditConfig {
    fn default() -> Self {
        Self {
            split_source: SplitNormalSource::default(),
            auto_smooth_angle_degrees: DEFAULT_AUTO_SMOOTH_ANGLE,
            hard_seam_policy: HardSeamPolicy::default(),
            always_use_face_mask: false,
        }
    }
}

impl NormalEditConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let angle = self.auto_smooth_angle_degrees;
        if !angle.is_finite() || !(0.0..=MAX_AUTO_SMOOTH_ANGLE).contains(&angle) {
            return Err(ConfigError::Invalid(format!(
                "auto_smooth_angle_degrees must be within 0..={MAX_AUTO_SMOOTH_ANGLE}, got {angle}"
            )));
        }
        Ok(())
    }

    /// Auto-smooth angle in radians
    pub fn auto_smooth_angle(&self) -> f32 {
        self.auto_smooth_angle_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NormalEditConfig::default();
        assert_eq!(config.split_source, SplitNormalSource::Existing);
        assert_eq!(config.auto_smooth_angle_degrees, DEFAULT_AUTO_SMOOTH_ANGLE);
        assert_eq!(config.hard_seam_policy, HardSeamPolicy::Fallback);
        assert!(!config.always_use_face_mask);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            NormalEditConfig::from_json(r#"{"split_source": "recompute", "hard_seam_policy": "reject"}"#)
                .unwrap();
        assert_eq!(config.split_source, SplitNormalSource::Recompute);
        assert_eq!(config.hard_seam_policy, HardSeamPolicy::Reject);
        assert_eq!(config.auto_smooth_angle_degrees, DEFAULT_AUTO_SMOOTH_ANGLE);
    }

    #[test]
    fn test_from_json_rejects_bad_angle() {
        let err = NormalEditConfig::from_json(r#"{"auto_smooth_angle_degrees": 270.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = NormalEditConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_auto_smooth_angle_radians() {
        let mut config = NormalEditConfig::default();
        config.auto_smooth_angle_degrees = 180.0;
        assert!((config.auto_smooth_angle() - std::f32::consts::PI).abs() < 1e-6);
    }
}
