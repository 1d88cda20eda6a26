//! Instance builder configuration.
//!
//! The MIVOT mapper is a prototype feature: building instances is refused
//! unless [`MIVOT_FEATURE`] has been activated in the [`MivotConfig`] handed
//! to the [`InstanceBuilder`](crate::InstanceBuilder).

use serde::{Deserialize, Serialize};

use crate::error::MivotError;

/// Name of the prototype feature gating the instance mapper.
pub const MIVOT_FEATURE: &str = "MIVOT";

/// Options of the instance builder.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use mivot::MivotConfig;
///
/// let config = MivotConfig::from_json_str(r#"{"prototype_features": ["MIVOT"]}"#).unwrap();
/// assert!(config.is_activated("MIVOT"));
/// assert!(config.fix_legacy_year_unit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MivotConfig {
    /// Activated prototype features.
    pub prototype_features: Vec<String>,

    /// Rewrite `year` into `yr` in units (`mas/year` was used by the first
    /// VizieR annotations).
    pub fix_legacy_year_unit: bool,

    /// Attach `astropy_unit` / `astropy_unit_time` to attributes whose unit
    /// is known.
    pub attach_unit_equivalents: bool,
}

impl Default for MivotConfig {
    fn default() -> Self {
        Self {
            prototype_features: Vec::new(),
            fix_legacy_year_unit: true,
            attach_unit_equivalents: true,
        }
    }
}

impl MivotConfig {
    /// Create a configuration with no prototype feature activated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with the MIVOT feature activated.
    pub fn activated() -> Self {
        Self::default().activate(MIVOT_FEATURE)
    }

    /// Activate a prototype feature.
    pub fn activate(mut self, feature: impl Into<String>) -> Self {
        let feature = feature.into();
        if !self.prototype_features.contains(&feature) {
            self.prototype_features.push(feature);
        }
        self
    }

    /// Enable or disable the `year` -> `yr` unit rewrite.
    pub fn with_legacy_year_fix(mut self, enabled: bool) -> Self {
        self.fix_legacy_year_unit = enabled;
        self
    }

    /// Enable or disable the astropy unit equivalents.
    pub fn with_unit_equivalents(mut self, enabled: bool) -> Self {
        self.attach_unit_equivalents = enabled;
        self
    }

    /// Check whether a prototype feature is activated.
    pub fn is_activated(&self, feature: &str) -> bool {
        self.prototype_features.iter().any(|f| f == feature)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, MivotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn ensure_activated(&self, feature: &str) -> Result<(), MivotError> {
        if self.is_activated(feature) {
            return Ok(());
        }
        tracing::warn!(feature, "prototype feature used without being activated");
        Err(MivotError::FeatureNotActivated(feature.to_string()))
    }
}
