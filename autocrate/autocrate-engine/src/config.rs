//! Derivation constants.
//!
//! # Example
//!
//! ```
//! use autocrate_engine::DerivationConfig;
//! use autocrate_panel::{CleatModel, FrontHeightRule};
//!
//! let config = DerivationConfig::default()
//!     .with_cleat_model(CleatModel::Extended)
//!     .with_front_height_rule(FrontHeightRule::ToGrade);
//! assert!(config.validate().is_ok());
//! ```

use autocrate_panel::{CleatModel, FrontHeightRule, IntermediateCleatRule};
use autocrate_skid::SkidTable;
use autocrate_types::{DEFAULT_EPSILON, DerivationError, DerivationResult};

/// Immutable constants shared by every solver in a derivation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DerivationConfig {
    /// Tolerance for every floating-point comparison.
    pub epsilon: f64,

    /// Narrowest custom floorboard cut when forcing is enabled.
    pub forceable_min_custom_width: f64,

    /// Weight brackets for skid selection.
    pub skid_table: SkidTable,

    /// Front and back panel height rule.
    pub front_height_rule: FrontHeightRule,

    /// Front panel cleat framing.
    pub cleat_model: CleatModel,

    /// Intermediate cleat rule for the extended model.
    pub intermediate_rule: IntermediateCleatRule,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            forceable_min_custom_width: 0.25,
            skid_table: SkidTable::standard(),
            front_height_rule: FrontHeightRule::default(),
            cleat_model: CleatModel::default(),
            intermediate_rule: IntermediateCleatRule::default(),
        }
    }
}

impl DerivationConfig {
    /// Set the comparison tolerance.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the narrowest forced custom floorboard.
    #[must_use]
    pub const fn with_forceable_min_custom_width(mut self, width: f64) -> Self {
        self.forceable_min_custom_width = width;
        self
    }

    /// Replace the skid bracket table.
    #[must_use]
    pub fn with_skid_table(mut self, table: SkidTable) -> Self {
        self.skid_table = table;
        self
    }

    /// Set the front and back panel height rule.
    #[must_use]
    pub const fn with_front_height_rule(mut self, rule: FrontHeightRule) -> Self {
        self.front_height_rule = rule;
        self
    }

    /// Set the front panel cleat model.
    #[must_use]
    pub const fn with_cleat_model(mut self, model: CleatModel) -> Self {
        self.cleat_model = model;
        self
    }

    /// Set the intermediate cleat rule.
    #[must_use]
    pub const fn with_intermediate_rule(mut self, rule: IntermediateCleatRule) -> Self {
        self.intermediate_rule = rule;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::InvalidConfig`] if the tolerance or forced
    /// board width is not positive, or the skid table or intermediate rule is
    /// unusable.
    pub fn validate(&self) -> DerivationResult<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(DerivationError::invalid_config(format!(
                "epsilon must be positive (got {})",
                self.epsilon
            )));
        }
        if !(self.forceable_min_custom_width.is_finite()
            && self.forceable_min_custom_width > self.epsilon)
        {
            return Err(DerivationError::invalid_config(format!(
                "forceable minimum custom width must exceed epsilon (got {})",
                self.forceable_min_custom_width
            )));
        }
        self.skid_table.validate()?;
        self.intermediate_rule.validate()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = DerivationConfig::default();
        assert_relative_eq!(config.epsilon, 0.001);
        assert_relative_eq!(config.forceable_min_custom_width, 0.25);
        assert_eq!(config.skid_table.len(), 4);
        assert_eq!(config.front_height_rule, FrontHeightRule::ProductEnvelope);
        assert_eq!(config.cleat_model, CleatModel::Basic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_epsilon() {
        for eps in [0.0, -1.0, f64::NAN] {
            let err = DerivationConfig::default().with_epsilon(eps).validate().unwrap_err();
            assert!(matches!(err, DerivationError::InvalidConfig(_)));
        }
    }

    #[test]
    fn test_forceable_min_must_exceed_epsilon() {
        let config = DerivationConfig::default().with_forceable_min_custom_width(0.0005);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_skid_table_rejected() {
        let config = DerivationConfig::default().with_skid_table(SkidTable::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_intermediate_rule_rejected() {
        let config = DerivationConfig::default()
            .with_intermediate_rule(IntermediateCleatRule::default().with_spacing(-30.0));
        assert!(config.validate().is_err());
    }
}
