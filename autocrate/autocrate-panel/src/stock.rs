//! Cleat stock and cleat layout rules.

use autocrate_types::{DerivationError, DerivationResult, MaterialSpec};

/// Cross-section of the cleat lumber.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleatStock {
    /// Thickness off the sheathing face.
    pub thickness: f64,
    /// Face width on the sheathing.
    pub member_width: f64,
}

impl CleatStock {
    /// Cleat stock described by `material`.
    #[must_use]
    pub const fn from_material(material: &MaterialSpec) -> Self {
        Self {
            thickness: material.cleat_thickness,
            member_width: material.cleat_member_width,
        }
    }
}

/// Which cleat framing the front panel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CleatModel {
    /// Two full-width horizontals with two verticals fitted between them.
    #[default]
    Basic,
    /// Perimeter frame with both edge pairs inset, plus intermediate cleats
    /// across the open span.
    Extended,
}

/// When intermediate cleats are added and how densely.
///
/// # Example
///
/// ```
/// use autocrate_panel::IntermediateCleatRule;
///
/// let rule = IntermediateCleatRule::default();
/// assert_eq!(rule.count_for(41.0), 1);
/// assert_eq!(rule.count_for(61.0), 2);
/// assert_eq!(rule.count_for(29.0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntermediateCleatRule {
    /// Smallest open span that receives intermediate cleats.
    pub threshold: f64,
    /// Span divisor for the intermediate count.
    pub spacing: f64,
}

impl Default for IntermediateCleatRule {
    fn default() -> Self {
        Self {
            threshold: 24.0,
            spacing: 30.0,
        }
    }
}

impl IntermediateCleatRule {
    /// Set the threshold (builder pattern).
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the spacing (builder pattern).
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Whether an open span is wide enough for intermediates.
    #[must_use]
    pub fn applies_to(&self, open_span: f64) -> bool {
        open_span >= self.threshold
    }

    /// Intermediate cleat count for an open span: `floor(open / spacing)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn count_for(&self, open_span: f64) -> usize {
        (open_span / self.spacing).floor().max(0.0) as usize
    }

    /// Check the rule.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::InvalidConfig`] for a negative threshold
    /// or a non-positive spacing.
    pub fn validate(&self) -> DerivationResult<()> {
        if !(self.threshold.is_finite() && self.threshold >= 0.0) {
            return Err(DerivationError::invalid_config(format!(
                "intermediate cleat threshold must be non-negative (got {})",
                self.threshold
            )));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(DerivationError::invalid_config(format!(
                "intermediate cleat spacing must be positive (got {})",
                self.spacing
            )));
        }
        Ok(())
    }
}
