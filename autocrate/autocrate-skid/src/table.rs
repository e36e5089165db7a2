//! Weight-bracket lumber selection.

use autocrate_types::{DerivationError, DerivationResult, SkidProfile};

/// Condition under which a skid profile applies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BracketRule {
    /// Weight strictly below `below`, and light stock allowed.
    LightStock {
        /// Exclusive upper weight bound.
        below: f64,
    },
    /// Weight strictly below `below`.
    Below {
        /// Exclusive upper weight bound.
        below: f64,
    },
    /// Weight within `[min, max]`, both inclusive.
    Between {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Matches every weight.
    Any,
}

impl BracketRule {
    /// Whether this rule matches the given load.
    #[must_use]
    pub fn matches(&self, weight: f64, allow_light: bool) -> bool {
        match *self {
            Self::LightStock { below } => allow_light && weight < below,
            Self::Below { below } => weight < below,
            Self::Between { min, max } => (min..=max).contains(&weight),
            Self::Any => true,
        }
    }
}

/// A single row of a [`SkidTable`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkidBracket {
    /// When the row applies.
    pub rule: BracketRule,
    /// Profile chosen when it does.
    pub profile: SkidProfile,
}

/// Ordered weight brackets; the first matching row wins.
///
/// # Example
///
/// ```
/// use autocrate_skid::SkidTable;
///
/// let table = SkidTable::standard();
///
/// let light = table.select(300.0, true).unwrap();
/// assert!((light.width - 2.5).abs() < 1e-10);
///
/// let heavy = table.select(25_000.0, false).unwrap();
/// assert!(heavy.defaulted);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkidTable {
    /// Rows in priority order.
    pub brackets: Vec<SkidBracket>,
}

impl Default for SkidTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl SkidTable {
    /// Height of every standard skid profile.
    pub const STANDARD_HEIGHT: f64 = 3.5;

    /// The standard bracket table.
    ///
    /// | Weight (lb) | Stock | Max spacing |
    /// |---|---|---|
    /// | < 500, light allowed | 3x4 on edge (2.5 wide) | 30 |
    /// | < 4500 | 4x4 (3.5 wide) | 30 |
    /// | 4500 to 20000 | 4x6 (5.5 wide) | 24 |
    /// | heavier | 4x6, flagged as defaulted | 24 |
    #[must_use]
    pub fn standard() -> Self {
        let h = Self::STANDARD_HEIGHT;
        Self::new()
            .with_bracket(
                BracketRule::LightStock { below: 500.0 },
                SkidProfile::new(h, 2.5, "3x4 (oriented for 3.5 H)", 30.0),
            )
            .with_bracket(
                BracketRule::Below { below: 4500.0 },
                SkidProfile::new(h, 3.5, "4x4", 30.0),
            )
            .with_bracket(
                BracketRule::Between {
                    min: 4500.0,
                    max: 20_000.0,
                },
                SkidProfile::new(h, 5.5, "4x6", 24.0),
            )
            .with_bracket(
                BracketRule::Any,
                SkidProfile::new(h, 5.5, "4x6 (defaulted)", 24.0).defaulted(),
            )
    }

    /// An empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            brackets: Vec::new(),
        }
    }

    /// Append a row (builder pattern).
    #[must_use]
    pub fn with_bracket(mut self, rule: BracketRule, profile: SkidProfile) -> Self {
        self.brackets.push(SkidBracket { rule, profile });
        self
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// Pick the profile for a load.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::InvalidInput`] on `product.weight` if no
    /// row matches.
    pub fn select(&self, weight: f64, allow_light: bool) -> DerivationResult<&SkidProfile> {
        self.brackets
            .iter()
            .find(|b| b.rule.matches(weight, allow_light))
            .map(|b| &b.profile)
            .ok_or_else(|| {
                DerivationError::invalid_input(
                    "product.weight",
                    format!("no skid bracket matches a weight of {weight} lb"),
                )
            })
    }

    /// Check that every row carries a usable profile.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::InvalidConfig`] for an empty table or a
    /// non-positive profile dimension.
    pub fn validate(&self) -> DerivationResult<()> {
        if self.is_empty() {
            return Err(DerivationError::invalid_config("skid table has no brackets"));
        }
        for (i, bracket) in self.brackets.iter().enumerate() {
            let p = &bracket.profile;
            let usable = [p.height, p.width, p.max_spacing]
                .iter()
                .all(|v| v.is_finite() && *v > 0.0);
            if !usable {
                return Err(DerivationError::invalid_config(format!(
                    "skid bracket {i} (`{}`) needs positive height, width and spacing",
                    p.lumber_callout
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_light_stock_requires_flag() {
        let table = SkidTable::standard();
        assert_eq!(table.select(499.0, true).unwrap().lumber_callout, "3x4 (oriented for 3.5 H)");
        assert_eq!(table.select(499.0, false).unwrap().lumber_callout, "4x4");
        assert_eq!(table.select(500.0, true).unwrap().lumber_callout, "4x4");
    }

    #[test]
    fn test_bracket_boundaries() {
        let table = SkidTable::standard();
        assert_eq!(table.select(4499.9, false).unwrap().lumber_callout, "4x4");
        assert_eq!(table.select(4500.0, false).unwrap().lumber_callout, "4x6");
        assert_eq!(table.select(20_000.0, false).unwrap().lumber_callout, "4x6");

        let fallback = table.select(20_000.1, false).unwrap();
        assert_eq!(fallback.lumber_callout, "4x6 (defaulted)");
        assert!(fallback.defaulted);
        assert_relative_eq!(fallback.max_spacing, 24.0);
    }

    #[test]
    fn test_every_standard_height_is_equal() {
        for bracket in &SkidTable::standard().brackets {
            assert_relative_eq!(bracket.profile.height, SkidTable::STANDARD_HEIGHT);
        }
    }

    #[test]
    fn test_no_match_is_invalid_input() {
        let table = SkidTable::new().with_bracket(
            BracketRule::Below { below: 100.0 },
            SkidProfile::new(3.5, 3.5, "4x4", 30.0),
        );
        let err = table.select(150.0, false).unwrap_err();
        assert_eq!(err.field(), Some("product.weight"));
    }

    #[test]
    fn test_validate() {
        assert!(SkidTable::standard().validate().is_ok());
        assert!(SkidTable::new().validate().is_err());

        let bad =
            SkidTable::new().with_bracket(BracketRule::Any, SkidProfile::new(3.5, 0.0, "x", 30.0));
        assert!(bad.validate().is_err());
    }
}
