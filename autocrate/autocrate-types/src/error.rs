//! Error types for crate geometry derivation.
//!
//! A derivation either fails validation before any solver runs, or succeeds
//! (possibly carrying [`GeometryWarning`](crate::GeometryWarning)s). There are
//! no partial results.

use thiserror::Error;

/// Result type for derivation operations.
pub type DerivationResult<T> = Result<T, DerivationError>;

/// Errors that can occur while deriving crate geometry.
///
/// # Example
///
/// ```
/// use autocrate_types::DerivationError;
///
/// let error = DerivationError::invalid_input("product.width", "must be positive");
/// assert!(error.to_string().contains("product.width"));
/// assert!(error.is_invalid_input());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DerivationError {
    /// An input value violates its documented constraint.
    #[error("invalid input `{field}`: {message}")]
    InvalidInput {
        /// Dotted path of the offending field (e.g. `material.standard_widths`).
        field: String,
        /// Human-readable description of the violated constraint.
        message: String,
    },

    /// The derivation configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DerivationError {
    /// Create an invalid input error for the given field.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if this is an [`InvalidInput`](Self::InvalidInput) error.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// The offending field, if this error names one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::InvalidConfig(_) => None,
        }
    }
}

/// Reject a value that is not finite and strictly positive.
///
/// # Errors
///
/// Returns [`DerivationError::InvalidInput`] naming `field`.
pub fn require_positive(field: &str, value: f64) -> DerivationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DerivationError::invalid_input(
            field,
            format!("must be positive (got {value})"),
        ))
    }
}

/// Reject a value that is not finite or is negative.
///
/// # Errors
///
/// Returns [`DerivationError::InvalidInput`] naming `field`.
pub fn require_non_negative(field: &str, value: f64) -> DerivationResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DerivationError::invalid_input(
            field,
            format!("cannot be negative (got {value})"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = DerivationError::invalid_input("product.weight", "cannot be negative");
        let msg = error.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("product.weight"));
        assert!(msg.contains("cannot be negative"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = DerivationError::invalid_config("epsilon must be positive");
        assert!(error.to_string().contains("invalid configuration"));
        assert!(!error.is_invalid_input());
        assert!(error.field().is_none());
    }

    #[test]
    fn test_field_accessor() {
        let error = DerivationError::invalid_input("material.max_gap", "bad");
        assert_eq!(error.field(), Some("material.max_gap"));
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", -1.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_positive("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("x", 0.0).is_ok());
        assert!(require_non_negative("x", 2.5).is_ok());
        let err = require_non_negative("x", -0.1).unwrap_err();
        assert_eq!(err.field(), Some("x"));
    }
}
