//! Request validation, run before any solver.

use autocrate_types::{DerivationError, DerivationRequest, DerivationResult};

use crate::config::DerivationConfig;

/// Check every request field, plus the constraints that depend on `config`.
///
/// # Errors
///
/// Returns [`DerivationError::InvalidInput`] naming the first offending field.
///
/// # Example
///
/// ```
/// use autocrate_engine::{DerivationConfig, validate_request};
/// use autocrate_types::{DerivationRequest, FeatureFlags, MaterialSpec, ProductSpec};
///
/// let request = DerivationRequest::new(
///     ProductSpec::new(300.0, 100.0, 40.0, 50.0),
///     MaterialSpec::standard().with_min_custom_width(0.1),
/// )
/// .with_flags(FeatureFlags { allow_light_skids: true, force_small_custom_board: true });
///
/// let err = validate_request(&request, &DerivationConfig::default()).unwrap_err();
/// assert_eq!(err.field(), Some("material.min_custom_width"));
/// ```
pub fn validate_request(
    request: &DerivationRequest,
    config: &DerivationConfig,
) -> DerivationResult<()> {
    request.validate()?;

    let min_custom = request.material.min_custom_width;
    if request.flags.force_small_custom_board && min_custom < config.forceable_min_custom_width {
        return Err(DerivationError::invalid_input(
            "material.min_custom_width",
            format!(
                "cannot be below {} when forcing small custom boards (got {min_custom})",
                config.forceable_min_custom_width
            ),
        ));
    }
    Ok(())
}
