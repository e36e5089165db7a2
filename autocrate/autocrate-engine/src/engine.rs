//! The derivation pipeline.

use autocrate_floor::{FloorboardParams, plan_floorboards};
use autocrate_panel::{
    CleatStock, ComponentParams, SandwichInputs, calculate_components, resolve_panel_boxes,
};
use autocrate_skid::plan_skids;
use autocrate_types::{
    CrateGeometry, DerivationRequest, DerivationResult, PanelKind, PanelSetComponents,
};
use tracing::{debug, info, warn};

use crate::config::DerivationConfig;
use crate::validation::validate_request;

/// Derive the complete geometry of one crate.
///
/// Inputs are validated first; on failure nothing is computed. Solvers then run
/// in fixed order: skids, floorboards, panel boxes, then the components of the
/// front, back, end and top panels. Warnings from every stage are collected
/// in that order on [`CrateGeometry::warnings`].
///
/// # Errors
///
/// Returns [`DerivationError::InvalidConfig`](autocrate_types::DerivationError::InvalidConfig)
/// for an unusable `config`, and
/// [`DerivationError::InvalidInput`](autocrate_types::DerivationError::InvalidInput)
/// for an invalid request.
///
/// # Example
///
/// ```
/// use autocrate_engine::{DerivationConfig, derive_geometry};
/// use autocrate_types::{DerivationRequest, FeatureFlags, MaterialSpec, ProductSpec};
///
/// let request = DerivationRequest::new(
///     ProductSpec::new(300.0, 100.0, 40.0, 50.0),
///     MaterialSpec::standard(),
/// )
/// .with_flags(FeatureFlags::standard());
///
/// let geometry = derive_geometry(&request, &DerivationConfig::default()).unwrap();
/// assert_eq!(geometry.skids.count, 3);
/// assert!((geometry.panels.end.width - 103.0).abs() < 1e-10);
/// ```
pub fn derive_geometry(
    request: &DerivationRequest,
    config: &DerivationConfig,
) -> DerivationResult<CrateGeometry> {
    config.validate()?;
    validate_request(request, config)?;

    let DerivationRequest {
        product,
        material,
        flags,
    } = request;

    info!(
        weight = product.weight,
        length = product.length,
        width = product.width,
        height = product.height,
        "Deriving crate geometry"
    );

    let mut warnings = Vec::new();
    let crate_width = product.crate_width();
    let crate_length = product.crate_length();

    let skids = plan_skids(product, flags.allow_light_skids, &config.skid_table, config.epsilon)?;
    if skids.profile.defaulted {
        debug!(weight = product.weight, "Load exceeds every skid bracket, using fallback stock");
    }

    let floor_params = FloorboardParams::new(crate_width, skids.length, material)
        .with_force_small_custom_board(flags.force_small_custom_board)
        .with_forceable_min_custom_width(config.forceable_min_custom_width)
        .with_epsilon(config.epsilon);
    let floorboards = plan_floorboards(&floor_params)?.collect_into(&mut warnings);

    let sandwich = SandwichInputs::from_request(request, skids.profile.height);
    let panels =
        resolve_panel_boxes(&sandwich, config.front_height_rule).collect_into(&mut warnings);

    let component_params =
        ComponentParams::new(material.sheathing_thickness, CleatStock::from_material(material))
            .with_model(config.cleat_model)
            .with_intermediate_rule(config.intermediate_rule);
    let mut components_for = |kind: PanelKind| {
        calculate_components(kind, panels.get(kind), &component_params).collect_into(&mut warnings)
    };
    let components = PanelSetComponents {
        front: components_for(PanelKind::Front),
        back: components_for(PanelKind::Back),
        end: components_for(PanelKind::End),
        top: components_for(PanelKind::Top),
    };

    for warning in &warnings {
        warn!(
            kind = warning.kind.as_str(),
            subject = %warning.subject,
            value = warning.value,
            "{}",
            warning.description()
        );
    }

    info!(
        skids = skids.count,
        floorboards = floorboards.board_count(),
        resolution = %floorboards.resolution,
        warnings = warnings.len(),
        "Crate geometry derived"
    );

    Ok(CrateGeometry {
        crate_width,
        crate_length,
        skids,
        floorboards,
        panels,
        components,
        warnings,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use autocrate_panel::CleatModel;
    use autocrate_types::{
        CleatOrientation, DerivationError, FeatureFlags, FloorResolution, GeometryWarningKind,
        MaterialSpec, ProductSpec,
    };

    fn reference_request() -> DerivationRequest {
        DerivationRequest::new(
            ProductSpec::new(300.0, 100.0, 40.0, 50.0),
            MaterialSpec::standard(),
        )
        .with_flags(FeatureFlags::standard())
    }

    #[test]
    fn test_reference_crate() {
        let g = derive_geometry(&reference_request(), &DerivationConfig::default()).unwrap();

        assert_relative_eq!(g.crate_width, 45.0);
        assert_relative_eq!(g.crate_length, 105.0);

        assert_eq!(g.skids.profile.lumber_callout, "3x4 (oriented for 3.5 H)");
        assert_eq!(g.skids.count, 3);
        assert_relative_eq!(g.skids.pitch, 21.25);
        assert_relative_eq!(g.skids.length, 105.0);

        // 103 usable: nine 11.25 boards leave 1.75
        assert_relative_eq!(g.floorboards.usable_span, 103.0);
        assert_relative_eq!(g.floorboards.board_length, 45.0);
        assert_eq!(g.floorboards.board_count(), 9);
        assert_eq!(g.floorboards.resolution, FloorResolution::Uncovered);
        assert_relative_eq!(g.floorboards.uncovered, 1.75, epsilon = 1e-9);

        assert_relative_eq!(g.panels.front.width, 47.0);
        assert_relative_eq!(g.panels.front.height, 53.5);
        assert_relative_eq!(g.panels.end.width, 103.0);
        assert_relative_eq!(g.panels.end.height, 56.0);
        assert_relative_eq!(g.panels.top.height, 105.0);

        assert_relative_eq!(g.components.front.secondary.length, 46.5);
        assert_relative_eq!(g.components.end.secondary.length, 96.0);
        assert_relative_eq!(g.components.top.secondary.length, 40.0);
        assert_eq!(g.components.top.primary.orientation, CleatOrientation::Lengthwise);

        assert_eq!(g.warnings.len(), 1);
        assert_eq!(g.warnings[0].kind, GeometryWarningKind::UncoveredFloor);
    }

    #[test]
    fn test_invalid_request_computes_nothing() {
        let mut request = reference_request();
        request.material.standard_widths.clear();
        let err = derive_geometry(&request, &DerivationConfig::default()).unwrap_err();
        assert_eq!(err.field(), Some("material.standard_widths"));
    }

    #[test]
    fn test_invalid_config() {
        let config = DerivationConfig::default().with_epsilon(0.0);
        let err = derive_geometry(&reference_request(), &config).unwrap_err();
        assert!(matches!(err, DerivationError::InvalidConfig(_)));
    }

    #[test]
    fn test_unbuildable_sizes_rejected() {
        let config = DerivationConfig::default();

        let too_wide = DerivationRequest::new(
            ProductSpec::new(300.0, 100.0, 1e300, 50.0),
            MaterialSpec::standard(),
        );
        let err = derive_geometry(&too_wide, &config).unwrap_err();
        assert_eq!(err.field(), Some("product.width"));

        let too_long = DerivationRequest::new(
            ProductSpec::new(300.0, 1e18, 40.0, 50.0),
            MaterialSpec::standard(),
        );
        let err = derive_geometry(&too_long, &config).unwrap_err();
        assert_eq!(err.field(), Some("floorboards.skid_length"));
    }

    #[test]
    fn test_extended_front_adds_intermediates() {
        let config = DerivationConfig::default().with_cleat_model(CleatModel::Extended);
        let g = derive_geometry(&reference_request(), &config).unwrap();

        let inter = g.components.front.intermediate.unwrap();
        // open width 40, open height 46.5
        assert_eq!(inter.orientation, CleatOrientation::Vertical);
        assert_eq!(inter.count, 1);
        assert_relative_eq!(inter.pitch, 20.0);
        assert_relative_eq!(inter.length, 46.5);
        assert!(g.components.back.intermediate.is_none());
    }

    #[test]
    fn test_idempotent() {
        let config = DerivationConfig::default();
        let a = derive_geometry(&reference_request(), &config).unwrap();
        let b = derive_geometry(&reference_request(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_warnings_in_stage_order() {
        // 1.5 long crate: span and end width clamp; floor clamp comes first
        let request = DerivationRequest::new(
            ProductSpec::new(100.0, 1.0, 40.0, 20.0).with_side_clearance(0.25),
            MaterialSpec::standard(),
        );
        let g = derive_geometry(&request, &DerivationConfig::default()).unwrap();
        let subjects: Vec<&str> = g.warnings.iter().map(|w| w.subject.as_str()).collect();
        assert_eq!(subjects[0], "floorboards.usable_span");
        assert!(subjects.contains(&"end_panel.width"));
        assert!(g.floorboards.boards.is_empty());
    }
}
