//! API Regression Tests for the AutoCrate Crate Ecosystem
//!
//! These tests pin the public API and the reference numbers it produces. They
//! are organized in 4 tiers, each building on the one before:
//!
//! - Tier 1: Foundation (autocrate-types, inputs and validation)
//! - Tier 2: Solvers (autocrate-skid, autocrate-floor, autocrate-panel)
//! - Tier 3: Orchestration (autocrate-engine, cache and batch)
//! - Tier 4: Export (autocrate-expressions)
//!
//! A failure here after an API change means a breaking change that needs a
//! version bump.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use autocrate::{engine, expressions, floor, panel, prelude::*, skid, types};

fn reference_request() -> DerivationRequest {
    DerivationRequest::new(
        ProductSpec::new(300.0, 100.0, 40.0, 50.0),
        MaterialSpec::standard(),
    )
    .with_flags(FeatureFlags::standard())
}

// =============================================================================
// TIER 1: Foundation - Inputs and Validation
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn product_defaults_and_crate_size() {
        let product = ProductSpec::new(300.0, 100.0, 40.0, 50.0);
        assert_relative_eq!(product.side_clearance, 2.5);
        assert_relative_eq!(product.above_clearance, 2.0);
        assert_relative_eq!(product.crate_width(), 45.0);
        assert_relative_eq!(product.crate_length(), 105.0);
    }

    #[test]
    fn material_standard_stock() {
        let material = MaterialSpec::standard();
        assert_eq!(material.standard_widths, vec![5.5, 7.25, 9.25, 11.25]);
        assert_relative_eq!(material.assembly_depth(), 1.0);
        assert_eq!(material, MaterialSpec::default());
        assert!(material.validate().is_ok());
    }

    #[test]
    fn flags_default_off() {
        let flags = FeatureFlags::default();
        assert!(!flags.allow_light_skids);
        assert!(!flags.force_small_custom_board);
        assert!(FeatureFlags::standard().allow_light_skids);
    }

    #[test]
    fn validation_names_the_field() {
        let bad_weight = DerivationRequest::new(
            ProductSpec::new(-1.0, 100.0, 40.0, 50.0),
            MaterialSpec::standard(),
        );
        let err = bad_weight.validate().unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.field(), Some("product.weight"));

        let no_widths = DerivationRequest::new(
            ProductSpec::new(300.0, 100.0, 40.0, 50.0),
            MaterialSpec::standard().with_standard_widths(Vec::new()),
        );
        assert_eq!(
            no_widths.validate().unwrap_err().field(),
            Some("material.standard_widths")
        );
    }

    #[test]
    fn warning_display() {
        let warning = types::GeometryWarning::clamped("end_panel.width", -0.5);
        assert_eq!(warning.kind, GeometryWarningKind::ClampedToZero);
        assert!(warning.to_string().contains("end_panel.width"));
    }
}

// =============================================================================
// TIER 2: Solvers - Skids, Floorboards, Panels
// =============================================================================

mod tier2_solvers {
    use super::*;
    use types::{CleatOrientation, PanelBox};

    const EPS: f64 = types::DEFAULT_EPSILON;

    #[test]
    fn skid_layout_reference() {
        let product = ProductSpec::new(300.0, 100.0, 40.0, 50.0);
        let plan = skid::plan_skids(&product, true, &skid::SkidTable::standard(), EPS).unwrap();

        assert_eq!(plan.count, 3);
        assert_relative_eq!(plan.pitch, 21.25);
        assert_relative_eq!(plan.first_position_x, -21.25);
        assert_relative_eq!(plan.master_origin_offset_x, -22.5);
        assert_relative_eq!(plan.footprint_width(), 45.0);
    }

    #[test]
    fn skid_heavy_load_uses_4x6() {
        let product = ProductSpec::new(6000.0, 100.0, 90.0, 50.0);
        let plan = skid::plan_skids(&product, false, &skid::SkidTable::standard(), EPS).unwrap();

        assert_eq!(plan.profile.lumber_callout, "4x6");
        assert_eq!(plan.count, 5);
        assert_relative_eq!(plan.pitch, 22.375);
        assert!(!plan.profile.defaulted);
    }

    #[test]
    fn skid_overweight_falls_back() {
        let product = ProductSpec::new(25_000.0, 100.0, 40.0, 50.0);
        let plan = skid::plan_skids(&product, false, &skid::SkidTable::standard(), EPS).unwrap();
        assert!(plan.profile.defaulted);
        assert_relative_eq!(plan.profile.width, 5.5);
    }

    #[test]
    fn skid_single_within_epsilon() {
        let table = skid::SkidTable::standard();
        let narrow = ProductSpec::new(1000.0, 20.0, 3.5005, 10.0).with_side_clearance(0.0);
        let plan = skid::plan_skids(&narrow, false, &table, EPS).unwrap();
        assert_eq!(plan.count, 1);
        assert_eq!(plan.pitch, 0.0);
        assert_eq!(plan.positions().collect::<Vec<_>>(), vec![0.0]);

        let wider = ProductSpec::new(1000.0, 20.0, 3.6, 10.0).with_side_clearance(0.0);
        let plan = skid::plan_skids(&wider, false, &table, EPS).unwrap();
        assert_eq!(plan.count, 2);
        assert_relative_eq!(plan.pitch, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn floor_uncovered_residual() {
        // 58 usable: five 11.25 boards leave 1.75
        let params = floor::FloorboardParams::new(45.0, 60.0, &MaterialSpec::standard());
        let derived = floor::plan_floorboards(&params).unwrap();

        assert_eq!(derived.value.board_count(), 5);
        assert_eq!(derived.value.resolution, FloorResolution::Uncovered);
        assert_relative_eq!(derived.value.uncovered, 1.75, epsilon = 1e-9);
        assert_relative_eq!(derived.value.middle_gap, 0.0);
        assert_relative_eq!(derived.value.custom_width, 0.0);
        assert_eq!(derived.warnings.len(), 1);
        assert_eq!(derived.warnings[0].subject, "floorboards.residual");
    }

    #[test]
    fn floor_custom_board_last() {
        let params = floor::FloorboardParams::new(45.0, 27.0, &MaterialSpec::standard());
        let plan = floor::plan_floorboards(&params).unwrap().value;

        assert_eq!(plan.resolution, FloorResolution::CustomBoard);
        let last = plan.boards.last().unwrap();
        assert!(last.is_custom());
        assert_relative_eq!(last.width, 2.5, epsilon = 1e-9);
        assert_relative_eq!(plan.covered_total(), plan.usable_span, epsilon = 1e-9);
    }

    #[test]
    fn sandwich_reference() {
        let inputs = panel::SandwichInputs::from_request(&reference_request(), 3.5);
        let boxes = panel::resolve_panel_boxes(&inputs, panel::FrontHeightRule::default());
        assert!(!boxes.has_warnings());

        let b = boxes.value;
        assert_relative_eq!(b.assembly_depth, 1.0);
        assert_relative_eq!(b.front.width, 47.0);
        assert_relative_eq!(b.front.height, 53.5);
        assert_relative_eq!(b.end.width, 103.0);
        assert_relative_eq!(b.end.height, 56.0);
        assert_relative_eq!(b.top.height, 105.0);
    }

    #[test]
    fn front_panel_components() {
        let stock = panel::CleatStock {
            thickness: 0.75,
            member_width: 3.5,
        };
        let front = PanelBox::new(48.0, 60.0, 1.0);

        let basic = panel::ComponentParams::new(0.25, stock);
        let c = panel::calculate_components(PanelKind::Front, &front, &basic).value;
        assert_relative_eq!(c.primary.length, 48.0);
        assert_relative_eq!(c.secondary.length, 53.0);
        assert!(c.intermediate.is_none());

        let extended = basic.with_model(panel::CleatModel::Extended);
        let c = panel::calculate_components(PanelKind::Front, &front, &extended).value;
        assert_relative_eq!(c.primary.length, 41.0);
        assert_relative_eq!(c.secondary.length, 53.0);

        let inter = c.intermediate.unwrap();
        assert_eq!(inter.orientation, CleatOrientation::Vertical);
        assert_eq!(inter.count, 1);
        assert_relative_eq!(inter.pitch, 20.5);
        assert_relative_eq!(inter.length, 53.0);
        assert_eq!(c.cleat_count(), 5);
    }

    #[test]
    fn end_panel_components() {
        let params = panel::ComponentParams::new(
            0.25,
            panel::CleatStock {
                thickness: 0.75,
                member_width: 3.5,
            },
        );
        let end = PanelBox::new(103.0, 56.0, 1.0);
        let c = panel::calculate_components(PanelKind::End, &end, &params).value;
        assert_eq!(c.primary.orientation, CleatOrientation::Vertical);
        assert_relative_eq!(c.primary.length, 56.0);
        assert_relative_eq!(c.secondary.length, 96.0);
    }
}

// =============================================================================
// TIER 3: Orchestration - Engine, Cache, Batch
// =============================================================================

mod tier3_orchestration {
    use super::*;

    #[test]
    fn reference_crate() {
        let g = derive_geometry(&reference_request(), &DerivationConfig::default()).unwrap();

        assert_eq!(g.skids.count, 3);
        assert_relative_eq!(g.skids.pitch, 21.25);
        assert_eq!(g.floorboards.board_count(), 9);
        assert_eq!(g.floorboards.resolution, FloorResolution::Uncovered);
        assert_relative_eq!(g.floorboards.uncovered, 1.75, epsilon = 1e-9);
        assert_relative_eq!(g.panels.front.width, 47.0);
        assert_relative_eq!(g.panels.end.width, 103.0);
        assert_eq!(g.warnings.len(), 1);
        assert!(!g.is_clean());
    }

    #[test]
    fn zero_weight_is_accepted() {
        let request = DerivationRequest::new(
            ProductSpec::new(0.0, 40.0, 30.0, 30.0),
            MaterialSpec::standard(),
        );
        assert!(derive_geometry(&request, &DerivationConfig::default()).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = DerivationConfig::default().with_skid_table(skid::SkidTable::new());
        let err = derive_geometry(&reference_request(), &config).unwrap_err();
        assert!(matches!(err, DerivationError::InvalidConfig(_)));
        assert!(DerivationCache::new(config).is_err());
    }

    #[test]
    fn cache_reuses_results() {
        let cache = DerivationCache::new(DerivationConfig::default()).unwrap();
        let a = cache.derive(&reference_request()).unwrap();
        let b = cache.derive(&reference_request()).unwrap();

        assert_eq!(a, b);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.computations(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn batch_preserves_order() {
        let requests: Vec<_> = [40.0, -5.0, 80.0]
            .into_iter()
            .map(|w| {
                DerivationRequest::new(
                    ProductSpec::new(300.0, 100.0, w, 50.0),
                    MaterialSpec::standard(),
                )
            })
            .collect();
        let results = derive_batch(&requests, &DerivationConfig::default());

        assert_eq!(results.len(), 3);
        assert_relative_eq!(results[0].as_ref().unwrap().crate_width, 45.0);
        assert_eq!(results[1].as_ref().unwrap_err().field(), Some("product.width"));
        assert_relative_eq!(results[2].as_ref().unwrap().crate_width, 85.0);
    }

    #[test]
    fn standalone_validation() {
        let config = engine::DerivationConfig::default();
        assert!(engine::validate_request(&reference_request(), &config).is_ok());
    }
}

// =============================================================================
// TIER 4: Export - Expression Tables
// =============================================================================

mod tier4_export {
    use super::*;

    fn reference_table() -> ExpressionTable {
        let request = reference_request();
        let geometry = derive_geometry(&request, &DerivationConfig::default()).unwrap();
        build_expression_table(&request, &geometry, &ExportOptions::default())
    }

    #[test]
    fn named_values() {
        let table = reference_table();
        assert_eq!(
            table.get("CALC_Skid_Count").unwrap().to_string(),
            "CALC_Skid_Count = 3"
        );
        assert_eq!(
            table.get("CALC_FB_Uncovered_Residual").unwrap().to_string(),
            "[Inch]CALC_FB_Uncovered_Residual = 1.7500"
        );
        assert!(table.get("FB_Inst_20_Suppress_Flag").is_some());
        assert_eq!(table.dropped_floorboards, 0);
    }

    #[test]
    fn suppressed_slots_use_placeholder_width() {
        let table = reference_table();
        let slot = table.get("FB_Inst_15_Actual_Width").unwrap();
        assert_eq!(
            slot.value,
            expressions::Value::Number {
                value: expressions::SUPPRESSED_WIDTH,
                precision: 4,
            }
        );
    }

    #[test]
    fn write_matches_render() {
        let table = reference_table();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crate.exp");

        write_expressions(&table, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, table.render());
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("crate.exp");
        let err = write_expressions(&reference_table(), &path).unwrap_err();
        assert!(matches!(err, expressions::ExpressionError::Io { .. }));
    }
}
