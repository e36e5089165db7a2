//! Parametric shipping-crate geometry.
//!
//! This umbrella crate re-exports the autocrate-* crates. Given a product's
//! weight and dimensions plus the lumber on hand, it derives every dimension
//! and count a CAD template needs to build the crate.
//!
//! # Quick Start
//!
//! ```
//! use autocrate::prelude::*;
//!
//! let request = DerivationRequest::new(
//!     ProductSpec::new(1500.0, 100.0, 42.0, 48.0),
//!     MaterialSpec::standard(),
//! );
//! let geometry = derive_geometry(&request, &DerivationConfig::default()).unwrap();
//!
//! assert_eq!(geometry.skids.count, 3);
//! let table = build_expression_table(&request, &geometry, &ExportOptions::default());
//! assert!(table.get("CALC_Skid_Count").is_some());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Requests, plans, panel boxes, warnings and errors
//! - [`skid`] - Skid profile selection and centerline layout
//! - [`floor`] - Greedy floorboard packing
//! - [`panel`] - Panel sandwich resolution and cleat calculation
//! - [`engine`] - Orchestration, caching and batch derivation
//! - [`expressions`] - CAD expression table export
//!
//! # Feature Flags
//!
//! - `serde` - Serialize requests, configuration and results

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Requests, plans, panel boxes, warnings and errors.
pub use autocrate_types as types;

/// Skid profile selection and centerline layout.
pub use autocrate_skid as skid;

/// Greedy floorboard packing.
pub use autocrate_floor as floor;

/// Panel sandwich resolution and cleat calculation.
pub use autocrate_panel as panel;

/// Orchestration, caching and batch derivation.
pub use autocrate_engine as engine;

/// CAD expression table export.
pub use autocrate_expressions as expressions;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for crate derivation.
///
/// ```
/// use autocrate::prelude::*;
/// ```
pub mod prelude {
    // Inputs
    pub use autocrate_types::{DerivationRequest, FeatureFlags, MaterialSpec, ProductSpec};

    // Results
    pub use autocrate_types::{
        CrateGeometry, DerivationError, DerivationResult, FloorResolution, GeometryWarning,
        GeometryWarningKind, PanelKind,
    };

    // Engine
    pub use autocrate_engine::{DerivationCache, DerivationConfig, derive_batch, derive_geometry};

    // Export
    pub use autocrate_expressions::{
        ExportOptions, ExpressionTable, build_expression_table, write_expressions,
    };
}

// =============================================================================
// Tests
// =============================================================================
