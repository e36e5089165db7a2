//! Shared value types for crate geometry derivation.
//!
//! Every record here is an immutable value produced or consumed by the
//! solvers in `autocrate-skid`, `autocrate-floor` and `autocrate-panel`:
//!
//! - [`DerivationRequest`]: the single input contract ([`ProductSpec`],
//!   [`MaterialSpec`], [`FeatureFlags`])
//! - [`SkidPlan`], [`FloorboardPlan`], [`PanelBoxes`], [`PanelComponents`]:
//!   per-solver outputs
//! - [`CrateGeometry`]: the assembled result
//! - [`GeometryWarning`] and [`Derived`]: non-fatal findings carried
//!   alongside a result
//!
//! Lengths are in inches and weight in pounds.
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for every record.
//!
//! # Example
//!
//! ```
//! use autocrate_types::{DerivationRequest, MaterialSpec, ProductSpec};
//!
//! let request = DerivationRequest::new(
//!     ProductSpec::new(1200.0, 48.0, 40.0, 36.0),
//!     MaterialSpec::standard(),
//! );
//! assert!(request.validate().is_ok());
//! assert!((request.product.crate_width() - 45.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod floor;
mod geometry;
mod panel;
mod request;
mod skid;
mod warning;

pub use error::{DerivationError, DerivationResult, require_non_negative, require_positive};
pub use floor::{Board, BoardKind, FloorResolution, FloorboardPlan};
pub use geometry::{CrateGeometry, PanelSetComponents};
pub use panel::{
    CleatGroup, CleatOrientation, IntermediateCleats, PanelBox, PanelBoxes, PanelComponents,
    PanelKind, Sheathing,
};
pub use request::{
    DerivationRequest, FeatureFlags, MaterialSpec, ProductSpec, validate_standard_widths,
};
pub use skid::{SkidPlan, SkidProfile};
pub use warning::{Derived, GeometryWarning, GeometryWarningKind, clamp_non_negative};

/// Default numeric tolerance for floating-point comparisons, in inches.
pub const DEFAULT_EPSILON: f64 = 0.001;
