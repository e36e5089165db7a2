//! Panel sizing for crate assemblies.
//!
//! Two stages:
//!
//! - [`resolve_panel_boxes`]: the "sandwich" that sizes the front, back, end
//!   and top panels against each other
//! - [`calculate_components`]: breaks one panel box into sheathing and cleats
//!
//! # Example
//!
//! ```
//! use autocrate_panel::{
//!     CleatStock, ComponentParams, FrontHeightRule, SandwichInputs, calculate_components,
//!     resolve_panel_boxes,
//! };
//! use autocrate_types::{DerivationRequest, MaterialSpec, PanelKind, ProductSpec};
//!
//! let request = DerivationRequest::new(
//!     ProductSpec::new(300.0, 100.0, 40.0, 50.0),
//!     MaterialSpec::standard(),
//! );
//! let inputs = SandwichInputs::from_request(&request, 3.5);
//! let boxes = resolve_panel_boxes(&inputs, FrontHeightRule::default()).value;
//!
//! let params = ComponentParams::new(0.25, CleatStock::from_material(&request.material));
//! let end = calculate_components(PanelKind::End, &boxes.end, &params).value;
//! assert!((end.primary.length - boxes.end.height).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod components;
mod sandwich;
mod stock;

pub use components::{ComponentParams, calculate_components};
pub use sandwich::{FrontHeightRule, SandwichInputs, resolve_panel_boxes};
pub use stock::{CleatModel, CleatStock, IntermediateCleatRule};
