//! Crate geometry derivation engine.
//!
//! Validates a [`DerivationRequest`](autocrate_types::DerivationRequest) and
//! runs the solvers in their fixed order (skids, floorboards, panel boxes,
//! panel components) to produce one
//! [`CrateGeometry`](autocrate_types::CrateGeometry).
//!
//! - [`derive_geometry`]: a single derivation
//! - [`derive_batch`]: many independent derivations in parallel
//! - [`DerivationCache`]: memoized derivations keyed on the exact request
//!
//! All constants come from one immutable [`DerivationConfig`].
//!
//! # Example
//!
//! ```
//! use autocrate_engine::{DerivationConfig, derive_geometry};
//! use autocrate_types::{DerivationRequest, MaterialSpec, ProductSpec};
//!
//! let request = DerivationRequest::new(
//!     ProductSpec::new(1500.0, 72.0, 36.0, 40.0),
//!     MaterialSpec::standard(),
//! );
//! let geometry = derive_geometry(&request, &DerivationConfig::default()).unwrap();
//!
//! let sum: f64 = geometry.skids.positions().sum();
//! assert!(sum.abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod batch;
mod cache;
mod config;
mod engine;
mod validation;

pub use batch::derive_batch;
pub use cache::DerivationCache;
pub use config::DerivationConfig;
pub use engine::derive_geometry;
pub use validation::validate_request;
