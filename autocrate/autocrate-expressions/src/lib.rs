//! Parametric CAD expression export for derived crates.
//!
//! Turns a [`CrateGeometry`](autocrate_types::CrateGeometry) into a flat table
//! of named expressions (`[Inch]name = value` lines grouped under `// ---`
//! section comments) that drives a parametric CAD template. Floorboards are
//! written into a fixed number of instance slots so the template can suppress
//! the unused ones.
//!
//! # Example
//!
//! ```
//! use autocrate_engine::{DerivationConfig, derive_geometry};
//! use autocrate_expressions::{ExportOptions, build_expression_table};
//! use autocrate_types::{DerivationRequest, MaterialSpec, ProductSpec};
//!
//! let request = DerivationRequest::new(
//!     ProductSpec::new(300.0, 100.0, 40.0, 50.0),
//!     MaterialSpec::standard(),
//! );
//! let geometry = derive_geometry(&request, &DerivationConfig::default()).unwrap();
//! let text = build_expression_table(&request, &geometry, &ExportOptions::default()).render();
//!
//! assert!(text.contains("[Inch]crate_overall_width_OD = 45.000"));
//! assert!(!text.contains("Generated:"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builder;
mod error;
mod table;
mod writer;

pub use builder::{ExportOptions, SUPPRESSED_WIDTH, build_expression_table};
pub use error::{ExpressionError, ExpressionResult};
pub use table::{Entry, Expression, ExpressionTable, Section, Unit, Value};
pub use writer::write_expressions;
