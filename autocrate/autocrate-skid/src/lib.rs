//! Skid layout solver.
//!
//! Picks skid lumber from a weight-bracket [`SkidTable`] and spaces the skids
//! symmetrically about the crate centerline so that no spacing exceeds the
//! profile's maximum and the outer skid faces sit flush with the crate sides.
//!
//! # Example
//!
//! ```
//! use autocrate_skid::{SkidTable, plan_skids};
//! use autocrate_types::ProductSpec;
//!
//! let product = ProductSpec::new(8000.0, 120.0, 60.0, 48.0);
//! let plan = plan_skids(&product, false, &SkidTable::standard(), 0.001).unwrap();
//!
//! assert_eq!(plan.profile.lumber_callout, "4x6");
//! assert_eq!(plan.count, 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod layout;
mod table;

pub use layout::{MAX_SKID_COUNT, plan_skids};
pub use table::{BracketRule, SkidBracket, SkidTable};
