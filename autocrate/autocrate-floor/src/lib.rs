//! Floorboard packing solver.
//!
//! Floorboards run across the crate (their length is the crate width) and are
//! laid side by side along the skids between the two end panel caps. The
//! solver fills that span greedily with the widest standard lumber that fits,
//! then disposes of the leftover as a custom-ripped board, an allowed middle
//! gap, or an uncovered residual.
//!
//! # Example
//!
//! ```
//! use autocrate_floor::{FloorboardParams, plan_floorboards};
//! use autocrate_types::{FloorResolution, MaterialSpec};
//!
//! let params = FloorboardParams::new(45.0, 60.0, &MaterialSpec::standard());
//! let derived = plan_floorboards(&params).unwrap();
//!
//! // 58.0 usable: five 11.25 boards leave 1.75, too narrow to cut, too wide to leave open
//! assert_eq!(derived.value.resolution, FloorResolution::Uncovered);
//! assert!(derived.has_warnings());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod packing;
mod params;

pub use packing::plan_floorboards;
pub use params::FloorboardParams;
