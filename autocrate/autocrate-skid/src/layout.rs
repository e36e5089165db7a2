//! Skid count, pitch and centerline placement.

use autocrate_types::{
    DerivationError, DerivationResult, ProductSpec, SkidPlan, require_non_negative,
    require_positive,
};
use tracing::debug;

use crate::table::SkidTable;

/// Largest skid count a layout may use.
pub const MAX_SKID_COUNT: usize = 10_000;

/// Choose skid stock for the load and lay the skids out symmetrically about X = 0.
///
/// The crate width `W = width + 2 * side_clearance` decides the count. When
/// `W <= skid_width + epsilon` a single centered skid is used; otherwise
/// `count = max(2, ceil((W - skid_width) / max_spacing) + 1)` and the outer
/// skid faces land flush with the crate sides.
///
/// # Errors
///
/// Returns [`DerivationError::InvalidInput`](autocrate_types::DerivationError::InvalidInput)
/// for a negative or non-finite weight, a non-positive length or width, a
/// negative side clearance, when no bracket of `table` matches the load, or
/// when the crate is so wide the skid count exceeds [`MAX_SKID_COUNT`].
///
/// # Example
///
/// ```
/// use autocrate_skid::{SkidTable, plan_skids};
/// use autocrate_types::ProductSpec;
///
/// let product = ProductSpec::new(300.0, 100.0, 40.0, 50.0);
/// let plan = plan_skids(&product, true, &SkidTable::standard(), 0.001).unwrap();
///
/// assert_eq!(plan.count, 3);
/// assert!((plan.pitch - 21.25).abs() < 1e-10);
/// assert!((plan.length - 105.0).abs() < 1e-10);
/// ```
pub fn plan_skids(
    product: &ProductSpec,
    allow_light: bool,
    table: &SkidTable,
    epsilon: f64,
) -> DerivationResult<SkidPlan> {
    require_non_negative("product.weight", product.weight)?;
    require_positive("product.length", product.length)?;
    require_positive("product.width", product.width)?;
    require_non_negative("product.side_clearance", product.side_clearance)?;

    let profile = table.select(product.weight, allow_light)?.clone();
    let crate_width = product.crate_width();
    let length = product.crate_length();

    let (count, pitch, first_position_x) = if crate_width <= profile.width + epsilon {
        (1, 0.0, 0.0)
    } else {
        let free = crate_width - profile.width;
        let count = spacing_count(free, profile.max_spacing).ok_or_else(|| {
            DerivationError::invalid_input(
                "product.width",
                format!(
                    "crate width {crate_width} needs more than {MAX_SKID_COUNT} skids \
                     at {} spacing",
                    profile.max_spacing
                ),
            )
        })?;
        #[allow(clippy::cast_precision_loss)]
        let spans = (count - 1) as f64;
        let pitch = free / spans;
        (count, pitch, -(spans * pitch) / 2.0)
    };

    let master_origin_offset_x = first_position_x - profile.width / 2.0;

    debug!(
        callout = %profile.lumber_callout,
        count,
        pitch = format!("{pitch:.4}"),
        defaulted = profile.defaulted,
        "Skid layout resolved"
    );

    Ok(SkidPlan {
        profile,
        length,
        count,
        pitch,
        first_position_x,
        master_origin_offset_x,
    })
}

/// Skids needed so no centerline spacing exceeds `max_spacing`; at least two.
///
/// `None` when the count would exceed [`MAX_SKID_COUNT`].
fn spacing_count(free: f64, max_spacing: f64) -> Option<usize> {
    let bays = (free / max_spacing).ceil().max(0.0);
    #[allow(clippy::cast_precision_loss)]
    let limit = MAX_SKID_COUNT as f64;
    if bays >= limit {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bays = bays as usize;
    bays.checked_add(1).map(|count| count.max(2))
}
