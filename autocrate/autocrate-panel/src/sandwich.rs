//! Dependency-ordered panel sizing.
//!
//! End panels sit between the front and back panels, front and back cover the
//! end panel edges, and the top covers everything. Each step consumes the
//! result of the one before it:
//!
//! 1. assembly depth (sheathing + cleat)
//! 2. front/back height
//! 3. end height
//! 4. end length: crate length minus front and back depth
//! 5. front/back width: crate width plus both end depths
//! 6. top: front width by crate length

use autocrate_types::{DerivationRequest, Derived, PanelBox, PanelBoxes, clamp_non_negative};
use tracing::debug;

/// How tall the front and back panels are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontHeightRule {
    /// Floorboard, product and clearance above it.
    #[default]
    ProductEnvelope,
    /// As `ProductEnvelope`, extended down the skids to the end panel ground
    /// clearance.
    ToGrade,
}

/// Dimensions the sandwich resolver depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SandwichInputs {
    /// Overall crate width.
    pub crate_width: f64,
    /// Overall crate length.
    pub crate_length: f64,
    /// Sheathing thickness.
    pub sheathing_thickness: f64,
    /// Cleat thickness.
    pub cleat_thickness: f64,
    /// Floorboard thickness.
    pub floorboard_thickness: f64,
    /// Product height.
    pub product_height: f64,
    /// Clearance above the product.
    pub above_clearance: f64,
    /// Height of the selected skid stock.
    pub skid_height: f64,
    /// End panel ground clearance.
    pub ground_clearance: f64,
}

impl SandwichInputs {
    /// Collect the inputs from a request and the chosen skid height.
    #[must_use]
    pub fn from_request(request: &DerivationRequest, skid_height: f64) -> Self {
        let DerivationRequest {
            product, material, ..
        } = request;
        Self {
            crate_width: product.crate_width(),
            crate_length: product.crate_length(),
            sheathing_thickness: material.sheathing_thickness,
            cleat_thickness: material.cleat_thickness,
            floorboard_thickness: material.floorboard_thickness,
            product_height: product.height,
            above_clearance: product.above_clearance,
            skid_height,
            ground_clearance: material.ground_clearance,
        }
    }

    fn envelope_height(&self) -> f64 {
        self.floorboard_thickness + self.product_height + self.above_clearance
    }

    fn skid_drop(&self) -> f64 {
        self.skid_height - self.ground_clearance
    }
}

/// Resolve the boxes of all four panel types in dependency order.
///
/// Negative results are clamped to 0 and reported as warnings.
///
/// # Example
///
/// ```
/// use autocrate_panel::{FrontHeightRule, SandwichInputs, resolve_panel_boxes};
///
/// let inputs = SandwichInputs {
///     crate_width: 45.0,
///     crate_length: 105.0,
///     sheathing_thickness: 0.25,
///     cleat_thickness: 0.75,
///     floorboard_thickness: 1.5,
///     product_height: 50.0,
///     above_clearance: 2.0,
///     skid_height: 3.5,
///     ground_clearance: 1.0,
/// };
/// let boxes = resolve_panel_boxes(&inputs, FrontHeightRule::ProductEnvelope).value;
///
/// assert!((boxes.end.width - 103.0).abs() < 1e-10);
/// assert!((boxes.front.width - 47.0).abs() < 1e-10);
/// assert!((boxes.front.height - 53.5).abs() < 1e-10);
/// assert!((boxes.end.height - 56.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn resolve_panel_boxes(inputs: &SandwichInputs, rule: FrontHeightRule) -> Derived<PanelBoxes> {
    let mut warnings = Vec::new();

    let depth = inputs.sheathing_thickness + inputs.cleat_thickness;

    let front_height = match rule {
        FrontHeightRule::ProductEnvelope => inputs.envelope_height(),
        FrontHeightRule::ToGrade => inputs.envelope_height() + inputs.skid_drop(),
    };
    let front_height = clamp_non_negative("front_panel.height", front_height, &mut warnings);

    let end_height = inputs.envelope_height() + inputs.skid_drop();
    let end_height = clamp_non_negative("end_panel.height", end_height, &mut warnings);

    // end sits between front and back
    let end_length = inputs.crate_length - depth - depth;
    let end_length = clamp_non_negative("end_panel.width", end_length, &mut warnings);

    let front_width = inputs.crate_width + 2.0 * depth;

    let front = PanelBox::new(front_width, front_height, depth);
    let boxes = PanelBoxes {
        assembly_depth: depth,
        front,
        back: front,
        end: PanelBox::new(end_length, end_height, depth),
        top: PanelBox::new(front_width, inputs.crate_length, depth),
    };

    debug!(
        depth,
        front_width,
        front_height,
        end_length,
        end_height,
        rule = ?rule,
        "Panel boxes resolved"
    );

    Derived::new(boxes, warnings)
}
