//! Derivation inputs: product, material stock and feature flags.

use crate::error::{DerivationError, DerivationResult, require_non_negative, require_positive};

/// Physical description of the product being crated.
///
/// # Example
///
/// ```
/// use autocrate_types::ProductSpec;
///
/// let product = ProductSpec::new(300.0, 100.0, 40.0, 50.0)
///     .with_side_clearance(2.5)
///     .with_above_clearance(2.0);
///
/// assert!((product.crate_width() - 45.0).abs() < 1e-10);
/// assert!((product.crate_length() - 105.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductSpec {
    /// Product weight in pounds (>= 0).
    pub weight: f64,
    /// Product length along the skids, in inches.
    pub length: f64,
    /// Product width across the skids, in inches.
    pub width: f64,
    /// Product height, in inches.
    pub height: f64,
    /// Clearance added on every side of the product.
    pub side_clearance: f64,
    /// Clearance between the product top and the top panel.
    pub above_clearance: f64,
}

impl ProductSpec {
    /// Create a product with the default clearances (2.5 each side, 2.0 above).
    #[must_use]
    pub const fn new(weight: f64, length: f64, width: f64, height: f64) -> Self {
        Self {
            weight,
            length,
            width,
            height,
            side_clearance: 2.5,
            above_clearance: 2.0,
        }
    }

    /// Set the side clearance (builder pattern).
    #[must_use]
    pub const fn with_side_clearance(mut self, clearance: f64) -> Self {
        self.side_clearance = clearance;
        self
    }

    /// Set the clearance above the product (builder pattern).
    #[must_use]
    pub const fn with_above_clearance(mut self, clearance: f64) -> Self {
        self.above_clearance = clearance;
        self
    }

    /// Overall crate width: product width plus clearance on both sides.
    #[must_use]
    pub fn crate_width(&self) -> f64 {
        self.width + 2.0 * self.side_clearance
    }

    /// Overall crate length: product length plus clearance on both ends.
    ///
    /// This is also the skid model length.
    #[must_use]
    pub fn crate_length(&self) -> f64 {
        self.length + 2.0 * self.side_clearance
    }

    /// Check every field against its constraint.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::InvalidInput`] for the first violated field.
    pub fn validate(&self) -> DerivationResult<()> {
        require_non_negative("product.weight", self.weight)?;
        require_positive("product.length", self.length)?;
        require_positive("product.width", self.width)?;
        require_positive("product.height", self.height)?;
        require_non_negative("product.side_clearance", self.side_clearance)?;
        require_non_negative("product.above_clearance", self.above_clearance)
    }
}

/// Lumber and sheet stock used to build the crate.
///
/// # Example
///
/// ```
/// use autocrate_types::MaterialSpec;
///
/// let material = MaterialSpec::standard();
/// assert!((material.assembly_depth() - 1.0).abs() < 1e-10);
/// assert_eq!(material.standard_widths.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialSpec {
    /// Panel sheathing (plywood) thickness.
    pub sheathing_thickness: f64,
    /// Cleat thickness, measured off the sheathing face.
    pub cleat_thickness: f64,
    /// Cleat face width, measured on the sheathing face.
    pub cleat_member_width: f64,
    /// Floorboard thickness.
    pub floorboard_thickness: f64,
    /// Actual widths of the available standard floorboard lumber.
    pub standard_widths: Vec<f64>,
    /// Narrowest custom-ripped floorboard that may be cut.
    pub min_custom_width: f64,
    /// Widest residual gap allowed between floorboards.
    pub max_gap: f64,
    /// Ground clearance under the end panels.
    pub ground_clearance: f64,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        Self::standard()
    }
}

impl MaterialSpec {
    /// Reference stock: 1/4 sheathing, 3/4 x 3.5 cleats, 1.5 floorboards in
    /// 2x6 through 2x12 widths.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            sheathing_thickness: 0.25,
            cleat_thickness: 0.75,
            cleat_member_width: 3.5,
            floorboard_thickness: 1.5,
            standard_widths: vec![5.5, 7.25, 9.25, 11.25],
            min_custom_width: 2.5,
            max_gap: 0.25,
            ground_clearance: 1.0,
        }
    }

    /// Set the sheathing thickness.
    #[must_use]
    pub const fn with_sheathing_thickness(mut self, thickness: f64) -> Self {
        self.sheathing_thickness = thickness;
        self
    }

    /// Set the cleat stock (thickness and face width).
    #[must_use]
    pub const fn with_cleat(mut self, thickness: f64, member_width: f64) -> Self {
        self.cleat_thickness = thickness;
        self.cleat_member_width = member_width;
        self
    }

    /// Set the floorboard thickness.
    #[must_use]
    pub const fn with_floorboard_thickness(mut self, thickness: f64) -> Self {
        self.floorboard_thickness = thickness;
        self
    }

    /// Replace the available standard widths.
    #[must_use]
    pub fn with_standard_widths(mut self, widths: impl Into<Vec<f64>>) -> Self {
        self.standard_widths = widths.into();
        self
    }

    /// Set the minimum custom board width.
    #[must_use]
    pub const fn with_min_custom_width(mut self, width: f64) -> Self {
        self.min_custom_width = width;
        self
    }

    /// Set the maximum allowed middle gap.
    #[must_use]
    pub const fn with_max_gap(mut self, gap: f64) -> Self {
        self.max_gap = gap;
        self
    }

    /// Set the end panel ground clearance.
    #[must_use]
    pub const fn with_ground_clearance(mut self, clearance: f64) -> Self {
        self.ground_clearance = clearance;
        self
    }

    /// Panel assembly depth: sheathing plus cleat thickness.
    ///
    /// Shared by all four panel types, and consumed twice from the floorboard
    /// span as the cap-end gap.
    #[must_use]
    pub fn assembly_depth(&self) -> f64 {
        self.sheathing_thickness + self.cleat_thickness
    }

    /// Check every field against its constraint.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::InvalidInput`] for the first violated field.
    pub fn validate(&self) -> DerivationResult<()> {
        require_positive("material.sheathing_thickness", self.sheathing_thickness)?;
        require_positive("material.cleat_thickness", self.cleat_thickness)?;
        require_positive("material.cleat_member_width", self.cleat_member_width)?;
        require_positive("material.floorboard_thickness", self.floorboard_thickness)?;
        validate_standard_widths(&self.standard_widths)?;
        require_positive("material.min_custom_width", self.min_custom_width)?;
        require_non_negative("material.max_gap", self.max_gap)?;
        require_non_negative("material.ground_clearance", self.ground_clearance)
    }
}

/// Check a standard lumber width set: non-empty, every width finite and positive.
///
/// # Errors
///
/// Returns [`DerivationError::InvalidInput`] on `material.standard_widths`.
pub fn validate_standard_widths(widths: &[f64]) -> DerivationResult<()> {
    if widths.is_empty() {
        return Err(DerivationError::invalid_input(
            "material.standard_widths",
            "no standard lumber widths selected for floorboards",
        ));
    }
    if let Some(bad) = widths.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
        return Err(DerivationError::invalid_input(
            "material.standard_widths",
            format!("every width must be positive (got {bad})"),
        ));
    }
    Ok(())
}

/// Boolean switches that alter solver choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureFlags {
    /// Allow light 3x4 skid stock for loads under 500 lb.
    pub allow_light_skids: bool,
    /// Fill a tiny floorboard residual with a sub-minimum custom board.
    pub force_small_custom_board: bool,
}

impl FeatureFlags {
    /// Flags as the reference form presents them: light skids allowed, no forcing.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            allow_light_skids: true,
            force_small_custom_board: false,
        }
    }
}

/// A complete derivation request.
///
/// # Example
///
/// ```
/// use autocrate_types::{DerivationRequest, FeatureFlags, MaterialSpec, ProductSpec};
///
/// let request = DerivationRequest::new(
///     ProductSpec::new(300.0, 100.0, 40.0, 50.0),
///     MaterialSpec::standard(),
/// )
/// .with_flags(FeatureFlags::standard());
///
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivationRequest {
    /// The product being crated.
    pub product: ProductSpec,
    /// Stock used to build the crate.
    pub material: MaterialSpec,
    /// Feature switches.
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: FeatureFlags,
}

impl DerivationRequest {
    /// Create a request with default flags.
    #[must_use]
    pub fn new(product: ProductSpec, material: MaterialSpec) -> Self {
        Self {
            product,
            material,
            flags: FeatureFlags::default(),
        }
    }

    /// Set the feature flags (builder pattern).
    #[must_use]
    pub const fn with_flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Validate the product and material fields.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::InvalidInput`] for the first violated field.
    pub fn validate(&self) -> DerivationResult<()> {
        self.product.validate()?;
        self.material.validate()
    }
}
