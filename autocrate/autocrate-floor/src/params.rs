//! Parameters for floorboard packing.

use autocrate_types::{
    DEFAULT_EPSILON, DerivationError, DerivationResult, MaterialSpec, require_non_negative,
    require_positive,
    validate_standard_widths,
};

/// Inputs to [`plan_floorboards`](crate::plan_floorboards).
///
/// # Example
///
/// ```
/// use autocrate_floor::FloorboardParams;
/// use autocrate_types::MaterialSpec;
///
/// let params = FloorboardParams::new(45.0, 105.0, &MaterialSpec::standard());
/// assert!((params.cap_end_gap - 1.0).abs() < 1e-10);
/// assert!((params.usable_span() - 103.0).abs() < 1e-10);
///
/// let forced = params.with_force_small_custom_board(true);
/// assert!(forced.force_small_custom_board);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FloorboardParams {
    /// Board length (the crate width).
    pub board_length: f64,
    /// Skid model length the boards are laid along.
    pub skid_length: f64,
    /// Gap left at each end for the end panel assembly.
    pub cap_end_gap: f64,
    /// Board thickness.
    pub thickness: f64,
    /// Available standard widths, in any order.
    pub standard_widths: Vec<f64>,
    /// Widest residual that may stay open as a middle gap.
    pub max_gap: f64,
    /// Narrowest custom board cut without forcing.
    pub min_custom_width: f64,
    /// Allow a custom board narrower than `min_custom_width`.
    pub force_small_custom_board: bool,
    /// Narrowest custom board cut when forcing.
    pub forceable_min_custom_width: f64,
    /// Comparison tolerance.
    pub epsilon: f64,
}

impl FloorboardParams {
    /// Default narrowest forced custom board.
    pub const DEFAULT_FORCEABLE_MIN: f64 = 0.25;

    /// Most boards a layout may hold.
    pub const MAX_BOARDS: usize = 100_000;

    /// Build parameters from the crate size and material stock.
    ///
    /// The cap-end gap is the panel assembly depth.
    #[must_use]
    pub fn new(board_length: f64, skid_length: f64, material: &MaterialSpec) -> Self {
        Self {
            board_length,
            skid_length,
            cap_end_gap: material.assembly_depth(),
            thickness: material.floorboard_thickness,
            standard_widths: material.standard_widths.clone(),
            max_gap: material.max_gap,
            min_custom_width: material.min_custom_width,
            force_small_custom_board: false,
            forceable_min_custom_width: Self::DEFAULT_FORCEABLE_MIN,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Enable or disable forcing a sub-minimum custom board.
    #[must_use]
    pub const fn with_force_small_custom_board(mut self, force: bool) -> Self {
        self.force_small_custom_board = force;
        self
    }

    /// Set the narrowest forced custom board.
    #[must_use]
    pub const fn with_forceable_min_custom_width(mut self, width: f64) -> Self {
        self.forceable_min_custom_width = width;
        self
    }

    /// Set the comparison tolerance.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Span between the cap-end gaps, before clamping.
    #[must_use]
    pub fn usable_span(&self) -> f64 {
        self.skid_length - 2.0 * self.cap_end_gap
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::InvalidInput`](autocrate_types::DerivationError::InvalidInput)
    /// for an empty or non-positive width set, a non-positive thickness or
    /// length, a negative gap, or a span that would take more than
    /// [`MAX_BOARDS`](Self::MAX_BOARDS) of the narrowest width.
    pub fn validate(&self) -> DerivationResult<()> {
        validate_standard_widths(&self.standard_widths)?;
        require_positive("material.floorboard_thickness", self.thickness)?;
        require_positive("floorboards.board_length", self.board_length)?;
        require_positive("floorboards.skid_length", self.skid_length)?;
        require_non_negative("floorboards.cap_end_gap", self.cap_end_gap)?;
        require_positive("material.min_custom_width", self.min_custom_width)?;
        require_non_negative("material.max_gap", self.max_gap)?;

        let narrowest = self
            .standard_widths
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        #[allow(clippy::cast_precision_loss)]
        let limit = Self::MAX_BOARDS as f64;
        if self.usable_span() / narrowest > limit {
            return Err(DerivationError::invalid_input(
                "floorboards.skid_length",
                format!(
                    "a {} span needs more than {} boards of width {narrowest}",
                    self.usable_span(),
                    Self::MAX_BOARDS
                ),
            ));
        }
        Ok(())
    }
}
