//! Skid profile and layout records.

/// Lumber profile selected for the skids.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkidProfile {
    /// Actual skid height.
    pub height: f64,
    /// Actual skid width.
    pub width: f64,
    /// Nominal lumber callout for the bill of materials.
    pub lumber_callout: String,
    /// Maximum center-to-center spacing between adjacent skids.
    pub max_spacing: f64,
    /// Set when no weight bracket matched and the heaviest profile was used.
    pub defaulted: bool,
}

impl SkidProfile {
    /// Create a profile.
    #[must_use]
    pub fn new(
        height: f64,
        width: f64,
        lumber_callout: impl Into<String>,
        max_spacing: f64,
    ) -> Self {
        Self {
            height,
            width,
            lumber_callout: lumber_callout.into(),
            max_spacing,
            defaulted: false,
        }
    }

    /// Mark the profile as a fallback default.
    #[must_use]
    pub fn defaulted(mut self) -> Self {
        self.defaulted = true;
        self
    }
}

/// Skid count and centerline placement.
///
/// Positions are measured along X from the crate centerline.
///
/// # Example
///
/// ```
/// use autocrate_types::{SkidPlan, SkidProfile};
///
/// let plan = SkidPlan {
///     profile: SkidProfile::new(3.5, 3.5, "4x4", 30.0),
///     length: 105.0,
///     count: 3,
///     pitch: 20.75,
///     first_position_x: -20.75,
///     master_origin_offset_x: -22.5,
/// };
///
/// let positions: Vec<f64> = plan.positions().collect();
/// assert_eq!(positions.len(), 3);
/// assert!(positions.iter().sum::<f64>().abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkidPlan {
    /// Selected lumber profile.
    pub profile: SkidProfile,
    /// Skid model length (the crate length).
    pub length: f64,
    /// Number of skids (>= 1).
    pub count: usize,
    /// Center-to-center spacing (0 for a single skid).
    pub pitch: f64,
    /// Centerline X of the first skid.
    pub first_position_x: f64,
    /// X of the first skid's outer edge; the CAD pattern origin.
    pub master_origin_offset_x: f64,
}

impl SkidPlan {
    /// Centerline X of every skid, first to last.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f64 * self.pitch;
            self.first_position_x + offset
        })
    }

    /// Overall width spanned by the outer skid faces.
    #[must_use]
    pub fn footprint_width(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let spans = self.count.saturating_sub(1) as f64;
        spans * self.pitch + self.profile.width
    }
}
