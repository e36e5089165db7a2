//! The assembled derivation output.

use crate::floor::FloorboardPlan;
use crate::panel::{PanelBoxes, PanelComponents, PanelKind};
use crate::skid::SkidPlan;
use crate::warning::GeometryWarning;

/// Components of every panel type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelSetComponents {
    /// Front panel components.
    pub front: PanelComponents,
    /// Back panel components.
    pub back: PanelComponents,
    /// End panel components (left and right).
    pub end: PanelComponents,
    /// Top panel components.
    pub top: PanelComponents,
}

impl PanelSetComponents {
    /// Components for `kind`.
    #[must_use]
    pub const fn get(&self, kind: PanelKind) -> &PanelComponents {
        match kind {
            PanelKind::Front => &self.front,
            PanelKind::Back => &self.back,
            PanelKind::End => &self.end,
            PanelKind::Top => &self.top,
        }
    }
}

/// Complete geometry of one crate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrateGeometry {
    /// Overall crate width (product width plus side clearances).
    pub crate_width: f64,
    /// Overall crate length (product length plus side clearances).
    pub crate_length: f64,
    /// Skid layout.
    pub skids: SkidPlan,
    /// Floorboard layout.
    pub floorboards: FloorboardPlan,
    /// Panel assembly boxes.
    pub panels: PanelBoxes,
    /// Sheathing and cleats of every panel.
    pub components: PanelSetComponents,
    /// Non-fatal findings, in derivation order.
    pub warnings: Vec<GeometryWarning>,
}

impl CrateGeometry {
    /// Returns `true` if the derivation raised no warnings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
