//! Panel assembly boxes and their components.

/// The four panel assembly types; the end panel serves both left and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelKind {
    /// Front panel.
    Front,
    /// Back panel, same size as the front.
    Back,
    /// Left and right end panels.
    End,
    /// Top panel.
    Top,
}

impl PanelKind {
    /// All kinds, in derivation order.
    pub const ALL: [Self; 4] = [Self::Front, Self::Back, Self::End, Self::Top];

    /// Lowercase name, used in warning subjects.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::End => "end",
            Self::Top => "top",
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall bounding box of one panel assembly.
///
/// For the top panel `height` is the length along the crate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelBox {
    /// Overall width.
    pub width: f64,
    /// Overall height (or length, for the top panel).
    pub height: f64,
    /// Assembly depth: sheathing plus cleat thickness.
    pub depth: f64,
}

impl PanelBox {
    /// Create a box.
    #[must_use]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Resolved boxes for every panel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelBoxes {
    /// Shared assembly depth.
    pub assembly_depth: f64,
    /// Front panel.
    pub front: PanelBox,
    /// Back panel.
    pub back: PanelBox,
    /// End panels (left and right).
    pub end: PanelBox,
    /// Top panel.
    pub top: PanelBox,
}

impl PanelBoxes {
    /// The box for `kind`.
    #[must_use]
    pub const fn get(&self, kind: PanelKind) -> &PanelBox {
        match kind {
            PanelKind::Front => &self.front,
            PanelKind::Back => &self.back,
            PanelKind::End => &self.end,
            PanelKind::Top => &self.top,
        }
    }
}

/// Direction a cleat runs on its panel face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CleatOrientation {
    /// Runs across the panel width.
    Horizontal,
    /// Runs up the panel height.
    Vertical,
    /// Runs along the crate length (top panel).
    Lengthwise,
    /// Runs across the crate width (top panel).
    Crosswise,
}

impl CleatOrientation {
    /// Uppercase tag used in expression exports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "HORIZONTAL",
            Self::Vertical => "VERTICAL",
            Self::Lengthwise => "LENGTHWISE",
            Self::Crosswise => "CROSSWISE",
        }
    }
}

/// Sheathing sheet of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheathing {
    /// Sheet width.
    pub width: f64,
    /// Sheet height (length, for the top panel).
    pub height: f64,
    /// Sheet thickness.
    pub thickness: f64,
}

/// A matched pair (or set) of identical cleats.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleatGroup {
    /// Run direction.
    pub orientation: CleatOrientation,
    /// Cut length of each cleat.
    pub length: f64,
    /// Cleat thickness.
    pub thickness: f64,
    /// Cleat face width.
    pub member_width: f64,
    /// Number of cleats in the group.
    pub count: usize,
}

/// Evenly spaced cleats inside the perimeter frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntermediateCleats {
    /// Run direction.
    pub orientation: CleatOrientation,
    /// Number of intermediate cleats (may be 0).
    pub count: usize,
    /// Center-to-center spacing (0 when `count` is 0).
    pub pitch: f64,
    /// Cut length of each cleat (0 when `count` is 0).
    pub length: f64,
}

/// Sheathing and cleats of one panel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelComponents {
    /// Which panel these components belong to.
    pub kind: PanelKind,
    /// The sheathing sheet.
    pub sheathing: Sheathing,
    /// Cleats running the full panel dimension.
    pub primary: CleatGroup,
    /// Cleats fitted between the primary pair.
    pub secondary: CleatGroup,
    /// Intermediate cleats, when the cleat model adds them.
    pub intermediate: Option<IntermediateCleats>,
}

impl PanelComponents {
    /// Total number of cleats on the panel.
    #[must_use]
    pub fn cleat_count(&self) -> usize {
        self.primary.count + self.secondary.count + self.intermediate.map_or(0, |i| i.count)
    }
}
