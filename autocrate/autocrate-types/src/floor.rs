//! Floorboard layout records.

/// Whether a board is cut from standard stock or ripped to a custom width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardKind {
    /// Standard lumber width.
    Standard,
    /// Custom-ripped board filling the residual.
    Custom,
}

/// A single placed floorboard.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    /// Actual board width, measured along Y.
    pub width: f64,
    /// Absolute Y of the board's leading edge.
    pub y_position: f64,
    /// Stock the board is cut from.
    pub kind: BoardKind,
}

impl Board {
    /// Y of the trailing edge.
    #[must_use]
    pub fn end_y(&self) -> f64 {
        self.y_position + self.width
    }

    /// Returns `true` for the custom-ripped board.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self.kind, BoardKind::Custom)
    }
}

/// Which branch resolved the residual left by the greedy fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloorResolution {
    /// Standard boards filled the span exactly.
    Exact,
    /// A sub-minimum custom board was forced in.
    ForcedCustomBoard,
    /// A custom board filled the residual.
    CustomBoard,
    /// The residual was left as an allowed middle gap.
    MiddleGap,
    /// The residual could not be covered and was left open.
    Uncovered,
}

impl FloorResolution {
    /// Get a human-readable name for the resolution.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact fill",
            Self::ForcedCustomBoard => "forced custom board",
            Self::CustomBoard => "custom board",
            Self::MiddleGap => "middle gap",
            Self::Uncovered => "uncovered residual",
        }
    }
}

impl std::fmt::Display for FloorResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete floorboard layout across the usable span.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorboardPlan {
    /// Boards in layout order; the custom board, if any, is last.
    pub boards: Vec<Board>,
    /// Board length (the crate width).
    pub board_length: f64,
    /// Board thickness.
    pub thickness: f64,
    /// Span available for boards between the end panel caps.
    pub usable_span: f64,
    /// Y where the first board starts (the cap-end gap).
    pub start_offset: f64,
    /// Unfilled gap between the standard boards (0 if none).
    pub middle_gap: f64,
    /// Width of the custom board (0 if none).
    pub custom_width: f64,
    /// Residual left uncovered (0 unless `resolution` is `Uncovered`).
    pub uncovered: f64,
    /// How the residual was resolved.
    pub resolution: FloorResolution,
}

impl FloorboardPlan {
    /// Number of boards including the custom board.
    #[must_use]
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// Number of standard-width boards.
    #[must_use]
    pub fn standard_count(&self) -> usize {
        self.boards.iter().filter(|b| !b.is_custom()).count()
    }

    /// Sum of the standard board widths.
    #[must_use]
    pub fn standard_width_total(&self) -> f64 {
        self.boards
            .iter()
            .filter(|b| !b.is_custom())
            .map(|b| b.width)
            .sum()
    }

    /// Sum of every board, gap and uncovered residual; equals `usable_span`.
    #[must_use]
    pub fn covered_total(&self) -> f64 {
        self.standard_width_total() + self.custom_width + self.middle_gap + self.uncovered
    }

    /// The custom board, if one was placed.
    #[must_use]
    pub fn custom_board(&self) -> Option<&Board> {
        self.boards.iter().find(|b| b.is_custom())
    }
}
