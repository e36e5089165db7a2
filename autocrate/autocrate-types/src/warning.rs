//! Non-fatal geometry findings.
//!
//! Extreme inputs can drive a computed length below zero. Solvers clamp such
//! values to 0 and report a [`GeometryWarning`] so the caller learns the design
//! is physically infeasible.

/// Kind of geometry warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryWarningKind {
    /// A computed dimension was negative and has been clamped to zero.
    ClampedToZero,
    /// A floorboard residual was too small for a custom board and too large
    /// for an allowed middle gap; it is left uncovered.
    UncoveredFloor,
}

impl GeometryWarningKind {
    /// Get a human-readable name for the warning kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClampedToZero => "Clamped To Zero",
            Self::UncoveredFloor => "Uncovered Floor",
        }
    }
}

/// A non-fatal finding raised during derivation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryWarning {
    /// What went wrong.
    pub kind: GeometryWarningKind,
    /// The component dimension concerned (e.g. `end_panel.width`).
    pub subject: String,
    /// The raw value before clamping, or the uncovered residual.
    pub value: f64,
}

impl GeometryWarning {
    /// Warning for a negative value clamped to zero.
    #[must_use]
    pub fn clamped(subject: impl Into<String>, raw: f64) -> Self {
        Self {
            kind: GeometryWarningKind::ClampedToZero,
            subject: subject.into(),
            value: raw,
        }
    }

    /// Warning for an uncovered floorboard residual.
    #[must_use]
    pub fn uncovered_floor(residual: f64) -> Self {
        Self {
            kind: GeometryWarningKind::UncoveredFloor,
            subject: "floorboards.residual".to_string(),
            value: residual,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> String {
        match self.kind {
            GeometryWarningKind::ClampedToZero => format!(
                "{} computed as {:.4}, clamped to 0; the design is infeasible",
                self.subject, self.value
            ),
            GeometryWarningKind::UncoveredFloor => format!(
                "floorboard residual of {:.4} is neither coverable nor an allowed gap",
                self.value
            ),
        }
    }
}

impl std::fmt::Display for GeometryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.description())
    }
}

/// A solver output together with the warnings raised while computing it.
///
/// # Example
///
/// ```
/// use autocrate_types::{Derived, GeometryWarning};
///
/// let mut warnings = Vec::new();
/// let length = autocrate_types::clamp_non_negative("cleat.length", -2.0, &mut warnings);
/// let derived = Derived::new(length, warnings);
///
/// assert!((derived.value - 0.0).abs() < f64::EPSILON);
/// assert!(derived.has_warnings());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Derived<T> {
    /// The computed record.
    pub value: T,
    /// Warnings raised while computing it.
    pub warnings: Vec<GeometryWarning>,
}

impl<T> Derived<T> {
    /// Wrap a value with its warnings.
    #[must_use]
    pub const fn new(value: T, warnings: Vec<GeometryWarning>) -> Self {
        Self { value, warnings }
    }

    /// Wrap a value that raised no warnings.
    #[must_use]
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Returns `true` if any warning was raised.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Move the warnings into `sink` and return the value.
    pub fn collect_into(self, sink: &mut Vec<GeometryWarning>) -> T {
        sink.extend(self.warnings);
        self.value
    }

    /// Split into value and warnings.
    #[must_use]
    pub fn into_parts(self) -> (T, Vec<GeometryWarning>) {
        (self.value, self.warnings)
    }
}

/// Clamp `value` to zero, recording a warning when it was negative.
pub fn clamp_non_negative(subject: &str, value: f64, warnings: &mut Vec<GeometryWarning>) -> f64 {
    if value < 0.0 {
        warnings.push(GeometryWarning::clamped(subject, value));
        0.0
    } else {
        value
    }
}
