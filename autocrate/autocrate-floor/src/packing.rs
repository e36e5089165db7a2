//! Greedy floorboard fill and residual resolution.

use autocrate_types::{
    Board, BoardKind, DerivationResult, Derived, FloorResolution, FloorboardPlan,
    GeometryWarning, clamp_non_negative,
};
use tracing::debug;

use crate::params::FloorboardParams;

/// Fill the usable span with standard boards, widest first, then resolve what is left.
///
/// The residual is resolved in priority order:
///
/// 1. forcing allowed and the residual within
///    `[forceable_min, min_custom)`: a forced custom board
/// 2. residual at least `min_custom_width`: a custom board
///
/// Neither custom branch applies to a residual within `epsilon`.
/// 3. residual within `(epsilon, max_gap]`: an open middle gap
/// 4. residual within `epsilon`: an exact fill; anything larger is left
///    uncovered and reported with a [`GeometryWarning`]
///
/// Comparisons are made with `params.epsilon` tolerance. The custom board is
/// placed last; a middle gap goes after standard board `ceil(n / 2) - 1`.
///
/// # Errors
///
/// Returns [`DerivationError::InvalidInput`](autocrate_types::DerivationError::InvalidInput)
/// if `params` fails [`FloorboardParams::validate`].
///
/// # Example
///
/// ```
/// use autocrate_floor::{FloorboardParams, plan_floorboards};
/// use autocrate_types::{FloorResolution, MaterialSpec};
///
/// // 25.0 usable: two 11.25 boards and a 2.5 custom board
/// let params = FloorboardParams::new(45.0, 27.0, &MaterialSpec::standard());
/// let plan = plan_floorboards(&params).unwrap().value;
///
/// assert_eq!(plan.board_count(), 3);
/// assert_eq!(plan.resolution, FloorResolution::CustomBoard);
/// assert!((plan.custom_width - 2.5).abs() < 1e-9);
/// ```
pub fn plan_floorboards(params: &FloorboardParams) -> DerivationResult<Derived<FloorboardPlan>> {
    params.validate()?;

    let eps = params.epsilon;
    let mut warnings = Vec::new();
    let span = clamp_non_negative("floorboards.usable_span", params.usable_span(), &mut warnings);

    let standard = greedy_fill(&params.standard_widths, span, eps);
    let remaining = span - standard.iter().sum::<f64>();

    let fill = resolve_residual(params, remaining);
    let (custom_width, middle_gap, uncovered, resolution) = match fill {
        Residual::Custom { width, forced } => {
            let covered: f64 = standard.iter().sum::<f64>() + width;
            let gap = span - covered;
            let gap = if gap > eps && gap <= params.max_gap + eps {
                gap
            } else {
                0.0
            };
            let resolution = if forced {
                FloorResolution::ForcedCustomBoard
            } else {
                FloorResolution::CustomBoard
            };
            (width, gap, 0.0, resolution)
        }
        Residual::Gap(gap) => (0.0, gap, 0.0, FloorResolution::MiddleGap),
        Residual::Exact => (0.0, 0.0, 0.0, FloorResolution::Exact),
        Residual::Uncovered(residual) => {
            warnings.push(GeometryWarning::uncovered_floor(residual));
            (0.0, 0.0, residual, FloorResolution::Uncovered)
        }
    };

    let boards = lay_out(&standard, custom_width, middle_gap, params.cap_end_gap, eps);

    debug!(
        usable_span = format!("{span:.4}"),
        standard_boards = standard.len(),
        custom_width = format!("{custom_width:.4}"),
        middle_gap = format!("{middle_gap:.4}"),
        resolution = %resolution,
        "Floorboard layout resolved"
    );

    let plan = FloorboardPlan {
        boards,
        board_length: params.board_length,
        thickness: params.thickness,
        usable_span: span,
        start_offset: params.cap_end_gap,
        middle_gap,
        custom_width,
        uncovered,
        resolution,
    };
    Ok(Derived::new(plan, warnings))
}

/// How the post-fill residual is disposed of.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Residual {
    Custom { width: f64, forced: bool },
    Gap(f64),
    Exact,
    Uncovered(f64),
}

fn resolve_residual(params: &FloorboardParams, remaining: f64) -> Residual {
    let eps = params.epsilon;
    // a residual within eps is never a board, however small the minimums
    let board_sized = remaining > eps;
    let forceable = params.force_small_custom_board
        && board_sized
        && remaining >= params.forceable_min_custom_width - eps
        && remaining < params.min_custom_width + eps;

    if forceable {
        Residual::Custom {
            width: remaining,
            forced: true,
        }
    } else if board_sized && remaining >= params.min_custom_width - eps {
        Residual::Custom {
            width: remaining,
            forced: false,
        }
    } else if remaining > eps && remaining <= params.max_gap + eps {
        Residual::Gap(remaining)
    } else if remaining <= eps {
        Residual::Exact
    } else {
        Residual::Uncovered(remaining)
    }
}

/// Take the widest width that still fits, repeatedly, until none does.
///
/// Once a width stops fitting it never fits again, so each width is taken
/// `floor((remaining + eps) / width)` times in one step.
fn greedy_fill(widths: &[f64], span: f64, eps: f64) -> Vec<f64> {
    let mut sorted = widths.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let mut pieces = Vec::new();
    let mut remaining = span;
    for width in sorted {
        let fits = ((remaining + eps) / width).floor();
        if fits < 1.0 {
            continue;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = fits as usize;
        pieces.extend(std::iter::repeat_n(width, count));
        remaining -= fits * width;
    }
    pieces
}

/// Assign Y positions from `start`, standard boards first, custom board last.
fn lay_out(
    standard: &[f64],
    custom_width: f64,
    middle_gap: f64,
    start: f64,
    eps: f64,
) -> Vec<Board> {
    let has_custom = custom_width > eps;
    let gap_after = (middle_gap > eps && !has_custom)
        .then(|| standard.len().div_ceil(2).saturating_sub(1));

    let mut boards = Vec::with_capacity(standard.len() + usize::from(has_custom));
    let mut y = start;
    for (i, &width) in standard.iter().enumerate() {
        boards.push(Board {
            width,
            y_position: y,
            kind: BoardKind::Standard,
        });
        y += width;
        if gap_after == Some(i) {
            y += middle_gap;
        }
    }
    if has_custom {
        boards.push(Board {
            width: custom_width,
            y_position: y,
            kind: BoardKind::Custom,
        });
    }
    boards
}
