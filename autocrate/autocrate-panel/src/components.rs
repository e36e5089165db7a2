//! Sheathing and cleat breakdown of a single panel.

use autocrate_types::{
    CleatGroup, CleatOrientation, Derived, GeometryWarning, IntermediateCleats, PanelBox,
    PanelComponents, PanelKind, Sheathing, clamp_non_negative,
};
use tracing::debug;

use crate::stock::{CleatModel, CleatStock, IntermediateCleatRule};

/// Everything the component calculator needs besides the panel box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentParams {
    /// Sheathing thickness.
    pub sheathing_thickness: f64,
    /// Cleat lumber.
    pub stock: CleatStock,
    /// Front panel cleat framing.
    pub model: CleatModel,
    /// Intermediate cleat rule, used by the extended model.
    pub intermediate_rule: IntermediateCleatRule,
}

impl ComponentParams {
    /// Basic-model parameters for the given stock.
    #[must_use]
    pub fn new(sheathing_thickness: f64, stock: CleatStock) -> Self {
        Self {
            sheathing_thickness,
            stock,
            model: CleatModel::Basic,
            intermediate_rule: IntermediateCleatRule::default(),
        }
    }

    /// Set the cleat model.
    #[must_use]
    pub const fn with_model(mut self, model: CleatModel) -> Self {
        self.model = model;
        self
    }

    /// Set the intermediate cleat rule.
    #[must_use]
    pub const fn with_intermediate_rule(mut self, rule: IntermediateCleatRule) -> Self {
        self.intermediate_rule = rule;
        self
    }
}

/// Break a panel box down into sheathing and cleats.
///
/// Every panel gets two primary cleats running a full panel dimension and two
/// secondary cleats fitted between them (`dimension - 2 * member_width`):
///
/// | Panel | Primary | Secondary |
/// |---|---|---|
/// | front, back | horizontal, full width | vertical, between horizontals |
/// | end | vertical, full height | horizontal, between verticals |
/// | top | lengthwise, full length | crosswise, between lengthwise |
///
/// Under [`CleatModel::Extended`] the front panel insets its horizontals as
/// well and adds [`IntermediateCleats`] across the open span. Other panels
/// always use the basic framing.
///
/// Fitted lengths that come out negative are clamped to 0 with a warning.
///
/// # Example
///
/// ```
/// use autocrate_panel::{CleatStock, ComponentParams, calculate_components};
/// use autocrate_types::{PanelBox, PanelKind};
///
/// let params = ComponentParams::new(0.25, CleatStock { thickness: 0.75, member_width: 3.5 });
/// let front = calculate_components(PanelKind::Front, &PanelBox::new(48.0, 60.0, 1.0), &params);
///
/// assert!((front.value.primary.length - 48.0).abs() < 1e-10);
/// assert!((front.value.secondary.length - 53.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn calculate_components(
    kind: PanelKind,
    panel: &PanelBox,
    params: &ComponentParams,
) -> Derived<PanelComponents> {
    let mut warnings = Vec::new();
    let stock = params.stock;
    let inset = 2.0 * stock.member_width;
    let fitted = |subject: &str, full: f64, warnings: &mut Vec<GeometryWarning>| {
        clamp_non_negative(&format!("{kind}_panel.{subject}"), full - inset, warnings)
    };

    let sheathing = Sheathing {
        width: panel.width,
        height: panel.height,
        thickness: params.sheathing_thickness,
    };

    let extended = kind == PanelKind::Front && params.model == CleatModel::Extended;

    let (primary, secondary) = match kind {
        PanelKind::Front | PanelKind::Back => {
            let horizontal = if extended {
                fitted("primary.length", panel.width, &mut warnings)
            } else {
                panel.width
            };
            let vertical = fitted("secondary.length", panel.height, &mut warnings);
            (
                group(CleatOrientation::Horizontal, horizontal, stock),
                group(CleatOrientation::Vertical, vertical, stock),
            )
        }
        PanelKind::End => {
            let horizontal = fitted("secondary.length", panel.width, &mut warnings);
            (
                group(CleatOrientation::Vertical, panel.height, stock),
                group(CleatOrientation::Horizontal, horizontal, stock),
            )
        }
        PanelKind::Top => {
            let crosswise = fitted("secondary.length", panel.width, &mut warnings);
            (
                group(CleatOrientation::Lengthwise, panel.height, stock),
                group(CleatOrientation::Crosswise, crosswise, stock),
            )
        }
    };

    let intermediate = if extended {
        intermediate_cleats(primary.length, secondary.length, &params.intermediate_rule)
    } else {
        None
    };

    if let Some(inter) = &intermediate {
        debug!(
            panel = %kind,
            orientation = inter.orientation.as_str(),
            count = inter.count,
            pitch = format!("{:.4}", inter.pitch),
            "Intermediate cleats placed"
        );
    }

    Derived::new(
        PanelComponents {
            kind,
            sheathing,
            primary,
            secondary,
            intermediate,
        },
        warnings,
    )
}

const fn group(orientation: CleatOrientation, length: f64, stock: CleatStock) -> CleatGroup {
    CleatGroup {
        orientation,
        length,
        thickness: stock.thickness,
        member_width: stock.member_width,
        count: 2,
    }
}

/// Intermediates for an extended front panel with the given open spans.
///
/// Vertical intermediates span the open height and are spaced across the open
/// width; horizontal ones are the transpose. Width is checked first.
fn intermediate_cleats(
    open_width: f64,
    open_height: f64,
    rule: &IntermediateCleatRule,
) -> Option<IntermediateCleats> {
    let (orientation, spaced_span, length) = if rule.applies_to(open_width) {
        (CleatOrientation::Vertical, open_width, open_height)
    } else if rule.applies_to(open_height) {
        (CleatOrientation::Horizontal, open_height, open_width)
    } else {
        return None;
    };

    let count = rule.count_for(spaced_span);
    let (pitch, length) = if count == 0 {
        (0.0, 0.0)
    } else {
        #[allow(clippy::cast_precision_loss)]
        let bays = (count + 1) as f64;
        (spaced_span / bays, length)
    };

    Some(IntermediateCleats {
        orientation,
        count,
        pitch,
        length,
    })
}
