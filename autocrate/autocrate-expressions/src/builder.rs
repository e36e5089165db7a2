//! Build an [`ExpressionTable`] from a derived crate.

use autocrate_types::{
    CleatGroup, CleatOrientation, CrateGeometry, DerivationRequest, PanelComponents, PanelKind,
};
use tracing::{debug, warn};

use crate::table::{Expression, ExpressionTable, Section};

/// Width written for an unused floorboard slot.
pub const SUPPRESSED_WIDTH: f64 = 0.0001;

/// Export options.
///
/// # Example
///
/// ```
/// use autocrate_expressions::ExportOptions;
///
/// let options = ExportOptions::default().with_floorboard_slots(30);
/// assert_eq!(options.floorboard_slots, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Number of floorboard instance slots in the CAD template.
    pub floorboard_slots: usize,
    /// Header comment lines.
    pub header: Vec<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            floorboard_slots: Self::DEFAULT_FLOORBOARD_SLOTS,
            header: vec!["NX Expressions - Skids, Floorboards & Detailed Panels".to_string()],
        }
    }
}

impl ExportOptions {
    /// Slot count of the reference CAD template.
    pub const DEFAULT_FLOORBOARD_SLOTS: usize = 20;

    /// Set the number of floorboard slots.
    #[must_use]
    pub const fn with_floorboard_slots(mut self, slots: usize) -> Self {
        self.floorboard_slots = slots;
        self
    }

    /// Replace the header lines.
    #[must_use]
    pub fn with_header(mut self, header: Vec<String>) -> Self {
        self.header = header;
        self
    }
}

/// Lay a derived crate out as a flat table of named CAD expressions.
///
/// Floorboards fill a fixed number of instance slots; unused slots are
/// suppressed, and boards beyond the last slot are dropped and counted in
/// [`ExpressionTable::dropped_floorboards`].
///
/// # Example
///
/// ```
/// use autocrate_engine::{DerivationConfig, derive_geometry};
/// use autocrate_expressions::{ExportOptions, build_expression_table};
/// use autocrate_types::{DerivationRequest, MaterialSpec, ProductSpec};
///
/// let request = DerivationRequest::new(
///     ProductSpec::new(300.0, 100.0, 40.0, 50.0),
///     MaterialSpec::standard(),
/// );
/// let geometry = derive_geometry(&request, &DerivationConfig::default()).unwrap();
/// let table = build_expression_table(&request, &geometry, &ExportOptions::default());
///
/// assert!(table.get("CALC_Skid_Count").is_some());
/// assert!(table.get("FB_Inst_20_Suppress_Flag").is_some());
/// assert!(table.get("FB_Inst_21_Suppress_Flag").is_none());
/// ```
#[must_use]
pub fn build_expression_table(
    request: &DerivationRequest,
    geometry: &CrateGeometry,
    options: &ExportOptions,
) -> ExpressionTable {
    let mut table = ExpressionTable {
        header: options.header.clone(),
        sections: vec![
            inputs_section(request),
            crate_section(geometry),
            skid_section(geometry),
        ],
        dropped_floorboards: 0,
    };

    let (floor, dropped) = floorboard_section(geometry, options.floorboard_slots);
    table.sections.push(floor);
    table.dropped_floorboards = dropped;
    if dropped > 0 {
        warn!(
            boards = geometry.floorboards.board_count(),
            slots = options.floorboard_slots,
            dropped,
            "Floorboards exceed the available instance slots"
        );
    }

    table.sections.push(panel_box_section(geometry));
    for kind in PanelKind::ALL {
        table.sections.push(component_section(geometry.components.get(kind)));
    }

    debug!(expressions = table.len(), "Expression table built");
    table
}

fn inputs_section(request: &DerivationRequest) -> Section {
    let DerivationRequest {
        product: p,
        material: m,
        flags,
    } = request;

    let mut s = Section::new("USER INPUTS & CRATE CONSTANTS");
    s.push(Expression::pound_mass("product_weight", p.weight));
    s.push(Expression::inch("product_length_input", p.length, 3));
    s.push(Expression::inch("product_width_input", p.width, 3));
    s.push(Expression::inch("clearance_side_input", p.side_clearance, 3));
    s.push(Expression::flag("BOOL_Allow_3x4_Skids_Input", flags.allow_light_skids));
    s.push(Expression::inch("INPUT_Panel_Thickness", m.sheathing_thickness, 3));
    s.push(Expression::inch("INPUT_Cleat_Thickness", m.cleat_thickness, 3));
    s.push(Expression::inch("INPUT_Cleat_Member_Actual_Width", m.cleat_member_width, 3));
    s.push(Expression::inch("INPUT_Product_Actual_Height", p.height, 3));
    s.push(Expression::inch("INPUT_Clearance_Above_Product", p.above_clearance, 3));
    s.push(Expression::inch("INPUT_Ground_Clearance_End_Panels", m.ground_clearance, 3));
    s.push(Expression::flag(
        "BOOL_Force_Small_Custom_Floorboard",
        flags.force_small_custom_board,
    ));
    s.push(Expression::inch("INPUT_Floorboard_Actual_Thickness", m.floorboard_thickness, 3));
    s.push(Expression::inch("INPUT_Max_Allowable_Middle_Gap", m.max_gap, 3));
    s.push(Expression::inch("INPUT_Min_Custom_Lumber_Width", m.min_custom_width, 3));
    s
}

fn crate_section(g: &CrateGeometry) -> Section {
    let mut s = Section::new("CALCULATED CRATE DIMENSIONS");
    s.push(Expression::inch("crate_overall_width_OD", g.crate_width, 3));
    s.push(Expression::inch("crate_overall_length_OD", g.crate_length, 3));
    s
}

fn skid_section(g: &CrateGeometry) -> Section {
    let skids = &g.skids;
    let mut s = Section::new("SKID PARAMETERS");
    s.comment(format!("Skid Lumber Callout: {}", skids.profile.lumber_callout));
    s.push(Expression::inch("Skid_Actual_Height", skids.profile.height, 3));
    s.push(Expression::inch("Skid_Actual_Width", skids.profile.width, 3));
    s.push(Expression::inch("Skid_Actual_Length", skids.length, 3));
    s.push(Expression::count("CALC_Skid_Count", skids.count));
    s.push(Expression::inch("CALC_Skid_Pitch", skids.pitch, 4));
    s.push(Expression::inch("X_Master_Skid_Origin_Offset", skids.master_origin_offset_x, 4));
    s
}

fn floorboard_section(g: &CrateGeometry, slots: usize) -> (Section, usize) {
    let floor = &g.floorboards;
    let mut s = Section::new("FLOORBOARD PARAMETERS");
    s.push(Expression::inch("FB_Board_Actual_Length", floor.board_length, 3));
    s.push(Expression::inch("FB_Board_Actual_Thickness", floor.thickness, 3));
    s.push(Expression::inch("CALC_FB_Actual_Middle_Gap", floor.middle_gap, 4));
    s.push(Expression::inch("CALC_FB_Center_Custom_Board_Width", floor.custom_width, 4));
    s.push(Expression::inch("CALC_FB_Uncovered_Residual", floor.uncovered, 4));
    s.push(Expression::inch("CALC_FB_Start_Y_Offset_Abs", floor.start_offset, 3));
    s.blank();

    s.comment("Floorboard Instance Data");
    for slot in 0..slots {
        let n = slot + 1;
        let board = floor.boards.get(slot);
        s.push(Expression::flag(format!("FB_Inst_{n}_Suppress_Flag"), board.is_none()));
        s.push(Expression::inch(
            format!("FB_Inst_{n}_Actual_Width"),
            board.map_or(SUPPRESSED_WIDTH, |b| b.width),
            4,
        ));
        s.push(Expression::inch(
            format!("FB_Inst_{n}_Y_Pos_Abs"),
            board.map_or(0.0, |b| b.y_position),
            4,
        ));
    }

    let dropped = floor.boards.len().saturating_sub(slots);
    (s, dropped)
}

fn panel_box_section(g: &CrateGeometry) -> Section {
    let p = &g.panels;
    let mut s = Section::new("OVERALL PANEL ASSEMBLY DIMENSIONS (Informational)");
    s.push(Expression::inch("PANEL_Front_Assy_Overall_Width", p.front.width, 3));
    s.push(Expression::inch("PANEL_Front_Assy_Overall_Height", p.front.height, 3));
    s.push(Expression::inch("PANEL_Front_Assy_Overall_Depth", p.front.depth, 3));
    s.blank();
    s.push(Expression::inch("PANEL_Back_Assy_Overall_Width", p.back.width, 3));
    s.push(Expression::inch("PANEL_Back_Assy_Overall_Height", p.back.height, 3));
    s.push(Expression::inch("PANEL_Back_Assy_Overall_Depth", p.back.depth, 3));
    s.blank();
    s.push(
        Expression::inch("PANEL_End_Assy_Overall_Length_Face", p.end.width, 3)
            .with_note("For Left & Right End Panels"),
    );
    s.push(Expression::inch("PANEL_End_Assy_Overall_Height", p.end.height, 3));
    s.push(Expression::inch("PANEL_End_Assy_Overall_Depth_Thickness", p.end.depth, 3));
    s.blank();
    s.push(Expression::inch("PANEL_Top_Assy_Overall_Width", p.top.width, 3));
    s.push(Expression::inch("PANEL_Top_Assy_Overall_Length", p.top.height, 3));
    s.push(Expression::inch("PANEL_Top_Assy_Overall_Depth_Thickness", p.top.depth, 3));
    s
}

/// Name prefix and section title for a panel.
const fn panel_labels(kind: PanelKind) -> (&'static str, &'static str) {
    match kind {
        PanelKind::Front => ("FP", "FRONT PANEL COMPONENT DETAILS"),
        PanelKind::Back => ("BP", "BACK PANEL COMPONENT DETAILS"),
        PanelKind::End => ("EP", "END PANEL COMPONENT DETAILS (for Left & Right panels)"),
        PanelKind::Top => ("TP", "TOP PANEL COMPONENT DETAILS"),
    }
}

fn component_section(c: &PanelComponents) -> Section {
    let (prefix, title) = panel_labels(c.kind);
    let mut s = Section::new(title);

    let (width_name, height_name) = match c.kind {
        PanelKind::End => ("Plywood_Face_Width", "Plywood_Height"),
        PanelKind::Top => ("Plywood_Width", "Plywood_Length"),
        PanelKind::Front | PanelKind::Back => ("Plywood_Width", "Plywood_Height"),
    };
    s.comment("Plywood Sheathing");
    s.push(Expression::inch(format!("{prefix}_{width_name}"), c.sheathing.width, 3));
    s.push(Expression::inch(format!("{prefix}_{height_name}"), c.sheathing.height, 3));
    s.push(Expression::inch(format!("{prefix}_Plywood_Thickness"), c.sheathing.thickness, 3));

    let top = c.kind == PanelKind::Top;
    let (primary_label, secondary_label) = if top {
        ("Primary", "Secondary")
    } else {
        (orientation_label(&c.primary), orientation_label(&c.secondary))
    };
    push_cleats(&mut s, prefix, primary_label, &c.primary);
    push_cleats(&mut s, prefix, secondary_label, &c.secondary);

    if let Some(inter) = c.intermediate {
        s.blank();
        s.comment("Intermediate Cleats");
        s.push(Expression::text(
            format!("{prefix}_Inter_Cleat_Orientation"),
            inter.orientation.as_str(),
        ));
        s.push(Expression::count(format!("{prefix}_Inter_Cleat_Count"), inter.count));
        s.push(Expression::inch(format!("{prefix}_Inter_Cleat_Pitch"), inter.pitch, 3));
        s.push(Expression::inch(format!("{prefix}_Inter_Cleat_Length"), inter.length, 3));
    }
    s
}

const fn orientation_label(group: &CleatGroup) -> &'static str {
    match group.orientation {
        CleatOrientation::Horizontal => "Horizontal",
        CleatOrientation::Vertical => "Vertical",
        CleatOrientation::Lengthwise => "Lengthwise",
        CleatOrientation::Crosswise => "Crosswise",
    }
}

fn push_cleats(s: &mut Section, prefix: &str, label: &str, group: &CleatGroup) {
    s.blank();
    s.comment(format!("{label} Cleats"));
    s.push(Expression::inch(format!("{prefix}_{label}_Cleat_Length"), group.length, 3));
    s.push(Expression::inch(
        format!("{prefix}_{label}_Cleat_Material_Thickness"),
        group.thickness,
        3,
    ));
    s.push(Expression::inch(
        format!("{prefix}_{label}_Cleat_Material_Member_Width"),
        group.member_width,
        3,
    ));
    s.push(Expression::count(format!("{prefix}_{label}_Cleat_Count"), group.count));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::table::Value;
    use autocrate_engine::{DerivationConfig, derive_geometry};
    use autocrate_panel::CleatModel;
    use autocrate_types::{FeatureFlags, MaterialSpec, ProductSpec};

    fn reference() -> (DerivationRequest, CrateGeometry) {
        let request = DerivationRequest::new(
            ProductSpec::new(300.0, 100.0, 40.0, 50.0),
            MaterialSpec::standard(),
        )
        .with_flags(FeatureFlags::standard());
        let geometry = derive_geometry(&request, &DerivationConfig::default()).unwrap();
        (request, geometry)
    }

    fn rendered(table: &ExpressionTable, name: &str) -> String {
        table.get(name).unwrap().to_string()
    }

    #[test]
    fn test_reference_values() {
        let (request, geometry) = reference();
        let table = build_expression_table(&request, &geometry, &ExportOptions::default());

        assert_eq!(rendered(&table, "product_weight"), "[lbm]product_weight = 300.000");
        assert_eq!(
            rendered(&table, "BOOL_Allow_3x4_Skids_Input"),
            "BOOL_Allow_3x4_Skids_Input = 1"
        );
        assert_eq!(
            rendered(&table, "crate_overall_width_OD"),
            "[Inch]crate_overall_width_OD = 45.000"
        );
        assert_eq!(rendered(&table, "CALC_Skid_Count"), "CALC_Skid_Count = 3");
        assert_eq!(rendered(&table, "CALC_Skid_Pitch"), "[Inch]CALC_Skid_Pitch = 21.2500");
        assert_eq!(
            rendered(&table, "X_Master_Skid_Origin_Offset"),
            "[Inch]X_Master_Skid_Origin_Offset = -22.5000"
        );
        assert_eq!(
            rendered(&table, "CALC_FB_Uncovered_Residual"),
            "[Inch]CALC_FB_Uncovered_Residual = 1.7500"
        );
        assert_eq!(
            rendered(&table, "PANEL_End_Assy_Overall_Length_Face"),
            "[Inch]PANEL_End_Assy_Overall_Length_Face = 103.000 // For Left & Right End Panels"
        );
        assert_eq!(
            rendered(&table, "FP_Vertical_Cleat_Length"),
            "[Inch]FP_Vertical_Cleat_Length = 46.500"
        );
        assert_eq!(
            rendered(&table, "EP_Horizontal_Cleat_Length"),
            "[Inch]EP_Horizontal_Cleat_Length = 96.000"
        );
        assert_eq!(
            rendered(&table, "TP_Secondary_Cleat_Length"),
            "[Inch]TP_Secondary_Cleat_Length = 40.000"
        );
        assert_eq!(rendered(&table, "TP_Plywood_Length"), "[Inch]TP_Plywood_Length = 105.000");
        assert!(table.get("FP_Inter_Cleat_Count").is_none());
    }

    #[test]
    fn test_floorboard_slots() {
        let (request, geometry) = reference();
        let table = build_expression_table(&request, &geometry, &ExportOptions::default());

        // nine boards placed, slots 10..=20 suppressed
        assert_eq!(table.get("FB_Inst_1_Suppress_Flag").unwrap().value, Value::Flag(false));
        assert_eq!(rendered(&table, "FB_Inst_1_Y_Pos_Abs"), "[Inch]FB_Inst_1_Y_Pos_Abs = 1.0000");
        assert_eq!(rendered(&table, "FB_Inst_2_Y_Pos_Abs"), "[Inch]FB_Inst_2_Y_Pos_Abs = 12.2500");
        assert_eq!(table.get("FB_Inst_10_Suppress_Flag").unwrap().value, Value::Flag(true));
        assert_eq!(
            rendered(&table, "FB_Inst_10_Actual_Width"),
            "[Inch]FB_Inst_10_Actual_Width = 0.0001"
        );
        assert_eq!(rendered(&table, "FB_Inst_20_Y_Pos_Abs"), "[Inch]FB_Inst_20_Y_Pos_Abs = 0.0000");
        assert_eq!(table.dropped_floorboards, 0);
    }

    #[test]
    fn test_slot_overflow_is_reported() {
        let (request, geometry) = reference();
        let options = ExportOptions::default().with_floorboard_slots(4);
        let table = build_expression_table(&request, &geometry, &options);
        assert_eq!(table.dropped_floorboards, 5);
        assert!(table.get("FB_Inst_4_Actual_Width").is_some());
        assert!(table.get("FB_Inst_5_Actual_Width").is_none());
    }

    #[test]
    fn test_extended_model_exports_intermediates() {
        let (request, _) = reference();
        let config = DerivationConfig::default().with_cleat_model(CleatModel::Extended);
        let geometry = derive_geometry(&request, &config).unwrap();
        let table = build_expression_table(&request, &geometry, &ExportOptions::default());

        assert_eq!(
            rendered(&table, "FP_Inter_Cleat_Orientation"),
            "FP_Inter_Cleat_Orientation = \"VERTICAL\""
        );
        assert_eq!(rendered(&table, "FP_Inter_Cleat_Count"), "FP_Inter_Cleat_Count = 1");
        assert_eq!(
            rendered(&table, "FP_Horizontal_Cleat_Length"),
            "[Inch]FP_Horizontal_Cleat_Length = 40.000"
        );
        assert!(table.get("BP_Inter_Cleat_Count").is_none());
    }

    #[test]
    fn test_render_is_deterministic() {
        let (request, geometry) = reference();
        let options = ExportOptions::default();
        let a = build_expression_table(&request, &geometry, &options).render();
        let b = build_expression_table(&request, &geometry, &options).render();
        assert_eq!(a, b);
        assert!(a.starts_with("// NX Expressions - Skids, Floorboards & Detailed Panels\n"));
        assert!(a.ends_with("// End of Expressions\n"));
        assert!(a.contains("// Skid Lumber Callout: 3x4 (oriented for 3.5 H)"));
    }
}
