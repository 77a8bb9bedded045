use super::*;
use crate::compile::plan::{DrawOp, SlidePlan};
use crate::deck::fields::FieldValues;
use crate::deck::template::TemplateKind;
use crate::fonts::store::FixedAdvance;

const AREA: Rect = Rect {
    x0: 96.0,
    y0: 300.0,
    x1: 984.0,
    y1: 860.0,
};

fn close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

fn labels(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

fn op_counts(plan: &SlidePlan) -> (usize, usize, usize, usize) {
    let mut fills = 0;
    let mut strokes = 0;
    let mut texts = 0;
    let mut rects = 0;
    for op in &plan.ops {
        match op {
            DrawOp::FillPath { .. } => fills += 1,
            DrawOp::StrokePath { .. } => strokes += 1,
            DrawOp::TextRun { .. } => texts += 1,
            DrawOp::FillRect { .. } => rects += 1,
        }
    }
    (fills, strokes, texts, rects)
}

#[test]
fn parse_defaults_unknown_shapes_to_flow() {
    assert_eq!(DiagramShape::parse("flow"), DiagramShape::Flow);
    assert_eq!(DiagramShape::parse(" CYCLE "), DiagramShape::Cycle);
    assert_eq!(DiagramShape::parse("Quadrant"), DiagramShape::Quadrant);
    assert_eq!(DiagramShape::parse("hierarchy"), DiagramShape::Hierarchy);
    assert_eq!(DiagramShape::parse(""), DiagramShape::Flow);
    assert_eq!(DiagramShape::parse("spiral"), DiagramShape::Flow);
}

#[test]
fn split_steps_trims_and_drops_blanks() {
    let steps = split_steps(" a, b ,, c ", ',');
    let got: Vec<&str> = steps.iter().map(String::as_str).collect();
    assert_eq!(got, ["a", "b", "c"]);
    assert!(split_steps(" , ,", ',').is_empty());
}

#[test]
fn split_steps_caps_at_eight() {
    let steps = split_steps("1,2,3,4,5,6,7,8,9,10", ',');
    assert_eq!(steps.len(), MAX_STEPS);
    assert_eq!(steps.last().map(String::as_str), Some("8"));
}

#[test]
fn flow_fits_one_centered_row_when_narrow() {
    let mut measure = FixedAdvance::new(10.0);
    let style = TextStyle::bold(30.0);
    let layout = layout_flow(&mut measure, &style, &labels(&["abc", "abc", "abc"]), AREA);

    assert_eq!(layout.rows.len(), 1);
    let row = &layout.rows[0];
    assert_eq!(row.len(), 3);
    // Each box is 30 measured + 56 padding; 3 boxes + 2 gaps = 386 wide.
    close(row[0].x0, 347.0);
    close(row[0].width(), 86.0);
    close(row[1].x0, 497.0);
    close(row[2].x1, 733.0);
    close(row[0].y0, 534.0);
}

#[test]
fn flow_splits_into_ceil_floor_rows_when_wide() {
    let mut measure = FixedAdvance::new(10.0);
    let style = TextStyle::bold(30.0);
    let wide = "aaaaaaaaaaaaaaaaaaaa";
    let layout = layout_flow(
        &mut measure,
        &style,
        &labels(&[wide, wide, wide, wide, wide]),
        AREA,
    );

    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.rows[0].len(), 3);
    assert_eq!(layout.rows[1].len(), 2);
    // Rows center independently.
    close(layout.rows[0][0].x0, 92.0);
    close(layout.rows[1][0].x0, 252.0);
    close(layout.rows[0][0].y0, 452.0);
    close(layout.rows[1][0].y0, 616.0);
    assert_eq!(layout.boxes().count(), 5);
}

#[test]
fn cycle_nodes_share_a_radius_and_start_at_twelve_oclock() {
    let mut measure = FixedAdvance::new(10.0);
    let style = TextStyle::bold(30.0);
    let layout = layout_cycle(&mut measure, &style, &labels(&["a", "a", "a", "a"]), AREA);

    close(layout.node_radius, 64.0);
    close(layout.orbit_radius, 216.0);
    assert_eq!(layout.nodes.len(), 4);
    close(layout.nodes[0].x, 540.0);
    close(layout.nodes[0].y, 364.0);
    for node in &layout.nodes {
        let d = ((node.x - 540.0).powi(2) + (node.y - 580.0).powi(2)).sqrt();
        close(d, layout.orbit_radius);
    }
}

#[test]
fn cycle_radius_follows_the_widest_label() {
    let mut measure = FixedAdvance::new(10.0);
    let style = TextStyle::bold(30.0);
    let layout = layout_cycle(
        &mut measure,
        &style,
        &labels(&["aa", "aaaaaaaaaaaaaaaaaaaa"]),
        AREA,
    );
    // 200 wide label: 100 half-width + 26 pad beats the 64 floor.
    close(layout.node_radius, 126.0);
}

#[test]
fn quadrant_anchors_sit_at_quarter_points() {
    let layout = layout_quadrant(AREA);
    close(layout.anchors[0].x, 318.0);
    close(layout.anchors[0].y, 440.0);
    close(layout.anchors[1].x, 762.0);
    close(layout.anchors[2].y, 720.0);
    close(layout.anchors[3].x, 762.0);
    close(layout.anchors[3].y, 720.0);
}

#[test]
fn hierarchy_boxes_follow_measured_labels() {
    let mut measure = FixedAdvance::new(10.0);
    let style = TextStyle::bold(30.0);
    let layout = layout_hierarchy(&mut measure, &style, &labels(&["root", "a", "b"]), AREA);

    close(layout.root.x0, 492.0);
    close(layout.root.x1, 588.0);
    close(layout.root.y0, 300.0);
    assert_eq!(layout.children.len(), 2);
    close(layout.children[0].center().x, 318.0);
    close(layout.children[1].center().x, 762.0);
    close(layout.children[0].y1, 860.0);
    close(layout.junction_y, 580.0);
}

#[test]
fn flow_draw_connects_only_within_rows() {
    let mut measure = FixedAdvance::new(10.0);
    let fields = FieldValues::new();
    let style = TextStyle::bold(30.0);
    let wide = "aaaaaaaaaaaaaaaaaaaa";
    let steps = labels(&[wide, wide, wide, wide, wide]);
    let layout = layout_flow(&mut measure, &style, &steps, AREA);

    let mut cx = PlanCx::new(&mut measure, TemplateKind::Framework.def(), &fields);
    draw_flow(&mut cx, &layout, &steps, style);
    let (fills, strokes, texts, _) = op_counts(&cx.into_plan());
    // 5 boxes + 3 arrow shafts; heads are the only fills.
    assert_eq!(strokes, 8);
    assert_eq!(fills, 3);
    assert_eq!(texts, 5);
}

#[test]
fn quadrant_draw_drops_labels_past_four() {
    let mut measure = FixedAdvance::new(10.0);
    let fields = FieldValues::new();
    let style = TextStyle::bold(30.0);
    let steps = labels(&["a", "b", "c", "d", "e", "f"]);
    let layout = layout_quadrant(AREA);

    let mut cx = PlanCx::new(&mut measure, TemplateKind::Framework.def(), &fields);
    draw_quadrant(&mut cx, &layout, &steps, style);
    let (_, strokes, texts, _) = op_counts(&cx.into_plan());
    assert_eq!(texts, 4);
    assert_eq!(strokes, 2);
}

#[test]
fn cycle_draw_has_one_dashed_orbit() {
    let mut measure = FixedAdvance::new(10.0);
    let fields = FieldValues::new();
    let style = TextStyle::bold(30.0);
    let steps = labels(&["a", "b", "c"]);
    let layout = layout_cycle(&mut measure, &style, &steps, AREA);

    let mut cx = PlanCx::new(&mut measure, TemplateKind::Framework.def(), &fields);
    draw_cycle(&mut cx, &layout, &steps, style);
    let plan = cx.into_plan();
    let dashed = plan
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::StrokePath { dash: Some(_), .. }))
        .count();
    assert_eq!(dashed, 1);
    let (fills, strokes, texts, _) = op_counts(&plan);
    assert_eq!(fills, 3);
    assert_eq!(strokes, 4);
    assert_eq!(texts, 3);
}

#[test]
fn hierarchy_draw_with_root_only_has_no_connectors() {
    let mut measure = FixedAdvance::new(10.0);
    let fields = FieldValues::new();
    let style = TextStyle::bold(30.0);
    let steps = labels(&["root"]);
    let layout = layout_hierarchy(&mut measure, &style, &steps, AREA);

    let mut cx = PlanCx::new(&mut measure, TemplateKind::Framework.def(), &fields);
    draw_hierarchy(&mut cx, &layout, &steps, style);
    let (fills, strokes, texts, _) = op_counts(&cx.into_plan());
    assert_eq!(fills, 1);
    assert_eq!(strokes, 0);
    assert_eq!(texts, 1);
}
