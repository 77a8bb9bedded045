//! Adaptive diagram geometry for the framework template.
//!
//! Layout is split from emission: `layout_*` functions compute geometry
//! from measured label widths and return plain structs, so their fit and
//! split decisions are unit-testable with a fixed-advance measurer. The
//! `draw_*` functions turn a layout back into ops.

use kurbo::{Circle, RoundedRect, Shape as _};
use smallvec::SmallVec;

use crate::compile::context::PlanCx;
use crate::compile::theme;
use crate::fonts::store::{TextMeasure, TextStyle};
use crate::foundation::core::{BezPath, Point, Rect};

/// Hard cap on diagram steps; extras past this are dropped at parse time.
pub(crate) const MAX_STEPS: usize = 8;

const BOX_PAD_X: f64 = 28.0;
const BOX_H: f64 = 92.0;
const BOX_RADIUS: f64 = 14.0;
const ARROW_GAP: f64 = 64.0;
const ROW_GAP: f64 = 72.0;
const NODE_RADIUS_MIN: f64 = 64.0;
const NODE_PAD: f64 = 26.0;
const ORBIT_DASH: [f64; 2] = [12.0, 10.0];

/// The four diagram arrangements a framework slide can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiagramShape {
    Flow,
    Quadrant,
    Cycle,
    Hierarchy,
}

impl DiagramShape {
    /// Parse the `shape` field value. Unknown or blank values read as
    /// flow; a bad field never fails a render.
    pub(crate) fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "quadrant" => Self::Quadrant,
            "cycle" => Self::Cycle,
            "hierarchy" => Self::Hierarchy,
            _ => Self::Flow,
        }
    }
}

/// Split a delimited steps field into trimmed, non-blank labels, capped
/// at [`MAX_STEPS`].
pub(crate) fn split_steps(raw: &str, delimiter: char) -> SmallVec<[String; MAX_STEPS]> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_STEPS)
        .map(str::to_owned)
        .collect()
}

// -- flow -----------------------------------------------------------------

/// Box positions for a left-to-right flow, one or two rows.
#[derive(Debug, Clone)]
pub(crate) struct FlowLayout {
    /// Rows of label-aligned boxes, in reading order.
    pub(crate) rows: SmallVec<[SmallVec<[Rect; MAX_STEPS]>; 2]>,
}

impl FlowLayout {
    /// Boxes flattened back into label order.
    pub(crate) fn boxes(&self) -> impl Iterator<Item = &Rect> {
        self.rows.iter().flatten()
    }
}

/// Lay out flow boxes inside `area`. A single centered row when the
/// measured run fits, otherwise two independently centered rows with the
/// extra step going to the first.
pub(crate) fn layout_flow(
    measure: &mut dyn TextMeasure,
    style: &TextStyle,
    labels: &[String],
    area: Rect,
) -> FlowLayout {
    let widths: SmallVec<[f64; MAX_STEPS]> = labels
        .iter()
        .map(|l| measure.text_width(style, l) + 2.0 * BOX_PAD_X)
        .collect();
    let mut rows = SmallVec::new();
    if labels.is_empty() {
        return FlowLayout { rows };
    }

    let single_w = row_width(&widths);
    let center = area.center();
    if single_w <= area.width() {
        rows.push(place_row(&widths, center.x, center.y - BOX_H / 2.0));
    } else {
        let first = labels.len().div_ceil(2);
        let top_y = center.y - BOX_H - ROW_GAP / 2.0;
        rows.push(place_row(&widths[..first], center.x, top_y));
        rows.push(place_row(&widths[first..], center.x, top_y + BOX_H + ROW_GAP));
    }
    FlowLayout { rows }
}

fn row_width(widths: &[f64]) -> f64 {
    widths.iter().sum::<f64>() + ARROW_GAP * (widths.len().saturating_sub(1)) as f64
}

fn place_row(widths: &[f64], center_x: f64, y0: f64) -> SmallVec<[Rect; MAX_STEPS]> {
    let mut x = center_x - row_width(widths) / 2.0;
    let mut row = SmallVec::new();
    for w in widths {
        row.push(Rect::new(x, y0, x + w, y0 + BOX_H));
        x += w + ARROW_GAP;
    }
    row
}

pub(crate) fn draw_flow(cx: &mut PlanCx, layout: &FlowLayout, labels: &[String], style: TextStyle) {
    let mut labels = labels.iter();
    for row in &layout.rows {
        for (i, rect) in row.iter().enumerate() {
            stroke_box(cx, *rect);
            if let Some(label) = labels.next() {
                let c = rect.center();
                cx.text_centered(
                    c.x,
                    theme::centered_baseline(c.y, style.size),
                    label,
                    style,
                    theme::INK,
                );
            }
            if i + 1 < row.len() {
                arrow_right(cx, rect.x1, row[i + 1].x0, rect.center().y);
            }
        }
    }
}

// -- quadrant -------------------------------------------------------------

/// Axes frame and the four label anchors of a quadrant chart.
#[derive(Debug, Clone)]
pub(crate) struct QuadrantLayout {
    pub(crate) frame: Rect,
    /// Cell centers in reading order: top-left, top-right, bottom-left,
    /// bottom-right.
    pub(crate) anchors: [Point; 4],
}

/// Fixed 2x2 geometry: labels anchor at the quarter points of `area`.
pub(crate) fn layout_quadrant(area: Rect) -> QuadrantLayout {
    let c = area.center();
    let qx = area.width() / 4.0;
    let qy = area.height() / 4.0;
    QuadrantLayout {
        frame: area,
        anchors: [
            Point::new(c.x - qx, c.y - qy),
            Point::new(c.x + qx, c.y - qy),
            Point::new(c.x - qx, c.y + qy),
            Point::new(c.x + qx, c.y + qy),
        ],
    }
}

pub(crate) fn draw_quadrant(
    cx: &mut PlanCx,
    layout: &QuadrantLayout,
    labels: &[String],
    style: TextStyle,
) {
    let frame = layout.frame;
    stroke_rect(cx, frame, theme::OUTLINE_WEIGHT);
    let c = frame.center();
    let mut axes = BezPath::new();
    axes.move_to(Point::new(c.x, frame.y0));
    axes.line_to(Point::new(c.x, frame.y1));
    axes.move_to(Point::new(frame.x0, c.y));
    axes.line_to(Point::new(frame.x1, c.y));
    cx.stroke_path(axes, theme::INK, theme::OUTLINE_WEIGHT);
    // Only the first four labels have cells to live in.
    for (label, anchor) in labels.iter().zip(layout.anchors.iter()) {
        cx.text_centered(
            anchor.x,
            theme::centered_baseline(anchor.y, style.size),
            label,
            style,
            theme::INK,
        );
    }
}

// -- cycle ----------------------------------------------------------------

/// Ring positions for a cycle diagram.
#[derive(Debug, Clone)]
pub(crate) struct CycleLayout {
    pub(crate) center: Point,
    pub(crate) orbit_radius: f64,
    /// Shared node radius, sized to the widest label.
    pub(crate) node_radius: f64,
    pub(crate) nodes: SmallVec<[Point; MAX_STEPS]>,
}

/// Place nodes on a shared orbit, first node at twelve o'clock, stepping
/// clockwise in equal angles.
pub(crate) fn layout_cycle(
    measure: &mut dyn TextMeasure,
    style: &TextStyle,
    labels: &[String],
    area: Rect,
) -> CycleLayout {
    let widest = labels
        .iter()
        .map(|l| measure.text_width(style, l))
        .fold(0.0f64, f64::max);
    let node_radius = (widest / 2.0 + NODE_PAD).max(NODE_RADIUS_MIN);
    let center = area.center();
    let orbit_radius = (area.width().min(area.height()) / 2.0 - node_radius).max(0.0);
    let n = labels.len();
    let nodes = (0..n)
        .map(|i| {
            let angle = (-90.0 + (i as f64 / n as f64) * 360.0).to_radians();
            Point::new(
                center.x + orbit_radius * angle.cos(),
                center.y + orbit_radius * angle.sin(),
            )
        })
        .collect();
    CycleLayout {
        center,
        orbit_radius,
        node_radius,
        nodes,
    }
}

pub(crate) fn draw_cycle(cx: &mut PlanCx, layout: &CycleLayout, labels: &[String], style: TextStyle) {
    let orbit = Circle::new(layout.center, layout.orbit_radius).to_path(0.1);
    cx.stroke_dashed(orbit, theme::MUTED, theme::OUTLINE_WEIGHT, ORBIT_DASH);
    for (label, node) in labels.iter().zip(layout.nodes.iter()) {
        let disc = Circle::new(*node, layout.node_radius).to_path(0.1);
        cx.fill_path(disc.clone(), theme::PAPER);
        cx.stroke_path(disc, theme::INK, theme::OUTLINE_WEIGHT);
        cx.text_centered(
            node.x,
            theme::centered_baseline(node.y, style.size),
            label,
            style,
            theme::INK,
        );
    }
}

// -- hierarchy ------------------------------------------------------------

/// Root-and-branches geometry: first label on top, the rest fanned into
/// an evenly spaced bottom row.
#[derive(Debug, Clone)]
pub(crate) struct HierarchyLayout {
    pub(crate) root: Rect,
    pub(crate) children: SmallVec<[Rect; MAX_STEPS]>,
    /// Height of the horizontal junction line the branches hang from.
    pub(crate) junction_y: f64,
}

pub(crate) fn layout_hierarchy(
    measure: &mut dyn TextMeasure,
    style: &TextStyle,
    labels: &[String],
    area: Rect,
) -> HierarchyLayout {
    let box_w = |text: &str, measure: &mut dyn TextMeasure| {
        measure.text_width(style, text) + 2.0 * BOX_PAD_X
    };
    let root_label = labels.first().map(String::as_str).unwrap_or_default();
    let root_w = box_w(root_label, measure);
    let cx = area.center().x;
    let root = Rect::new(cx - root_w / 2.0, area.y0, cx + root_w / 2.0, area.y0 + BOX_H);

    let rest = labels.get(1..).unwrap_or_default();
    let mut children = SmallVec::new();
    let slot_w = if rest.is_empty() {
        area.width()
    } else {
        area.width() / rest.len() as f64
    };
    for (i, label) in rest.iter().enumerate() {
        let w = box_w(label, measure);
        let center_x = area.x0 + (i as f64 + 0.5) * slot_w;
        children.push(Rect::new(
            center_x - w / 2.0,
            area.y1 - BOX_H,
            center_x + w / 2.0,
            area.y1,
        ));
    }
    HierarchyLayout {
        root,
        children,
        junction_y: (root.y1 + (area.y1 - BOX_H)) / 2.0,
    }
}

pub(crate) fn draw_hierarchy(
    cx: &mut PlanCx,
    layout: &HierarchyLayout,
    labels: &[String],
    style: TextStyle,
) {
    let Some(root_label) = labels.first() else {
        return;
    };
    let root = layout.root;
    cx.fill_path(
        RoundedRect::from_rect(root, BOX_RADIUS).to_path(0.1),
        theme::INK,
    );
    let rc = root.center();
    cx.text_centered(
        rc.x,
        theme::centered_baseline(rc.y, style.size),
        root_label,
        style,
        theme::PAPER,
    );

    if layout.children.is_empty() {
        return;
    }
    let mut connectors = BezPath::new();
    connectors.move_to(Point::new(rc.x, root.y1));
    connectors.line_to(Point::new(rc.x, layout.junction_y));
    if layout.children.len() > 1 {
        let first_x = layout.children[0].center().x;
        let last_x = layout.children[layout.children.len() - 1].center().x;
        connectors.move_to(Point::new(first_x, layout.junction_y));
        connectors.line_to(Point::new(last_x, layout.junction_y));
    }
    for child in &layout.children {
        connectors.move_to(Point::new(child.center().x, layout.junction_y));
        connectors.line_to(Point::new(child.center().x, child.y0));
    }
    cx.stroke_path(connectors, theme::INK, theme::OUTLINE_WEIGHT);

    for (label, rect) in labels[1..].iter().zip(layout.children.iter()) {
        stroke_box(cx, *rect);
        let c = rect.center();
        cx.text_centered(
            c.x,
            theme::centered_baseline(c.y, style.size),
            label,
            style,
            theme::INK,
        );
    }
}

// -- shared strokes -------------------------------------------------------

fn stroke_box(cx: &mut PlanCx, rect: Rect) {
    cx.stroke_path(
        RoundedRect::from_rect(rect, BOX_RADIUS).to_path(0.1),
        theme::INK,
        theme::OUTLINE_WEIGHT,
    );
}

fn stroke_rect(cx: &mut PlanCx, rect: Rect, width: f64) {
    cx.stroke_path(rect.to_path(0.1), theme::INK, width);
}

/// Horizontal connector with a filled head, pointing right, drawn in the
/// gap between `x0` and `x1` at height `y`.
fn arrow_right(cx: &mut PlanCx, x0: f64, x1: f64, y: f64) {
    let mut shaft = BezPath::new();
    shaft.move_to(Point::new(x0 + 8.0, y));
    shaft.line_to(Point::new(x1 - 20.0, y));
    cx.stroke_path(shaft, theme::INK, theme::OUTLINE_WEIGHT);

    let mut head = BezPath::new();
    head.move_to(Point::new(x1 - 8.0, y));
    head.line_to(Point::new(x1 - 24.0, y - 10.0));
    head.line_to(Point::new(x1 - 24.0, y + 10.0));
    head.close_path();
    cx.fill_path(head, theme::INK);
}

#[cfg(test)]
#[path = "../../tests/unit/compile/diagram.rs"]
mod tests;
