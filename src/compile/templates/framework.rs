//! Framework: title, an adaptive diagram, and a caption. The diagram
//! shape comes from the `shape` field; geometry lives in
//! [`crate::compile::diagram`].

use crate::compile::context::PlanCx;
use crate::compile::diagram::{self, DiagramShape};
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Rect, MARGIN, SURFACE};

const DIAGRAM_TOP: f64 = 300.0;
const DIAGRAM_BOTTOM: f64 = 860.0;

pub(crate) fn plan(cx: &mut PlanCx) {
    chrome::base(cx);

    let title = cx.field_or_hint("title");
    cx.flow_text(
        MARGIN,
        206.0,
        66.0,
        TextStyle::display(56.0),
        theme::INK,
        title,
        SURFACE - 2.0 * MARGIN,
    );

    let steps = diagram::split_steps(cx.field_or_hint("steps"), ',');
    let shape = DiagramShape::parse(cx.field("shape").unwrap_or_default());
    let label_style = TextStyle::bold(30.0);
    let area = Rect::new(MARGIN, DIAGRAM_TOP, SURFACE - MARGIN, DIAGRAM_BOTTOM);

    match shape {
        DiagramShape::Flow => {
            let layout = diagram::layout_flow(cx.measurer(), &label_style, &steps, area);
            diagram::draw_flow(cx, &layout, &steps, label_style);
        }
        DiagramShape::Quadrant => {
            let layout = diagram::layout_quadrant(area);
            diagram::draw_quadrant(cx, &layout, &steps, label_style);
        }
        DiagramShape::Cycle => {
            let layout = diagram::layout_cycle(cx.measurer(), &label_style, &steps, area);
            diagram::draw_cycle(cx, &layout, &steps, label_style);
        }
        DiagramShape::Hierarchy => {
            let layout = diagram::layout_hierarchy(cx.measurer(), &label_style, &steps, area);
            diagram::draw_hierarchy(cx, &layout, &steps, label_style);
        }
    }

    if let Some(caption) = cx.field("caption") {
        cx.flow_text(
            MARGIN,
            DIAGRAM_BOTTOM + 64.0,
            42.0,
            TextStyle::italic(30.0),
            theme::MUTED,
            caption,
            SURFACE - 2.0 * MARGIN,
        );
    }
}
