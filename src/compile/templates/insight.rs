//! Insight: kicker, headline, supporting body. The body's start follows
//! the wrapped headline down.

use crate::compile::context::PlanCx;
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{MARGIN, SURFACE};

const HEADLINE_Y: f64 = 330.0;
const HEADLINE_LINE_H: f64 = 80.0;

pub(crate) fn plan(cx: &mut PlanCx) {
    chrome::base(cx);
    let max_w = SURFACE - 2.0 * MARGIN;

    let kicker = cx.field_or_hint("kicker");
    chrome::kicker(cx, MARGIN, 236.0, kicker);

    let headline = cx.field_or_hint("headline");
    let headline_lines = cx.flow_text(
        MARGIN,
        HEADLINE_Y,
        HEADLINE_LINE_H,
        TextStyle::display(66.0),
        theme::INK,
        headline,
        max_w,
    );

    let body = cx.field_or_hint("body");
    let body_y = HEADLINE_Y + headline_lines as f64 * HEADLINE_LINE_H + 46.0;
    cx.flow_text(
        MARGIN,
        body_y,
        50.0,
        TextStyle::body(36.0),
        theme::INK,
        body,
        max_w,
    );
}
