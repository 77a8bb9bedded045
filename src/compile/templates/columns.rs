//! Two-up and three-up column layouts.

use crate::compile::context::PlanCx;
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Rect, MARGIN, SURFACE};

const CONTENT_TOP: f64 = 330.0;
const CONTENT_BOTTOM: f64 = SURFACE - MARGIN;

pub(crate) fn plan_two_up(cx: &mut PlanCx) {
    chrome::base(cx);
    title(cx);

    let gutter = 72.0;
    let col_w = (SURFACE - 2.0 * MARGIN - gutter) / 2.0;
    column(cx, MARGIN, col_w, "left_title", "left_body", 42.0, 36.0);
    column(
        cx,
        MARGIN + col_w + gutter,
        col_w,
        "right_title",
        "right_body",
        42.0,
        36.0,
    );
    divider(cx, SURFACE / 2.0);
}

pub(crate) fn plan_three_up(cx: &mut PlanCx) {
    chrome::base(cx);
    title(cx);

    let gutter = 52.0;
    let col_w = (SURFACE - 2.0 * MARGIN - 2.0 * gutter) / 3.0;
    let keys = [("a_title", "a_body"), ("b_title", "b_body"), ("c_title", "c_body")];
    for (i, (title_key, body_key)) in keys.into_iter().enumerate() {
        let x = MARGIN + i as f64 * (col_w + gutter);
        column(cx, x, col_w, title_key, body_key, 34.0, 30.0);
        if i > 0 {
            divider(cx, x - gutter / 2.0);
        }
    }
}

fn title(cx: &mut PlanCx) {
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
}

fn column(
    cx: &mut PlanCx,
    x: f64,
    width: f64,
    title_key: &str,
    body_key: &str,
    head_size: f32,
    body_size: f32,
) {
    let head = cx.field_or_hint(title_key);
    let head_lines = cx.flow_text(
        x,
        CONTENT_TOP + 40.0,
        f64::from(head_size) * 1.25,
        TextStyle::bold(head_size),
        theme::INK,
        head,
        width,
    );
    chrome::accent_bar(
        cx,
        x,
        CONTENT_TOP + 40.0 + head_lines as f64 * f64::from(head_size) * 1.25 - 18.0,
        64.0,
    );

    let body = cx.field_or_hint(body_key);
    let body_y = CONTENT_TOP + 40.0 + (head_lines as f64 + 0.6) * f64::from(head_size) * 1.25 + 28.0;
    cx.flow_text(
        x,
        body_y,
        f64::from(body_size) * 1.4,
        TextStyle::body(body_size),
        theme::INK,
        body,
        width,
    );
}

/// Faint full-height separator between columns.
fn divider(cx: &mut PlanCx, x: f64) {
    cx.fill_rect_faded(
        Rect::new(x - 1.0, CONTENT_TOP, x + 1.0, CONTENT_BOTTOM),
        theme::INK,
        0.25,
    );
}
