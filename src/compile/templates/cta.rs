//! Closing call to action: dark ground, headline, body, action button,
//! handle line.

use kurbo::{RoundedRect, Shape as _};

use crate::compile::context::PlanCx;
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Point, Rect, MARGIN, SURFACE};

const HEADLINE_Y: f64 = 318.0;
const HEADLINE_LINE_H: f64 = 94.0;

pub(crate) fn plan(cx: &mut PlanCx) {
    chrome::base_dark(cx);
    let max_w = SURFACE - 2.0 * MARGIN;

    let headline = cx.field_or_hint("headline");
    let headline_lines = cx.flow_text(
        MARGIN,
        HEADLINE_Y,
        HEADLINE_LINE_H,
        TextStyle::display(80.0),
        theme::PAPER,
        headline,
        max_w,
    );

    let body = cx.field_or_hint("body");
    let body_y = HEADLINE_Y + headline_lines as f64 * HEADLINE_LINE_H + 40.0;
    let body_lines = cx.flow_text(
        MARGIN,
        body_y,
        50.0,
        TextStyle::body(36.0),
        theme::PAPER_DIM,
        body,
        max_w,
    );

    let action = cx.field_or_hint("action");
    let action_style = TextStyle::bold(38.0);
    let action_w = cx.width(&action_style, action);
    let button_w = action_w + 112.0;
    let button_y = (body_y + body_lines as f64 * 50.0 + 56.0).max(700.0);
    let button = Rect::new(MARGIN, button_y, MARGIN + button_w, button_y + 104.0);
    cx.fill_path(
        RoundedRect::from_rect(button, 52.0).to_path(0.1),
        theme::ACCENT,
    );
    cx.text_centered(
        button.center().x,
        theme::centered_baseline(button.center().y, action_style.size),
        action,
        action_style,
        theme::PAPER,
    );

    if let Some(handle) = cx.field("handle") {
        cx.text(
            Point::new(MARGIN, SURFACE - 110.0),
            handle,
            TextStyle::bold(30.0).with_letter_spacing(2.0),
            theme::PAPER_DIM,
        );
    }
}
