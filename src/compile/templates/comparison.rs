//! Comparison: two labeled panels head to head.

use kurbo::{RoundedRect, Shape as _};

use crate::compile::context::PlanCx;
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Rect, Rgba8Premul, MARGIN, SURFACE};

const PANEL_TOP: f64 = 318.0;
const PANEL_BOTTOM: f64 = 912.0;
const PANEL_GAP: f64 = 56.0;
const CHIP_H: f64 = 64.0;

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

    let panel_w = (SURFACE - 2.0 * MARGIN - PANEL_GAP) / 2.0;
    panel(cx, MARGIN, panel_w, "left_label", "left_body", theme::INK);
    panel(
        cx,
        MARGIN + panel_w + PANEL_GAP,
        panel_w,
        "right_label",
        "right_body",
        theme::ACCENT,
    );

    cx.text_centered(
        SURFACE / 2.0,
        (PANEL_TOP + PANEL_BOTTOM) / 2.0 + 10.0,
        "VS",
        TextStyle::bold(30.0).with_letter_spacing(theme::KICKER_TRACKING),
        theme::MUTED,
    );
}

fn panel(
    cx: &mut PlanCx,
    x: f64,
    width: f64,
    label_key: &str,
    body_key: &str,
    chip_color: Rgba8Premul,
) {
    let frame = Rect::new(x, PANEL_TOP, x + width, PANEL_BOTTOM);
    cx.stroke_path(
        RoundedRect::from_rect(frame, 18.0).to_path(0.1),
        theme::INK,
        theme::OUTLINE_WEIGHT,
    );

    // Label chip sits astride the panel's top edge.
    let label = cx.field_or_hint(label_key).to_uppercase();
    let label_style = TextStyle::bold(28.0).with_letter_spacing(2.0);
    let label_w = cx.width(&label_style, &label);
    let chip_w = label_w + 56.0;
    let chip_x = x + (width - chip_w) / 2.0;
    let chip = Rect::new(
        chip_x,
        PANEL_TOP - CHIP_H / 2.0,
        chip_x + chip_w,
        PANEL_TOP + CHIP_H / 2.0,
    );
    cx.fill_path(
        RoundedRect::from_rect(chip, CHIP_H / 2.0).to_path(0.1),
        chip_color,
    );
    cx.text_centered(
        x + width / 2.0,
        theme::centered_baseline(PANEL_TOP, label_style.size),
        &label,
        label_style,
        theme::PAPER,
    );

    let body = cx.field_or_hint(body_key);
    cx.flow_text(
        x + 44.0,
        PANEL_TOP + 120.0,
        48.0,
        TextStyle::body(34.0),
        theme::INK,
        body,
        width - 88.0,
    );
}
