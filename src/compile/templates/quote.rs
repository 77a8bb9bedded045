//! Quote: oversized opening mark, italic body, attribution stack whose
//! position follows the wrapped quote down.

use crate::compile::context::PlanCx;
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Point, MARGIN, SURFACE};

const QUOTE_Y: f64 = 400.0;
const QUOTE_LINE_H: f64 = 70.0;

pub(crate) fn plan(cx: &mut PlanCx) {
    chrome::base(cx);

    cx.text(
        Point::new(MARGIN - 10.0, 330.0),
        "\u{201C}",
        TextStyle::display(180.0),
        theme::ACCENT,
    );

    let quote = cx.field_or_hint("quote");
    let quote_lines = cx.flow_text(
        MARGIN + 36.0,
        QUOTE_Y,
        QUOTE_LINE_H,
        TextStyle::italic(50.0),
        theme::INK,
        quote,
        SURFACE - 2.0 * MARGIN - 36.0,
    );

    let attribution_y = QUOTE_Y + quote_lines as f64 * QUOTE_LINE_H + 64.0;
    chrome::accent_bar(cx, MARGIN + 36.0, attribution_y - 34.0, 48.0);
    let attribution = cx.field_or_hint("attribution");
    cx.text(
        Point::new(MARGIN + 36.0, attribution_y),
        attribution,
        TextStyle::bold(36.0),
        theme::INK,
    );

    if let Some(role) = cx.field("role") {
        cx.text(
            Point::new(MARGIN + 36.0, attribution_y + 46.0),
            role,
            TextStyle::body(28.0),
            theme::MUTED,
        );
    }
}
