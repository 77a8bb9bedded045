//! Evidence: one oversized statistic with its reading and source line.

use crate::compile::context::PlanCx;
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Point, MARGIN, SURFACE};

pub(crate) fn plan(cx: &mut PlanCx) {
    chrome::base(cx);

    let stat = cx.field_or_hint("stat");
    cx.text(
        Point::new(MARGIN, 472.0),
        stat,
        TextStyle::display(190.0),
        theme::ACCENT,
    );

    let label = cx.field_or_hint("label");
    cx.flow_text(
        MARGIN,
        580.0,
        58.0,
        TextStyle::bold(44.0),
        theme::INK,
        label,
        SURFACE - 2.0 * MARGIN,
    );

    if let Some(source) = cx.field("source") {
        cx.text(
            Point::new(MARGIN, SURFACE - 132.0),
            format!("Source: {source}"),
            TextStyle::body(28.0),
            theme::MUTED,
        );
    }
}
