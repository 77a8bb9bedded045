//! Divider: a dark section break, part label over a large title.

use crate::compile::context::PlanCx;
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Point, MARGIN, SURFACE};

pub(crate) fn plan(cx: &mut PlanCx) {
    chrome::base_dark(cx);

    let part = cx.field_or_hint("part");
    cx.text(
        Point::new(MARGIN, 430.0),
        part.to_uppercase(),
        TextStyle::bold(30.0).with_letter_spacing(theme::KICKER_TRACKING),
        theme::ACCENT,
    );
    chrome::accent_bar(cx, MARGIN, 462.0, 96.0);

    let title = cx.field_or_hint("title");
    cx.flow_text(
        MARGIN,
        580.0,
        100.0,
        TextStyle::display(88.0),
        theme::PAPER,
        title,
        SURFACE - 2.0 * MARGIN,
    );
}
