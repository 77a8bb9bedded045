//! Blank: ruled paper with free-flowing body text and nothing else.

use crate::compile::chrome;
use crate::compile::context::PlanCx;
use crate::compile::theme;
use crate::fonts::store::TextStyle;
use crate::foundation::core::{MARGIN, SURFACE};

pub(crate) fn plan(cx: &mut PlanCx) {
    chrome::base(cx);

    let body = cx.field_or_hint("body");
    cx.flow_text(
        MARGIN,
        300.0,
        54.0,
        TextStyle::body(38.0),
        theme::INK,
        body,
        SURFACE - 2.0 * MARGIN,
    );
}
