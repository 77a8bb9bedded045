//! Punchline: one vertically centered statement, optionally with
//! accent-colored emphasis words.

use crate::compile::chrome;
use crate::compile::context::{Emphasis, PlanCx};
use crate::compile::theme;
use crate::fonts::store::TextStyle;
use crate::foundation::core::{MARGIN, SURFACE};

const LINE_H: f64 = 94.0;

pub(crate) fn plan(cx: &mut PlanCx) {
    chrome::base(cx);

    let style = TextStyle::display(78.0);
    let max_w = SURFACE - 2.0 * MARGIN;
    let text = cx.field_or_hint("text");
    let emphasis = cx.field("emphasis").unwrap_or_default();

    // Measurement-only pre-pass so the block can center symmetrically.
    let lines = cx.line_count(&style, text, max_w);
    let block_h = lines as f64 * LINE_H;
    let first_baseline = (SURFACE - block_h) / 2.0 + LINE_H * 0.75;

    cx.flow_text_emphasized(
        MARGIN,
        first_baseline,
        LINE_H,
        style,
        theme::INK,
        text,
        max_w,
        emphasis,
        Emphasis::Accent,
    );
}
