//! Cover: three vertical bands, dark-light-dark, with the title stack
//! inside the light channel.

use crate::compile::context::PlanCx;
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Point, Rect, SURFACE};

const BAND_W: f64 = 132.0;
const CHANNEL_PAD: f64 = 72.0;
const TITLE_Y: f64 = 392.0;
const TITLE_LINE_H: f64 = 104.0;
const RULE_GAP: f64 = 52.0;

/// Baseline y of the accent rule under a title of `title_lines` lines.
/// The rule rides the wrapped title down, which is what keeps long
/// titles from colliding with their subtitle.
pub(crate) fn rule_y(title_lines: usize) -> f64 {
    TITLE_Y + title_lines.saturating_sub(1) as f64 * TITLE_LINE_H + RULE_GAP
}

pub(crate) fn plan(cx: &mut PlanCx) {
    cx.fill_rect(Rect::new(0.0, 0.0, SURFACE, SURFACE), theme::INK);
    cx.fill_rect(Rect::new(BAND_W, 0.0, SURFACE - BAND_W, SURFACE), theme::PAPER);
    chrome::guides(cx, theme::INK);
    // Band boundaries double as the accent mark on this template.
    cx.fill_rect(Rect::new(BAND_W - 3.0, 0.0, BAND_W + 3.0, SURFACE), theme::ACCENT);
    cx.fill_rect(
        Rect::new(SURFACE - BAND_W - 3.0, 0.0, SURFACE - BAND_W + 3.0, SURFACE),
        theme::ACCENT,
    );

    let x = BAND_W + CHANNEL_PAD;
    let max_w = SURFACE - 2.0 * (BAND_W + CHANNEL_PAD);

    let title = cx.field_or_hint("title");
    let title_lines = cx.flow_text(
        x,
        TITLE_Y,
        TITLE_LINE_H,
        TextStyle::display(92.0),
        theme::INK,
        title,
        max_w,
    );

    let rule_y = rule_y(title_lines.max(1));
    chrome::accent_bar(cx, x, rule_y, 128.0);

    let subtitle = cx.field_or_hint("subtitle");
    cx.flow_text(
        x,
        rule_y + 76.0,
        54.0,
        TextStyle::body(40.0),
        theme::INK,
        subtitle,
        max_w,
    );

    if let Some(tagline) = cx.field("tagline") {
        let style = TextStyle::bold(26.0).with_letter_spacing(theme::KICKER_TRACKING);
        cx.text(
            Point::new(x, SURFACE - 118.0),
            tagline.to_uppercase(),
            style,
            theme::MUTED,
        );
    }
}
