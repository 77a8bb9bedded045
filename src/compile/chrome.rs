//! Shared slide furniture.
//!
//! Everything here is decorative and fixed: the paper field, the faint
//! ruled guides, the signature margin rule, and the deck position label.
//! Templates layer their content between the base and the index label.

use crate::compile::context::PlanCx;
use crate::compile::theme;
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Point, Rect, Rgba8Premul, SlideIndex, MARGIN, SURFACE};

/// Paper background, ruled guides, margin rule. The standard light base.
pub(crate) fn base(cx: &mut PlanCx) {
    cx.fill_rect(Rect::new(0.0, 0.0, SURFACE, SURFACE), theme::PAPER);
    guides(cx, theme::INK);
    margin_rule(cx, theme::ACCENT);
}

/// Ink background with paper-toned guides. Used by the loud closers.
pub(crate) fn base_dark(cx: &mut PlanCx) {
    cx.fill_rect(Rect::new(0.0, 0.0, SURFACE, SURFACE), theme::INK);
    guides(cx, theme::PAPER);
    margin_rule(cx, theme::ACCENT);
}

/// Faint horizontal rules across the full surface, like lined paper.
pub(crate) fn guides(cx: &mut PlanCx, color: Rgba8Premul) {
    let mut y = theme::GUIDE_STEP;
    while y < SURFACE {
        cx.fill_rect_faded(
            Rect::new(
                0.0,
                y - theme::GUIDE_WEIGHT / 2.0,
                SURFACE,
                y + theme::GUIDE_WEIGHT / 2.0,
            ),
            color,
            theme::GUIDE_OPACITY,
        );
        y += theme::GUIDE_STEP;
    }
}

/// The full-height vertical rule just inside the left edge.
pub(crate) fn margin_rule(cx: &mut PlanCx, color: Rgba8Premul) {
    let half = theme::MARGIN_RULE_WEIGHT / 2.0;
    cx.fill_rect(
        Rect::new(
            theme::MARGIN_RULE_X - half,
            0.0,
            theme::MARGIN_RULE_X + half,
            SURFACE,
        ),
        color,
    );
}

/// Two-digit deck position at the top left, when the caller wants one.
pub(crate) fn index_label(cx: &mut PlanCx, index: Option<SlideIndex>) {
    let Some(index) = index else { return };
    let style =
        TextStyle::bold(theme::INDEX_SIZE).with_letter_spacing(theme::KICKER_TRACKING);
    cx.text(
        Point::new(MARGIN, theme::INDEX_BASELINE),
        index.label(),
        style,
        theme::MUTED,
    );
}

/// Small uppercase accent line above a headline.
pub(crate) fn kicker(cx: &mut PlanCx, x: f64, baseline: f64, text: &str) {
    let style =
        TextStyle::bold(theme::KICKER_SIZE).with_letter_spacing(theme::KICKER_TRACKING);
    cx.text(
        Point::new(x, baseline),
        text.to_uppercase(),
        style,
        theme::ACCENT,
    );
}

/// Short horizontal accent bar, the house divider stroke.
pub(crate) fn accent_bar(cx: &mut PlanCx, x: f64, y: f64, width: f64) {
    cx.fill_rect(Rect::new(x, y, x + width, y + 10.0), theme::ACCENT);
}
