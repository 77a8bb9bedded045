//! Numbered and checklist layouts: a title over up to five items, with
//! item spacing picked from a density table.

use kurbo::{RoundedRect, Shape as _};
use smallvec::SmallVec;

use crate::compile::context::PlanCx;
use crate::compile::{chrome, theme};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{BezPath, Point, Rect, MARGIN, SURFACE};

const ITEM_KEYS: [&str; 5] = ["item1", "item2", "item3", "item4", "item5"];
const FIRST_ITEM_Y: f64 = 356.0;
const MARKER_COL_W: f64 = 92.0;

/// Vertical advance between items for a given non-empty item count.
/// Fewer items breathe more.
pub(crate) fn item_spacing(count: usize) -> f64 {
    match count {
        0..=3 => 150.0,
        4 => 120.0,
        _ => 96.0,
    }
}

pub(crate) fn plan_numbered(cx: &mut PlanCx) {
    let items = collected_items(cx);
    header(cx);
    let spacing = item_spacing(items.len());
    for (i, item) in items.iter().enumerate() {
        let y = FIRST_ITEM_Y + i as f64 * spacing;
        cx.text(
            Point::new(MARGIN, y),
            format!("{}.", i + 1),
            TextStyle::display(46.0),
            theme::ACCENT,
        );
        item_body(cx, y, item);
    }
}

pub(crate) fn plan_checklist(cx: &mut PlanCx) {
    let items = collected_items(cx);
    header(cx);
    let spacing = item_spacing(items.len());
    for (i, item) in items.iter().enumerate() {
        let y = FIRST_ITEM_Y + i as f64 * spacing;
        tick_mark(cx, y);
        item_body(cx, y, item);
    }
}

fn header(cx: &mut PlanCx) {
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
}

fn item_body(cx: &mut PlanCx, y: f64, text: &str) {
    cx.flow_text(
        MARGIN + MARKER_COL_W,
        y,
        48.0,
        TextStyle::body(36.0),
        theme::INK,
        text,
        SURFACE - 2.0 * MARGIN - MARKER_COL_W,
    );
}

/// Outlined box with an accent check, sharing the marker column with the
/// numbered variant.
fn tick_mark(cx: &mut PlanCx, baseline: f64) {
    let rect = Rect::new(MARGIN, baseline - 36.0, MARGIN + 44.0, baseline + 8.0);
    cx.stroke_path(
        RoundedRect::from_rect(rect, 8.0).to_path(0.1),
        theme::INK,
        theme::OUTLINE_WEIGHT,
    );
    let mut check = BezPath::new();
    check.move_to(Point::new(MARGIN + 11.0, baseline - 14.0));
    check.line_to(Point::new(MARGIN + 20.0, baseline - 4.0));
    check.line_to(Point::new(MARGIN + 34.0, baseline - 26.0));
    cx.stroke_path(check, theme::ACCENT, 5.0);
}

/// Non-blank item values in slot order. A fully blank list falls back to
/// the first three placeholder hints so the slide still composes.
fn collected_items(cx: &PlanCx) -> SmallVec<[String; 5]> {
    let mut items: SmallVec<[String; 5]> = SmallVec::new();
    for key in ITEM_KEYS {
        if let Some(value) = cx.field(key) {
            items.push(value.to_owned());
        }
    }
    if items.is_empty() {
        for key in &ITEM_KEYS[..3] {
            let hint = cx.hint(key);
            if !hint.is_empty() {
                items.push(hint.to_owned());
            }
        }
    }
    items
}

#[cfg(test)]
#[path = "../../../tests/unit/compile/list.rs"]
mod tests;
