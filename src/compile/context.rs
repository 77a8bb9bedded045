//! Planner context.
//!
//! [`PlanCx`] is what a template planner works against: field lookup with
//! placeholder fallback, a width oracle, op emission, and the two text
//! flow routines (plain and emphasized) every text-bearing template goes
//! through.

use crate::compile::plan::{DrawOp, SlidePlan};
use crate::compile::theme;
use crate::deck::fields::FieldValues;
use crate::deck::template::TemplateDef;
use crate::fonts::store::{FontVariant, TextMeasure, TextStyle};
use crate::foundation::core::{BezPath, Point, Rect, Rgba8Premul};
use crate::text::wrap;

/// How emphasized words are set apart from their line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emphasis {
    /// Bolder face plus an underline in the text color.
    Underline,
    /// Accent color only, face unchanged. For text that is already bold.
    Accent,
}

/// Mutable state threaded through one slide compilation.
pub(crate) struct PlanCx<'a> {
    measure: &'a mut dyn TextMeasure,
    def: &'static TemplateDef,
    fields: &'a FieldValues,
    ops: Vec<DrawOp>,
}

impl<'a> PlanCx<'a> {
    pub(crate) fn new(
        measure: &'a mut dyn TextMeasure,
        def: &'static TemplateDef,
        fields: &'a FieldValues,
    ) -> Self {
        Self {
            measure,
            def,
            fields,
            ops: Vec::new(),
        }
    }

    /// Field value if present and non-blank.
    pub(crate) fn field(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key)
    }

    /// Field value, falling back to the template's placeholder hint.
    pub(crate) fn field_or_hint(&self, key: &str) -> &'a str {
        self.fields.get_or(key, self.def.placeholder(key))
    }

    /// The template's placeholder hint for `key`, empty when unknown.
    pub(crate) fn hint(&self, key: &str) -> &'static str {
        self.def.placeholder(key)
    }

    /// Direct access to the width oracle, for layout helpers that are
    /// tested without a context.
    pub(crate) fn measurer(&mut self) -> &mut dyn TextMeasure {
        &mut *self.measure
    }

    pub(crate) fn into_plan(self) -> SlidePlan {
        SlidePlan { ops: self.ops }
    }

    // -- emission ---------------------------------------------------------

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba8Premul) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color,
            opacity: 1.0,
        });
    }

    pub(crate) fn fill_rect_faded(&mut self, rect: Rect, color: Rgba8Premul, opacity: f32) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color,
            opacity,
        });
    }

    pub(crate) fn fill_path(&mut self, path: BezPath, color: Rgba8Premul) {
        self.ops.push(DrawOp::FillPath {
            path,
            color,
            opacity: 1.0,
        });
    }

    pub(crate) fn stroke_path(&mut self, path: BezPath, color: Rgba8Premul, width: f64) {
        self.ops.push(DrawOp::StrokePath {
            path,
            color,
            width,
            dash: None,
            opacity: 1.0,
        });
    }

    pub(crate) fn stroke_dashed(
        &mut self,
        path: BezPath,
        color: Rgba8Premul,
        width: f64,
        dash: [f64; 2],
    ) {
        self.ops.push(DrawOp::StrokePath {
            path,
            color,
            width,
            dash: Some(dash),
            opacity: 1.0,
        });
    }

    pub(crate) fn text(
        &mut self,
        origin: Point,
        text: impl Into<String>,
        style: TextStyle,
        color: Rgba8Premul,
    ) {
        self.ops.push(DrawOp::TextRun {
            origin,
            text: text.into(),
            style,
            color,
        });
    }

    /// Emit one run horizontally centered on `center_x`.
    pub(crate) fn text_centered(
        &mut self,
        center_x: f64,
        baseline: f64,
        text: &str,
        style: TextStyle,
        color: Rgba8Premul,
    ) {
        let w = self.width(&style, text);
        self.text(Point::new(center_x - w / 2.0, baseline), text, style, color);
    }

    // -- measurement ------------------------------------------------------

    pub(crate) fn width(&mut self, style: &TextStyle, text: &str) -> f64 {
        self.measure.text_width(style, text)
    }

    /// Greedy-wrap `text` against `max_width` in `style`.
    pub(crate) fn wrap(&mut self, style: &TextStyle, text: &str, max_width: f64) -> Vec<String> {
        wrap::wrap_lines(&mut *self.measure, style, text, max_width)
    }

    /// Number of wrapped lines, including blank spacer lines.
    pub(crate) fn line_count(&mut self, style: &TextStyle, text: &str, max_width: f64) -> usize {
        self.wrap(style, text, max_width).len()
    }

    // -- text flow --------------------------------------------------------

    /// Wrap and emit a text block. The first baseline sits at `y`;
    /// subsequent baselines step by `line_height`. Blank spacer lines
    /// advance the cursor without emitting. Returns the line count.
    pub(crate) fn flow_text(
        &mut self,
        x: f64,
        y: f64,
        line_height: f64,
        style: TextStyle,
        color: Rgba8Premul,
        text: &str,
        max_width: f64,
    ) -> usize {
        let lines = self.wrap(&style, text, max_width);
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = y + i as f64 * line_height;
            self.text(Point::new(x, baseline), line.as_str(), style, color);
        }
        lines.len()
    }

    /// Like [`flow_text`](Self::flow_text), but words of `phrase` found
    /// in the text are set apart per `mode`. Line breaks are decided in
    /// the base style first; emphasized lines are then re-emitted word by
    /// word with a measured space advance so the styled words keep their
    /// wrapped positions.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn flow_text_emphasized(
        &mut self,
        x: f64,
        y: f64,
        line_height: f64,
        style: TextStyle,
        color: Rgba8Premul,
        text: &str,
        max_width: f64,
        phrase: &str,
        mode: Emphasis,
    ) -> usize {
        if !wrap::phrase_occurs(text, phrase) {
            return self.flow_text(x, y, line_height, style, color, text, max_width);
        }
        let phrase_words = wrap::phrase_words(phrase);
        let lines = self.wrap(&style, text, max_width);
        let space = self.width(&style, " ");
        let strong_style = match mode {
            Emphasis::Underline => TextStyle {
                variant: bold_variant(style.variant),
                ..style
            },
            Emphasis::Accent => style,
        };
        let strong_color = match mode {
            Emphasis::Underline => color,
            Emphasis::Accent => theme::ACCENT,
        };
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = y + i as f64 * line_height;
            let mut cursor = x;
            for word in line.split(' ').filter(|w| !w.is_empty()) {
                let hit = wrap::word_matches(word, &phrase_words);
                let (run_style, run_color) = if hit {
                    (strong_style, strong_color)
                } else {
                    (style, color)
                };
                let w = self.width(&run_style, word);
                self.text(Point::new(cursor, baseline), word, run_style, run_color);
                if hit && mode == Emphasis::Underline {
                    self.fill_rect(
                        Rect::new(
                            cursor,
                            baseline + theme::UNDERLINE_DROP,
                            cursor + w,
                            baseline + theme::UNDERLINE_DROP + theme::UNDERLINE_WEIGHT,
                        ),
                        run_color,
                    );
                }
                cursor += w + space;
            }
        }
        lines.len()
    }
}

/// Next-heavier face for underline emphasis. Display stays display.
fn bold_variant(variant: FontVariant) -> FontVariant {
    match variant {
        FontVariant::BodyRegular | FontVariant::BodyItalic => FontVariant::BodyBold,
        FontVariant::BodyBold | FontVariant::DisplayBold => variant,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/context.rs"]
mod tests;
