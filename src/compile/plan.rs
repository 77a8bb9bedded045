//! Flat draw plans.
//!
//! A [`SlidePlan`] is the complete description of one rendered card: an
//! ordered list of fills, strokes, and text runs in unscaled canvas
//! coordinates. Order is z-order; executors paint front to back with no
//! retained scene graph in between.

use std::fmt::Write as _;

use kurbo::Shape as _;

use crate::compile::fingerprint::{self, PlanFingerprint};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8Premul, SURFACE};

/// One drawing command in unscaled canvas coordinates.
#[derive(Debug, Clone)]
pub enum DrawOp {
    /// Axis-aligned filled rectangle.
    FillRect {
        /// Target rectangle.
        rect: Rect,
        /// Fill color.
        color: Rgba8Premul,
        /// Layer opacity in `[0, 1]`.
        opacity: f32,
    },
    /// Filled path.
    FillPath {
        /// Path in canvas coordinates.
        path: BezPath,
        /// Fill color.
        color: Rgba8Premul,
        /// Layer opacity in `[0, 1]`.
        opacity: f32,
    },
    /// Stroked path.
    StrokePath {
        /// Path in canvas coordinates.
        path: BezPath,
        /// Stroke color.
        color: Rgba8Premul,
        /// Stroke width in canvas units.
        width: f64,
        /// Dash pattern as `[on, off]`, or `None` for a solid stroke.
        dash: Option<[f64; 2]>,
        /// Layer opacity in `[0, 1]`.
        opacity: f32,
    },
    /// One run of text anchored at the left end of its first baseline.
    TextRun {
        /// Baseline origin of the run.
        origin: Point,
        /// Text content, a single shaped line.
        text: String,
        /// Font variant, size, and tracking.
        style: TextStyle,
        /// Glyph color.
        color: Rgba8Premul,
    },
}

/// Compiled draw plan for a single slide.
#[derive(Debug, Clone, Default)]
pub struct SlidePlan {
    /// Draw ops in paint order.
    pub ops: Vec<DrawOp>,
}

impl SlidePlan {
    /// The unscaled surface every plan targets.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: SURFACE as u32,
            height: SURFACE as u32,
        }
    }

    /// Number of draw ops in the plan.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True when the plan draws nothing.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Stable content hash of the plan.
    pub fn fingerprint(&self) -> PlanFingerprint {
        fingerprint::fingerprint_plan(self)
    }

    /// Render the plan as deterministic text for debugging and golden
    /// tests. No addresses, no map iteration orderings.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let canvas = self.canvas();
        let _ = writeln!(out, "SlidePlan {}x{}", canvas.width, canvas.height);
        let _ = writeln!(out, "ops: {}", self.ops.len());
        for (i, op) in self.ops.iter().enumerate() {
            match op {
                DrawOp::FillRect {
                    rect,
                    color,
                    opacity,
                } => {
                    let _ = writeln!(
                        out,
                        "  [{i}] fill_rect {} {} op={opacity:.2}",
                        fmt_rect(rect),
                        fmt_color(color),
                    );
                }
                DrawOp::FillPath {
                    path,
                    color,
                    opacity,
                } => {
                    let _ = writeln!(
                        out,
                        "  [{i}] fill_path {} {} op={opacity:.2}",
                        fmt_path(path),
                        fmt_color(color),
                    );
                }
                DrawOp::StrokePath {
                    path,
                    color,
                    width,
                    dash,
                    opacity,
                } => {
                    let dash = match dash {
                        Some([on, off]) => format!(" dash={on:.1}/{off:.1}"),
                        None => String::new(),
                    };
                    let _ = writeln!(
                        out,
                        "  [{i}] stroke_path {} {} w={width:.1}{dash} op={opacity:.2}",
                        fmt_path(path),
                        fmt_color(color),
                    );
                }
                DrawOp::TextRun {
                    origin,
                    text,
                    style,
                    color,
                } => {
                    let _ = writeln!(
                        out,
                        "  [{i}] text ({:.1},{:.1}) {:?}/{:.1} {} {text:?}",
                        origin.x,
                        origin.y,
                        style.variant,
                        style.size,
                        fmt_color(color),
                    );
                }
            }
        }
        out
    }
}

fn fmt_rect(r: &Rect) -> String {
    format!("({:.1},{:.1} {:.1}x{:.1})", r.x0, r.y0, r.width(), r.height())
}

fn fmt_color(c: &Rgba8Premul) -> String {
    format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}

fn fmt_path(p: &BezPath) -> String {
    let bbox = p.bounding_box();
    format!(
        "path[{} els, ({:.1},{:.1} {:.1}x{:.1})]",
        p.elements().len(),
        bbox.x0,
        bbox.y0,
        bbox.width(),
        bbox.height(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
