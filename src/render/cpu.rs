//! CPU plan executor powered by `vello_cpu`.
//!
//! Plans arrive in unscaled canvas coordinates; the renderer applies one
//! uniform scale transform to every op, so a 2160px export is the same
//! drawing as a 1080px one with no per-template size logic.

use crate::compile;
use crate::compile::plan::{DrawOp, SlidePlan};
use crate::deck::fields::FieldValues;
use crate::deck::template::TemplateKind;
use crate::fonts::store::{FontCatalog, TextBrushRgba8, TextShaper};
use crate::foundation::core::{Affine, BezPath, Canvas, SlideIndex};
use crate::foundation::error::{CardstockError, CardstockResult};

/// One rasterized slide: premultiplied RGBA8 pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl SlideFrame {
    /// Copy of the pixel data converted to straight (unpremultiplied)
    /// alpha, the layout PNG encoders expect.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a == 0 {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
                continue;
            }
            px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
        }
        out
    }
}

/// Plan executor bound to a prepared font catalog.
///
/// Holds the Parley shaper and reuses one `vello_cpu` render context
/// across slides of the same size. Construct once per thread and feed it
/// plans; it is cheap to keep alive and expensive to rebuild.
pub struct SlideRenderer {
    shaper: TextShaper,
    ctx: Option<vello_cpu::RenderContext>,
}

impl SlideRenderer {
    /// Renderer over `catalog`'s faces.
    pub fn new(catalog: &FontCatalog) -> CardstockResult<Self> {
        Ok(Self {
            shaper: TextShaper::new(catalog)?,
            ctx: None,
        })
    }

    /// Compile one slide using this renderer's shaper as the width oracle.
    pub fn compile(
        &mut self,
        kind: TemplateKind,
        fields: &FieldValues,
        index: Option<SlideIndex>,
    ) -> SlidePlan {
        compile::compile_slide(kind, fields, index, &mut self.shaper)
    }

    /// Compile and rasterize one slide in a single step.
    pub fn render_slide(
        &mut self,
        kind: TemplateKind,
        fields: &FieldValues,
        index: Option<SlideIndex>,
        scale: f64,
    ) -> CardstockResult<SlideFrame> {
        let plan = self.compile(kind, fields, index);
        self.render_plan(&plan, scale)
    }

    /// Rasterize a compiled plan at a uniform scale factor.
    pub fn render_plan(&mut self, plan: &SlidePlan, scale: f64) -> CardstockResult<SlideFrame> {
        let canvas = Canvas::scaled(scale)?;
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CardstockError::render("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CardstockError::render("canvas height exceeds u16"))?;
        let view = Affine::scale(scale);

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.with_ctx_mut(w, h, |this, ctx| {
            for op in &plan.ops {
                this.draw_op(op, view, ctx)?;
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(SlideFrame {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> CardstockResult<R>,
    ) -> CardstockResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_op(
        &mut self,
        op: &DrawOp,
        view: Affine,
        ctx: &mut vello_cpu::RenderContext,
    ) -> CardstockResult<()> {
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillRect {
                rect,
                color,
                opacity,
            } => {
                let opacity = opacity.clamp(0.0, 1.0);
                ctx.set_transform(affine_to_cpu(view));
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    color.r, color.g, color.b, color.a,
                ));
                if opacity < 1.0 {
                    ctx.push_opacity_layer(opacity);
                }
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    rect.x0, rect.y0, rect.x1, rect.y1,
                ));
                if opacity < 1.0 {
                    ctx.pop_layer();
                }
                Ok(())
            }
            DrawOp::FillPath {
                path,
                color,
                opacity,
            } => {
                let opacity = opacity.clamp(0.0, 1.0);
                ctx.set_transform(affine_to_cpu(view));
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    color.r, color.g, color.b, color.a,
                ));
                if opacity < 1.0 {
                    ctx.push_opacity_layer(opacity);
                }
                let cpu_path = bezpath_to_cpu(path);
                ctx.fill_path(&cpu_path);
                if opacity < 1.0 {
                    ctx.pop_layer();
                }
                Ok(())
            }
            DrawOp::StrokePath {
                path,
                color,
                width,
                dash,
                opacity,
            } => {
                let opacity = opacity.clamp(0.0, 1.0);
                ctx.set_transform(affine_to_cpu(view));
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    color.r, color.g, color.b, color.a,
                ));
                let mut stroke = vello_cpu::kurbo::Stroke::new(*width);
                if let Some([on, off]) = dash {
                    stroke = stroke.with_dashes(0.0, [*on, *off]);
                }
                ctx.set_stroke(stroke);
                if opacity < 1.0 {
                    ctx.push_opacity_layer(opacity);
                }
                let cpu_path = bezpath_to_cpu(path);
                ctx.stroke_path(&cpu_path);
                if opacity < 1.0 {
                    ctx.pop_layer();
                }
                Ok(())
            }
            DrawOp::TextRun {
                origin,
                text,
                style,
                color,
            } => {
                let brush = TextBrushRgba8 {
                    r: color.r,
                    g: color.g,
                    b: color.b,
                    a: color.a,
                };
                let layout = self.shaper.shape(style, text, brush)?;
                // Plans anchor runs at the baseline; Parley lays out from
                // the line box top.
                let Some(baseline) = layout
                    .lines()
                    .next()
                    .map(|l| f64::from(l.metrics().baseline))
                else {
                    return Ok(());
                };
                let tr = view * Affine::translate((origin.x, origin.y - baseline));
                ctx.set_transform(affine_to_cpu(tr));

                let font = self.shaper.font_data(style.variant);
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            brush.r, brush.g, brush.b, brush.a,
                        ));
                        let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                Ok(())
            }
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
