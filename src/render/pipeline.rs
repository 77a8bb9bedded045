//! Whole-deck rendering.
//!
//! [`render_deck`] compiles every slide, rasterizes each distinct plan
//! exactly once, and streams frames into a [`SlideSink`] in deck order.
//! The sink runs on its own thread; out-of-order worker completion is
//! reordered at the sink boundary under bounded-channel backpressure.

use std::collections::HashMap;
use std::sync::{Arc, mpsc};

use rayon::prelude::*;

use crate::compile::fingerprint::PlanFingerprint;
use crate::compile::plan::SlidePlan;
use crate::deck::slide::{Deck, Slide};
use crate::encode::sink::{SinkSpec, SlideSink};
use crate::fonts::store::FontCatalog;
use crate::foundation::core::{Canvas, SlideIndex};
use crate::foundation::error::{CardstockError, CardstockResult};
use crate::render::cpu::{SlideFrame, SlideRenderer};

/// Options controlling [`render_deck`] behavior.
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Uniform scale factor applied to the canonical square surface.
    pub scale: f64,
    /// Rasterize distinct slides in parallel on a dedicated thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Bounded channel capacity between render workers and the sink thread.
    pub channel_capacity: usize,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            scale: 1.0,
            parallel: false,
            threads: None,
            channel_capacity: 4,
        }
    }
}

/// Deck render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeckRenderStats {
    /// Total slides in the deck.
    pub slides_total: u64,
    /// Slides actually rasterized (duplicates render once).
    pub slides_rendered: u64,
    /// Slides that reused an identical earlier raster.
    pub slides_elided: u64,
}

/// Position label for `slide` at deck position `pos`.
///
/// Cover, punchline, divider, and call-to-action cards never carry a
/// label; every other template shows its 1-based deck position. This is
/// deck policy, not template layout: compilation draws whatever index it
/// is handed.
pub fn display_index(slide: &Slide, pos: usize) -> Option<SlideIndex> {
    if slide.template.suppresses_index() {
        None
    } else {
        Some(SlideIndex(pos as u32))
    }
}

/// Render a whole deck into a sink, in slide order.
///
/// Slides with identical plans (same template, fields, and label) are
/// rasterized once and the payload is shared. The sink sees every slide
/// exactly once, in strictly increasing index order.
#[tracing::instrument(skip(deck, catalog, sink))]
pub fn render_deck(
    deck: &Deck,
    catalog: &FontCatalog,
    opts: &RenderOpts,
    sink: &mut dyn SlideSink,
) -> CardstockResult<DeckRenderStats> {
    if deck.is_empty() {
        return Err(CardstockError::validation(
            "render_deck deck must be non-empty",
        ));
    }
    let canvas = Canvas::scaled(opts.scale)?;

    // Compile everything up front on this thread; plans are small next to
    // their rasters.
    let mut renderer = SlideRenderer::new(catalog)?;
    let mut plans = Vec::with_capacity(deck.len());
    for (pos, slide) in deck.slides.iter().enumerate() {
        let index = display_index(slide, pos);
        plans.push(renderer.compile(slide.template, &slide.fields, index));
    }

    // Identical plans rasterize once; later positions reuse the payload.
    let mut uniq = Vec::<usize>::new();
    let mut map = Vec::<usize>::with_capacity(plans.len());
    let mut seen = HashMap::<PlanFingerprint, usize>::new();
    for (pos, plan) in plans.iter().enumerate() {
        let u = *seen.entry(plan.fingerprint()).or_insert_with(|| {
            let i = uniq.len();
            uniq.push(pos);
            i
        });
        map.push(u);
    }

    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        None
    };

    let spec = SinkSpec {
        canvas,
        slide_count: deck.len() as u32,
    };
    let cap = opts.channel_capacity.max(1);
    let total = plans.len();

    // Delivery thread: enforce in-order arrival at the sink regardless of
    // render completion order.
    std::thread::scope(|scope| -> CardstockResult<DeckRenderStats> {
        let (tx, rx) = mpsc::sync_channel::<SlideMsg>(cap);
        let spec_sink = spec.clone();
        let sink_ref: &mut dyn SlideSink = sink;

        let delivery = scope.spawn(move || -> CardstockResult<()> {
            sink_ref.begin(spec_sink)?;

            let mut next = 0usize;
            let mut pending = HashMap::<usize, Arc<SlideFrame>>::new();
            while next < total {
                if let Some(frame) = pending.remove(&next) {
                    sink_ref.push_slide(SlideIndex(next as u32), &frame)?;
                    next += 1;
                    continue;
                }

                let msg = rx.recv().map_err(|_| {
                    CardstockError::render("delivery channel disconnected unexpectedly")
                })?;
                pending.insert(msg.pos, msg.frame);

                while let Some(frame) = pending.remove(&next) {
                    sink_ref.push_slide(SlideIndex(next as u32), &frame)?;
                    next += 1;
                    if next >= total {
                        break;
                    }
                }
            }

            sink_ref.end()?;
            Ok(())
        });

        let produce_res = (|| -> CardstockResult<()> {
            let unique_frames = match pool.as_ref() {
                Some(pool) => render_unique_parallel(pool, catalog, &plans, &uniq, opts.scale)?,
                None => {
                    let mut frames = Vec::with_capacity(uniq.len());
                    for &p in &uniq {
                        frames.push(Arc::new(renderer.render_plan(&plans[p], opts.scale)?));
                    }
                    frames
                }
            };
            for (pos, &u) in map.iter().enumerate() {
                tx.send(SlideMsg {
                    pos,
                    frame: unique_frames[u].clone(),
                })
                .map_err(|_| CardstockError::render("sink thread is not accepting slides"))?;
            }
            Ok(())
        })();

        drop(tx);
        let delivery_res = delivery
            .join()
            .map_err(|_| CardstockError::render("sink thread panicked"))?;

        if let Err(e) = produce_res {
            let _ = delivery_res;
            return Err(e);
        }
        delivery_res?;

        Ok(DeckRenderStats {
            slides_total: total as u64,
            slides_rendered: uniq.len() as u64,
            slides_elided: (total - uniq.len()) as u64,
        })
    })
}

#[derive(Debug)]
struct SlideMsg {
    pos: usize,
    frame: Arc<SlideFrame>,
}

fn build_thread_pool(threads: Option<usize>) -> CardstockResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CardstockError::validation(
            "render_deck 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CardstockError::render(format!("failed to build rayon thread pool: {e}")))
}

struct Worker {
    renderer: CardstockResult<SlideRenderer>,
}

impl Worker {
    fn new(catalog: &FontCatalog) -> Self {
        Self {
            renderer: SlideRenderer::new(catalog),
        }
    }

    fn render(&mut self, plan: &SlidePlan, scale: f64) -> CardstockResult<SlideFrame> {
        match &mut self.renderer {
            Ok(r) => r.render_plan(plan, scale),
            Err(e) => Err(CardstockError::render(format!(
                "render worker failed to start: {e}"
            ))),
        }
    }
}

fn render_unique_parallel(
    pool: &rayon::ThreadPool,
    catalog: &FontCatalog,
    plans: &[SlidePlan],
    uniq: &[usize],
    scale: f64,
) -> CardstockResult<Vec<Arc<SlideFrame>>> {
    let rendered = pool.install(|| {
        uniq.par_iter()
            .enumerate()
            .map_init(
                || Worker::new(catalog),
                |w, (i, &p)| -> CardstockResult<(usize, Arc<SlideFrame>)> {
                    let frame = w.render(&plans[p], scale)?;
                    Ok((i, Arc::new(frame)))
                },
            )
            .collect::<Vec<_>>()
    });

    let mut frames = vec![None::<Arc<SlideFrame>>; uniq.len()];
    for r in rendered {
        let (i, frame) = r?;
        frames[i] = Some(frame);
    }
    frames
        .into_iter()
        .map(|x| x.ok_or_else(|| CardstockError::render("missing unique rendered slide")))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
