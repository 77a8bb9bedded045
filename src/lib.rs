//! Cardstock is a deterministic slide-card rendering engine.
//!
//! It turns structured text fields into fixed-size square raster slides
//! through a closed set of layout templates. The API is plan-oriented:
//!
//! - Load or build a [`Deck`] (optionally from a [`SequenceBlueprint`])
//! - Prepare a [`FontCatalog`] once, up front
//! - Compile slides into [`SlidePlan`]s and rasterize them with a
//!   [`SlideRenderer`], or stream a whole deck into a [`SlideSink`]
//!
//! Layout is pure: the same template, fields, and index always compile to
//! the same plan and render to identical pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod text;

/// Slide layout compiler: draw ops, plans, fingerprints.
pub mod compile;
/// Deck model: templates, fields, slides, sequence blueprints.
pub mod deck;
/// Export sinks for rendered slides.
pub mod encode;
/// Font catalog and text shaping.
pub mod fonts;
/// CPU rasterization backend and deck pipeline.
pub mod render;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Point, Rect, Rgba8Premul, SlideIndex, Vec2,
};
pub use crate::foundation::error::{CardstockError, CardstockResult};

pub use crate::compile::plan::{DrawOp, SlidePlan};
pub use crate::deck::blueprint::SequenceBlueprint;
pub use crate::deck::slide::{Deck, Slide};
pub use crate::deck::template::TemplateKind;
pub use crate::encode::png::PngDirSink;
pub use crate::encode::sink::{InMemorySink, SinkSpec, SlideSink};
pub use crate::fonts::store::{FontCatalog, TextMeasure};
pub use crate::render::cpu::{SlideFrame, SlideRenderer};
pub use crate::render::pipeline::{render_deck, DeckRenderStats, RenderOpts};
