use crate::foundation::core::{Canvas, SlideIndex};
use crate::foundation::error::CardstockResult;
use crate::render::cpu::SlideFrame;

/// Configuration provided to a [`SlideSink`] at the start of a deck render.
#[derive(Debug, Clone)]
pub struct SinkSpec {
    /// Output dimensions; every slide arrives at exactly this size.
    pub canvas: Canvas,
    /// Number of slides that will be pushed.
    pub slide_count: u32,
}

/// Sink contract for consuming rendered slides in deck order.
///
/// Ordering contract: `push_slide` is called once per slide in strictly
/// increasing [`SlideIndex`] order.
pub trait SlideSink: Send {
    /// Called once before any slides are pushed.
    fn begin(&mut self, spec: SinkSpec) -> CardstockResult<()>;
    /// Push one slide in strictly increasing deck order.
    fn push_slide(&mut self, idx: SlideIndex, frame: &SlideFrame) -> CardstockResult<()>;
    /// Called once after the last slide is pushed.
    fn end(&mut self) -> CardstockResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    spec: Option<SinkSpec>,
    /// Slides in deck order.
    pub(crate) frames: Vec<(SlideIndex, SlideFrame)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the spec captured in `begin`, if any.
    pub fn spec(&self) -> Option<SinkSpec> {
        self.spec.clone()
    }

    /// Borrow the captured slides.
    pub fn frames(&self) -> &[(SlideIndex, SlideFrame)] {
        &self.frames
    }
}

impl SlideSink for InMemorySink {
    fn begin(&mut self, spec: SinkSpec) -> CardstockResult<()> {
        self.spec = Some(spec);
        self.frames.clear();
        Ok(())
    }

    fn push_slide(&mut self, idx: SlideIndex, frame: &SlideFrame) -> CardstockResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> CardstockResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
