//! Rasterization: plan execution on the CPU and the deck pipeline.
//!
//! [`cpu::SlideRenderer`] turns one [`crate::compile::plan::SlidePlan`]
//! into pixels; [`pipeline::render_deck`] streams a whole deck into a
//! sink with duplicate-slide elision and optional parallelism.

/// `vello_cpu`-backed plan executor.
pub mod cpu;
/// Whole-deck rendering into sinks.
pub mod pipeline;
