//! Export sinks.
//!
//! Sinks consume rendered slides in deck order and are driven by
//! [`crate::render::pipeline::render_deck`].

/// PNG-per-slide directory sink.
pub mod png;
/// Slide sink trait and built-in sinks.
pub mod sink;
