//! Deck model: field schemas, the closed template registry, slides, and
//! sequence blueprints.
//!
//! Everything here is plain data. Rendering consumes it read-only; the
//! only validation the engine ever enforces is the export gate on
//! [`slide::Deck`].

/// Built-in deck blueprints.
pub mod blueprint;
/// Field schemas and per-slide field values.
pub mod fields;
/// Slides and decks, plus the JSON document boundary.
pub mod slide;
/// The closed template registry.
pub mod template;
