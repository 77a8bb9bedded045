//! Pure text utilities: greedy wrapping and emphasis word matching.
//!
//! Nothing in here touches fonts directly; widths come in through the
//! [`crate::fonts::store::TextMeasure`] seam so the algorithms stay
//! deterministic and testable without font files.

pub(crate) mod wrap;
