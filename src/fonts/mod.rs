//! Font loading and text shaping.
//!
//! [`store::FontCatalog::prepare`] is the one-time readiness gate for the
//! closed font set; rendering is constructed from a prepared catalog and
//! can assume every variant resolves to a usable face.

/// Font catalog, shaper, and the measurement seam.
pub mod store;
