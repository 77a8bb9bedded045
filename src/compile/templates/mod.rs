//! One planner per template kind.
//!
//! Planners are small and declarative: pick fields, wrap text, place
//! furniture, hand geometry to the diagram module. They never validate
//! input and never fail; a blank field falls back to its placeholder
//! hint or drops the dependent element.

pub(crate) mod blank;
pub(crate) mod columns;
pub(crate) mod comparison;
pub(crate) mod cover;
pub(crate) mod cta;
pub(crate) mod divider;
pub(crate) mod evidence;
pub(crate) mod framework;
pub(crate) mod insight;
pub(crate) mod list;
pub(crate) mod punchline;
pub(crate) mod quote;
