//! Fixed visual identity.
//!
//! The theme is a closed set of constants, not a configuration surface.
//! Every template draws from the same warm-paper palette and the same
//! furniture metrics, which is what makes a deck read as one artifact.

use crate::foundation::core::Rgba8Premul;

/// Warm paper background.
pub(crate) const PAPER: Rgba8Premul = Rgba8Premul::opaque(246, 241, 231);

/// Near-black ink for body text and outlines.
pub(crate) const INK: Rgba8Premul = Rgba8Premul::opaque(20, 17, 15);

/// Saturated accent for emphasis, rules, and marks.
pub(crate) const ACCENT: Rgba8Premul = Rgba8Premul::opaque(217, 72, 43);

/// Muted brown-grey for secondary text and the index label.
pub(crate) const MUTED: Rgba8Premul = Rgba8Premul::opaque(107, 98, 88);

/// Dimmed paper for secondary text on dark grounds.
pub(crate) const PAPER_DIM: Rgba8Premul = Rgba8Premul::opaque(183, 175, 162);

/// Vertical spacing of the ruled background guides.
pub(crate) const GUIDE_STEP: f64 = 72.0;

/// Guide line thickness.
pub(crate) const GUIDE_WEIGHT: f64 = 1.5;

/// Guide layer opacity, faint enough to read as paper texture.
pub(crate) const GUIDE_OPACITY: f32 = 0.08;

/// Horizontal position of the signature margin rule.
pub(crate) const MARGIN_RULE_X: f64 = 64.0;

/// Margin rule thickness.
pub(crate) const MARGIN_RULE_WEIGHT: f64 = 3.0;

/// Font size of the index label.
pub(crate) const INDEX_SIZE: f32 = 26.0;

/// Baseline y of the index label.
pub(crate) const INDEX_BASELINE: f64 = 84.0;

/// Font size of kicker lines.
pub(crate) const KICKER_SIZE: f32 = 26.0;

/// Letter spacing applied to kickers and other small caps-style runs.
pub(crate) const KICKER_TRACKING: f32 = 3.0;

/// Thickness of emphasis underlines.
pub(crate) const UNDERLINE_WEIGHT: f64 = 3.0;

/// Gap between a baseline and its emphasis underline.
pub(crate) const UNDERLINE_DROP: f64 = 4.0;

/// Default outline weight for diagram boxes and connectors.
pub(crate) const OUTLINE_WEIGHT: f64 = 3.0;

/// Fraction of the font size from a line's vertical center down to its
/// baseline. Used when centering a single run inside a box without full
/// font metrics; measurement only provides widths.
pub(crate) const BASELINE_SHIFT: f64 = 0.35;

/// Baseline y for a run vertically centered at `center_y`.
pub(crate) fn centered_baseline(center_y: f64, size: f32) -> f64 {
    center_y + f64::from(size) * BASELINE_SHIFT
}
