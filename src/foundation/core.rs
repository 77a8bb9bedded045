use crate::foundation::error::{CardstockError, CardstockResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Edge length of the canonical square slide surface, in unscaled pixels.
pub const SURFACE: f64 = 1080.0;

/// Outer content margin shared by every template.
pub const MARGIN: f64 = 96.0;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas for the canonical surface at a uniform scale factor.
    pub fn scaled(scale: f64) -> CardstockResult<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(CardstockError::validation(
                "scale factor must be finite and > 0",
            ));
        }
        let side = (SURFACE * scale).round() as u32;
        Ok(Self {
            width: side,
            height: side,
        })
    }
}

/// 0-based position of a slide within its deck.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SlideIndex(pub u32);

impl SlideIndex {
    /// Zero-padded two-digit label showing the 1-based position ("01", "07", "12").
    pub fn label(self) -> String {
        format!("{:02}", self.0 + 1)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Opaque color from straight RGB.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
