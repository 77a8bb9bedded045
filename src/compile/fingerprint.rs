//! Stable plan hashing.
//!
//! Fingerprints are 128-bit xxh3 digests of a plan's full draw content.
//! Two plans fingerprint equal iff they would rasterize identically at
//! the same scale, which is what the pipeline leans on to elide repeated
//! slides. The encoding is versioned by the seed: bump the seed when the
//! hashed layout changes meaning.

use xxhash_rust::xxh3::Xxh3;

use crate::compile::plan::{DrawOp, SlidePlan};
use crate::fonts::store::TextStyle;
use crate::foundation::core::{BezPath, Rect, Rgba8Premul};

const FINGERPRINT_SEED: u64 = 0x6c61_7965_7264_2d31;

/// 128-bit content hash of a compiled slide plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanFingerprint {
    /// High 64 bits of the digest.
    pub hi: u64,
    /// Low 64 bits of the digest.
    pub lo: u64,
}

impl std::fmt::Display for PlanFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Seeded xxh3 wrapper with explicit little-endian encodings for every
/// value kind we hash. Keeps digests stable across platforms.
struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(FINGERPRINT_SEED),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }

    fn write_u8(&mut self, v: u8) {
        self.inner.update(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(v as u8);
    }

    fn write_u32(&mut self, v: u32) {
        self.inner.update(&v.to_le_bytes());
    }

    fn write_f32(&mut self, v: f32) {
        self.write_u32(v.to_bits());
    }

    fn write_f64(&mut self, v: f64) {
        self.inner.update(&v.to_bits().to_le_bytes());
    }

    fn finish(self) -> PlanFingerprint {
        let digest = self.inner.digest128();
        PlanFingerprint {
            hi: (digest >> 64) as u64,
            lo: digest as u64,
        }
    }
}

/// Hash every op of `plan` in paint order.
pub(crate) fn fingerprint_plan(plan: &SlidePlan) -> PlanFingerprint {
    let mut h = StableHasher::new();
    let canvas = plan.canvas();
    h.write_u32(canvas.width);
    h.write_u32(canvas.height);
    h.write_u32(plan.ops.len() as u32);
    for op in &plan.ops {
        hash_op(&mut h, op);
    }
    h.finish()
}

fn hash_op(h: &mut StableHasher, op: &DrawOp) {
    match op {
        DrawOp::FillRect {
            rect,
            color,
            opacity,
        } => {
            h.write_u8(0);
            hash_rect(h, rect);
            hash_color(h, color);
            h.write_f32(*opacity);
        }
        DrawOp::FillPath {
            path,
            color,
            opacity,
        } => {
            h.write_u8(1);
            hash_path(h, path);
            hash_color(h, color);
            h.write_f32(*opacity);
        }
        DrawOp::StrokePath {
            path,
            color,
            width,
            dash,
            opacity,
        } => {
            h.write_u8(2);
            hash_path(h, path);
            hash_color(h, color);
            h.write_f64(*width);
            h.write_bool(dash.is_some());
            if let Some([on, off]) = dash {
                h.write_f64(*on);
                h.write_f64(*off);
            }
            h.write_f32(*opacity);
        }
        DrawOp::TextRun {
            origin,
            text,
            style,
            color,
        } => {
            h.write_u8(3);
            h.write_f64(origin.x);
            h.write_f64(origin.y);
            h.write_u32(text.len() as u32);
            h.write_bytes(text.as_bytes());
            hash_style(h, style);
            hash_color(h, color);
        }
    }
}

fn hash_rect(h: &mut StableHasher, r: &Rect) {
    h.write_f64(r.x0);
    h.write_f64(r.y0);
    h.write_f64(r.x1);
    h.write_f64(r.y1);
}

fn hash_color(h: &mut StableHasher, c: &Rgba8Premul) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

fn hash_style(h: &mut StableHasher, s: &TextStyle) {
    h.write_u8(s.variant as u8);
    h.write_f32(s.size);
    h.write_f32(s.letter_spacing);
}

fn hash_path(h: &mut StableHasher, p: &BezPath) {
    use kurbo::PathEl;
    h.write_u32(p.elements().len() as u32);
    for el in p.elements() {
        match el {
            PathEl::MoveTo(p0) => {
                h.write_u8(0);
                hash_point(h, p0);
            }
            PathEl::LineTo(p0) => {
                h.write_u8(1);
                hash_point(h, p0);
            }
            PathEl::QuadTo(p0, p1) => {
                h.write_u8(2);
                hash_point(h, p0);
                hash_point(h, p1);
            }
            PathEl::CurveTo(p0, p1, p2) => {
                h.write_u8(3);
                hash_point(h, p0);
                hash_point(h, p1);
                hash_point(h, p2);
            }
            PathEl::ClosePath => h.write_u8(4),
        }
    }
}

fn hash_point(h: &mut StableHasher, p: &kurbo::Point) {
    h.write_f64(p.x);
    h.write_f64(p.y);
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
