use super::*;
use crate::compile::plan::SlidePlan;
use crate::foundation::core::Point;

fn rect_op(x0: f64) -> DrawOp {
    DrawOp::FillRect {
        rect: Rect::new(x0, 10.0, x0 + 100.0, 110.0),
        color: Rgba8Premul::opaque(20, 17, 15),
        opacity: 1.0,
    }
}

fn text_op(text: &str) -> DrawOp {
    DrawOp::TextRun {
        origin: Point::new(96.0, 400.0),
        text: text.to_owned(),
        style: TextStyle::body(36.0),
        color: Rgba8Premul::opaque(20, 17, 15),
    }
}

#[test]
fn identical_plans_hash_identically() {
    let a = SlidePlan {
        ops: vec![rect_op(0.0), text_op("steady")],
    };
    let b = SlidePlan {
        ops: vec![rect_op(0.0), text_op("steady")],
    };
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn text_content_changes_the_digest() {
    let a = SlidePlan {
        ops: vec![text_op("alpha")],
    };
    let b = SlidePlan {
        ops: vec![text_op("alphb")],
    };
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn geometry_changes_the_digest() {
    let a = SlidePlan {
        ops: vec![rect_op(0.0)],
    };
    let b = SlidePlan {
        ops: vec![rect_op(1.0)],
    };
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn op_order_is_significant() {
    let a = SlidePlan {
        ops: vec![rect_op(0.0), rect_op(200.0)],
    };
    let b = SlidePlan {
        ops: vec![rect_op(200.0), rect_op(0.0)],
    };
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn display_prints_32_hex_chars() {
    let fp = SlidePlan {
        ops: vec![text_op("x")],
    }
    .fingerprint();
    let text = fp.to_string();
    assert_eq!(text.len(), 32);
    assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
}
