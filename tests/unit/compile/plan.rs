use super::*;
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Canvas, Point, Rect, Rgba8Premul};

fn sample_plan() -> SlidePlan {
    SlidePlan {
        ops: vec![
            DrawOp::FillRect {
                rect: Rect::new(0.0, 0.0, 1080.0, 1080.0),
                color: Rgba8Premul::opaque(246, 241, 231),
                opacity: 1.0,
            },
            DrawOp::TextRun {
                origin: Point::new(96.0, 208.0),
                text: "Hello".to_owned(),
                style: TextStyle::display(56.0),
                color: Rgba8Premul::opaque(20, 17, 15),
            },
        ],
    }
}

#[test]
fn canvas_is_the_canonical_square() {
    let plan = sample_plan();
    assert_eq!(
        plan.canvas(),
        Canvas {
            width: 1080,
            height: 1080
        }
    );
}

#[test]
fn len_and_is_empty_track_ops() {
    assert!(SlidePlan::default().is_empty());
    let plan = sample_plan();
    assert_eq!(plan.len(), 2);
    assert!(!plan.is_empty());
}

#[test]
fn dump_lists_ops_in_paint_order() {
    let dump = sample_plan().dump();
    assert!(dump.starts_with("SlidePlan 1080x1080\n"));
    assert!(dump.contains("ops: 2"));
    assert!(dump.contains("#f6f1e7ff"));
    assert!(dump.contains("\"Hello\""));
    let first = dump.find("[0] fill_rect").unwrap();
    let second = dump.find("[1] text").unwrap();
    assert!(first < second);
}

#[test]
fn dump_is_deterministic() {
    let plan = sample_plan();
    assert_eq!(plan.dump(), plan.dump());
}
