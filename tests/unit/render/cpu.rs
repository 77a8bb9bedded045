use super::*;
use crate::fonts::store::TextStyle;
use crate::foundation::core::{Point, Rect, Rgba8Premul, SURFACE};

fn solid_plan(color: Rgba8Premul) -> SlidePlan {
    SlidePlan {
        ops: vec![DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, SURFACE, SURFACE),
            color,
            opacity: 1.0,
        }],
    }
}

#[test]
fn straight_alpha_passes_opaque_pixels_through() {
    let frame = SlideFrame {
        width: 1,
        height: 1,
        data: vec![246, 241, 231, 255],
    };
    assert_eq!(frame.to_straight_rgba(), vec![246, 241, 231, 255]);
}

#[test]
fn straight_alpha_zeroes_fully_transparent_pixels() {
    let frame = SlideFrame {
        width: 1,
        height: 1,
        data: vec![10, 20, 30, 0],
    };
    assert_eq!(frame.to_straight_rgba(), vec![0, 0, 0, 0]);
}

#[test]
fn straight_alpha_divides_out_partial_coverage() {
    let frame = SlideFrame {
        width: 1,
        height: 1,
        data: vec![100, 50, 25, 128],
    };
    assert_eq!(frame.to_straight_rgba(), vec![199, 100, 50, 128]);
}

#[test]
fn affine_conversion_preserves_coefficients() {
    let a = Affine::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(affine_to_cpu(a).as_coeffs(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn bezpath_conversion_maps_every_element() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((10.0, 0.0));
    path.quad_to((15.0, 5.0), (10.0, 10.0));
    path.curve_to((8.0, 12.0), (2.0, 12.0), (0.0, 10.0));
    path.close_path();

    let cpu = bezpath_to_cpu(&path);
    assert_eq!(cpu.elements().len(), path.elements().len());
    assert!(matches!(
        cpu.elements()[0],
        vello_cpu::kurbo::PathEl::MoveTo(_)
    ));
    assert!(matches!(
        cpu.elements()[4],
        vello_cpu::kurbo::PathEl::ClosePath
    ));
}

#[test]
fn solid_fill_renders_every_pixel_opaque() {
    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let mut renderer = SlideRenderer::new(&catalog).unwrap();

    let plan = solid_plan(Rgba8Premul::opaque(30, 41, 59));
    let frame = renderer.render_plan(&plan, 1.0).unwrap();

    assert_eq!(frame.width, 1080);
    assert_eq!(frame.height, 1080);
    assert_eq!(frame.data.len(), 1080 * 1080 * 4);
    assert_eq!(&frame.data[0..4], &[30, 41, 59, 255]);
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn rendering_the_same_plan_twice_is_byte_identical() {
    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let mut renderer = SlideRenderer::new(&catalog).unwrap();

    let fields: FieldValues = [("title", "Margins over volume")].into_iter().collect();
    let plan = renderer.compile(TemplateKind::Insight, &fields, Some(SlideIndex(2)));

    let a = renderer.render_plan(&plan, 1.0).unwrap();
    let b = renderer.render_plan(&plan, 1.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_text_produces_different_pixels() {
    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let mut renderer = SlideRenderer::new(&catalog).unwrap();

    let first: FieldValues = [("title", "Margins over volume")].into_iter().collect();
    let second: FieldValues = [("title", "Count the hours")].into_iter().collect();

    let a = renderer
        .render_slide(TemplateKind::Insight, &first, None, 1.0)
        .unwrap();
    let b = renderer
        .render_slide(TemplateKind::Insight, &second, None, 1.0)
        .unwrap();
    assert_ne!(a.data, b.data);
}

#[test]
fn scale_doubles_the_canvas() {
    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let mut renderer = SlideRenderer::new(&catalog).unwrap();

    let plan = solid_plan(Rgba8Premul::opaque(200, 60, 60));
    let frame = renderer.render_plan(&plan, 2.0).unwrap();
    assert_eq!(frame.width, 2160);
    assert_eq!(frame.height, 2160);
    assert_eq!(frame.data.len(), 2160 * 2160 * 4);
}

#[test]
fn renderer_survives_canvas_size_changes() {
    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let mut renderer = SlideRenderer::new(&catalog).unwrap();
    let plan = solid_plan(Rgba8Premul::opaque(10, 10, 10));

    for scale in [1.0, 0.5, 1.0] {
        let frame = renderer.render_plan(&plan, scale).unwrap();
        let side = (SURFACE * scale).round() as u32;
        assert_eq!(frame.width, side);
        assert_eq!(frame.height, side);
    }
}

#[test]
fn invalid_scale_is_rejected() {
    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let mut renderer = SlideRenderer::new(&catalog).unwrap();
    let plan = solid_plan(Rgba8Premul::opaque(0, 0, 0));

    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = renderer.render_plan(&plan, bad).unwrap_err();
        assert!(err.to_string().contains("scale factor"), "{bad}: {err}");
    }
}

#[test]
fn every_op_kind_executes() {
    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let mut renderer = SlideRenderer::new(&catalog).unwrap();

    let mut triangle = BezPath::new();
    triangle.move_to((200.0, 200.0));
    triangle.line_to((400.0, 200.0));
    triangle.line_to((300.0, 380.0));
    triangle.close_path();

    let plan = SlidePlan {
        ops: vec![
            DrawOp::FillRect {
                rect: Rect::new(0.0, 0.0, SURFACE, SURFACE),
                color: Rgba8Premul::opaque(246, 241, 231),
                opacity: 1.0,
            },
            DrawOp::FillPath {
                path: triangle.clone(),
                color: Rgba8Premul::opaque(200, 60, 60),
                opacity: 0.5,
            },
            DrawOp::StrokePath {
                path: triangle,
                color: Rgba8Premul::opaque(30, 41, 59),
                width: 6.0,
                dash: Some([14.0, 10.0]),
                opacity: 1.0,
            },
            DrawOp::TextRun {
                origin: Point::new(120.0, 700.0),
                text: "smoke".to_owned(),
                style: TextStyle::body(48.0),
                color: Rgba8Premul::opaque(30, 41, 59),
            },
        ],
    };

    let frame = renderer.render_plan(&plan, 1.0).unwrap();
    assert_eq!(frame.data.len(), 1080 * 1080 * 4);
    // The triangle sits on paper, so at least two distinct colors land.
    let first = &frame.data[0..4];
    assert!(frame.data.chunks_exact(4).any(|px| px != first));
}
