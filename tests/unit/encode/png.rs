use super::*;
use crate::foundation::core::Canvas;

fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "cardstock_png_{tag}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn spec(side: u32, slide_count: u32) -> SinkSpec {
    SinkSpec {
        canvas: Canvas {
            width: side,
            height: side,
        },
        slide_count,
    }
}

fn pixel(r: u8, g: u8, b: u8) -> SlideFrame {
    SlideFrame {
        width: 1,
        height: 1,
        data: vec![r, g, b, 255],
    }
}

#[test]
fn file_names_are_one_based_and_zero_padded() {
    assert_eq!(PngDirSink::file_name(SlideIndex(0)), "slide-01.png");
    assert_eq!(PngDirSink::file_name(SlideIndex(6)), "slide-07.png");
    assert_eq!(PngDirSink::file_name(SlideIndex(11)), "slide-12.png");
}

#[test]
fn push_before_begin_is_rejected() {
    let mut sink = PngDirSink::new(scratch_dir("unstarted"));
    let err = sink.push_slide(SlideIndex(0), &pixel(0, 0, 0)).unwrap_err();
    assert!(err.to_string().contains("not started"));
}

#[test]
fn end_before_begin_is_rejected() {
    let mut sink = PngDirSink::new(scratch_dir("end_only"));
    assert!(sink.end().unwrap_err().to_string().contains("not started"));
}

#[test]
fn zero_canvas_is_rejected() {
    let dir = scratch_dir("zero_canvas");
    let mut sink = PngDirSink::new(&dir);
    let err = sink.begin(spec(0, 1)).unwrap_err();
    assert!(err.to_string().contains("non-zero"));
    assert!(!dir.exists());
}

#[test]
fn writes_one_png_per_slide_and_reads_back() {
    let dir = scratch_dir("roundtrip");
    let mut sink = PngDirSink::new(&dir);

    sink.begin(spec(1, 2)).unwrap();
    sink.push_slide(SlideIndex(0), &pixel(250, 10, 10)).unwrap();
    sink.push_slide(SlideIndex(1), &pixel(10, 250, 10)).unwrap();
    sink.end().unwrap();

    assert_eq!(
        sink.written(),
        &[dir.join("slide-01.png"), dir.join("slide-02.png")]
    );
    let first = image::open(dir.join("slide-01.png")).unwrap().to_rgba8();
    assert_eq!(first.dimensions(), (1, 1));
    assert_eq!(first.get_pixel(0, 0).0, [250, 10, 10, 255]);
    let second = image::open(dir.join("slide-02.png")).unwrap().to_rgba8();
    assert_eq!(second.get_pixel(0, 0).0, [10, 250, 10, 255]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn out_of_order_and_repeated_indices_are_rejected() {
    let dir = scratch_dir("ordering");
    let mut sink = PngDirSink::new(&dir);

    sink.begin(spec(1, 3)).unwrap();
    sink.push_slide(SlideIndex(1), &pixel(1, 2, 3)).unwrap();

    let repeat = sink.push_slide(SlideIndex(1), &pixel(1, 2, 3)).unwrap_err();
    assert!(repeat.to_string().contains("out-of-order"));
    let backwards = sink.push_slide(SlideIndex(0), &pixel(1, 2, 3)).unwrap_err();
    assert!(backwards.to_string().contains("out-of-order"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn mismatched_slide_size_is_rejected() {
    let dir = scratch_dir("mismatch");
    let mut sink = PngDirSink::new(&dir);

    sink.begin(spec(2, 1)).unwrap();
    let err = sink.push_slide(SlideIndex(0), &pixel(5, 5, 5)).unwrap_err();
    assert!(err.to_string().contains("size mismatch"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn begin_resets_ordering_state() {
    let dir = scratch_dir("restart");
    let mut sink = PngDirSink::new(&dir);

    sink.begin(spec(1, 1)).unwrap();
    sink.push_slide(SlideIndex(0), &pixel(9, 9, 9)).unwrap();
    sink.end().unwrap();

    sink.begin(spec(1, 1)).unwrap();
    sink.push_slide(SlideIndex(0), &pixel(8, 8, 8)).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.written().len(), 1);

    std::fs::remove_dir_all(&dir).ok();
}
