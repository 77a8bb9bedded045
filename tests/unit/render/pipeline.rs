use super::*;
use crate::deck::template::TemplateKind;
use crate::encode::sink::InMemorySink;
use crate::fonts::store::FontVariant;

fn stub_catalog() -> FontCatalog {
    FontCatalog::from_bytes([(FontVariant::BodyRegular, b"stub".to_vec())]).unwrap()
}

fn deck_fixture() -> Deck {
    Deck::new(vec![
        Slide::new(TemplateKind::Cover).with_field("title", "Margins over volume"),
        Slide::new(TemplateKind::Insight).with_field("title", "Price the outcome"),
        Slide::new(TemplateKind::Divider).with_field("part", "02"),
        Slide::new(TemplateKind::Divider).with_field("part", "02"),
        Slide::new(TemplateKind::Cta).with_field("title", "Save this for later"),
    ])
}

#[test]
fn cover_family_suppresses_position_labels() {
    for kind in [
        TemplateKind::Cover,
        TemplateKind::Punchline,
        TemplateKind::Divider,
        TemplateKind::Cta,
    ] {
        assert_eq!(display_index(&Slide::new(kind), 5), None, "{kind:?}");
    }
    assert_eq!(
        display_index(&Slide::new(TemplateKind::Insight), 3),
        Some(SlideIndex(3))
    );
    assert_eq!(
        display_index(&Slide::new(TemplateKind::Quote), 0),
        Some(SlideIndex(0))
    );
}

#[test]
fn zero_worker_threads_is_rejected() {
    let err = build_thread_pool(Some(0)).unwrap_err();
    assert!(err.to_string().contains("threads"));
    assert!(build_thread_pool(Some(2)).is_ok());
}

#[test]
fn empty_deck_is_rejected() {
    let deck = Deck::new(vec![]);
    let mut sink = InMemorySink::new();
    let err = render_deck(&deck, &stub_catalog(), &RenderOpts::default(), &mut sink).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn invalid_scale_fails_before_font_work() {
    // The stub catalog cannot shape text; a scale error must come first.
    let deck = Deck::new(vec![Slide::new(TemplateKind::Blank)]);
    let mut sink = InMemorySink::new();
    let opts = RenderOpts {
        scale: -1.0,
        ..RenderOpts::default()
    };
    let err = render_deck(&deck, &stub_catalog(), &opts, &mut sink).unwrap_err();
    assert!(err.to_string().contains("scale factor"));
}

#[test]
fn failed_worker_surfaces_construction_error() {
    let catalog = stub_catalog();
    let mut worker = Worker::new(&catalog);
    let err = worker.render(&SlidePlan::default(), 1.0).unwrap_err();
    assert!(err.to_string().contains("render worker failed to start"));
}

#[test]
fn deck_renders_in_order_and_reuses_duplicates() {
    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let deck = deck_fixture();
    let mut sink = InMemorySink::new();

    let stats = render_deck(&deck, &catalog, &RenderOpts::default(), &mut sink).unwrap();
    assert_eq!(stats.slides_total, 5);
    assert_eq!(stats.slides_rendered, 4);
    assert_eq!(stats.slides_elided, 1);

    let spec = sink.spec().unwrap();
    assert_eq!(spec.slide_count, 5);
    assert_eq!((spec.canvas.width, spec.canvas.height), (1080, 1080));

    let frames = sink.frames();
    assert_eq!(frames.len(), 5);
    for (pos, (idx, frame)) in frames.iter().enumerate() {
        assert_eq!(*idx, SlideIndex(pos as u32));
        assert_eq!((frame.width, frame.height), (1080, 1080));
    }

    // The twin dividers share one raster; distinct slides do not.
    assert_eq!(frames[2].1.data, frames[3].1.data);
    assert_ne!(frames[1].1.data, frames[2].1.data);
}

#[test]
fn sequential_and_parallel_outputs_match() {
    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let deck = deck_fixture();

    let mut sink_seq = InMemorySink::new();
    let stats_seq =
        render_deck(&deck, &catalog, &RenderOpts::default(), &mut sink_seq).unwrap();

    let opts_par = RenderOpts {
        parallel: true,
        threads: Some(4),
        channel_capacity: 0,
        ..RenderOpts::default()
    };
    let mut sink_par = InMemorySink::new();
    let stats_par = render_deck(&deck, &catalog, &opts_par, &mut sink_par).unwrap();

    assert_eq!(stats_seq, stats_par);
    assert_eq!(sink_seq.frames().len(), sink_par.frames().len());
    for ((idx_a, a), (idx_b, b)) in sink_seq.frames().iter().zip(sink_par.frames().iter()) {
        assert_eq!(idx_a, idx_b);
        assert_eq!(a.width, b.width);
        assert_eq!(a.height, b.height);
        assert_eq!(a.data, b.data);
    }
}

#[test]
fn sink_failure_is_reported() {
    struct RefusingSink;

    impl SlideSink for RefusingSink {
        fn begin(&mut self, _spec: SinkSpec) -> CardstockResult<()> {
            Ok(())
        }
        fn push_slide(&mut self, _idx: SlideIndex, _frame: &SlideFrame) -> CardstockResult<()> {
            Err(CardstockError::export("disk full"))
        }
        fn end(&mut self) -> CardstockResult<()> {
            Ok(())
        }
    }

    let Ok(catalog) = FontCatalog::prepare("assets/fonts") else {
        return;
    };
    let deck = Deck::new(vec![Slide::new(TemplateKind::Blank)]);
    let mut sink = RefusingSink;
    assert!(render_deck(&deck, &catalog, &RenderOpts::default(), &mut sink).is_err());
}
