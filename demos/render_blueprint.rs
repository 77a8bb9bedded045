use std::path::Path;

use cardstock::{FontCatalog, PngDirSink, RenderOpts, SequenceBlueprint, render_deck};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let fonts = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/fonts".to_string());
    let deck = SequenceBlueprint::by_name("story")
        .ok_or_else(|| anyhow::anyhow!("built-in blueprint missing"))?
        .instantiate();

    let catalog = FontCatalog::prepare(Path::new(&fonts))?;
    let out = Path::new("target/demo_slides");
    let mut sink = PngDirSink::new(out);
    let stats = render_deck(&deck, &catalog, &RenderOpts::default(), &mut sink)?;

    eprintln!(
        "wrote {} slides to {} ({} rasterized, {} reused)",
        stats.slides_total,
        out.display(),
        stats.slides_rendered,
        stats.slides_elided
    );
    Ok(())
}
