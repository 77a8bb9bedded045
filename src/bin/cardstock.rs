//! Command-line front end: export decks to PNG, render single slides,
//! and write starter deck documents.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use cardstock::deck::fields::FieldKind;
use cardstock::render::pipeline;
use cardstock::{
    Deck, FontCatalog, PngDirSink, RenderOpts, SequenceBlueprint, SlideRenderer, TemplateKind,
    render_deck,
};

#[derive(Parser, Debug)]
#[command(name = "cardstock", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a deck as a directory of PNG slides.
    Render(RenderArgs),
    /// Render one slide of a deck as a PNG.
    Slide(SlideArgs),
    /// Write a starter deck document.
    Init(InitArgs),
    /// List the built-in templates and their fields.
    Templates,
    /// List the built-in sequence blueprints.
    Blueprints,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input deck JSON.
    #[arg(long)]
    deck: PathBuf,

    /// Font directory (display-bold.ttf, body-regular.ttf, ...).
    #[arg(long)]
    fonts: PathBuf,

    /// Output directory for slide-NN.png files.
    #[arg(long)]
    out: PathBuf,

    /// Uniform scale factor (1.0 renders 1080x1080).
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Rasterize distinct slides in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Skip the carousel export gate (slide count, cover first, CTA last).
    #[arg(long, default_value_t = false)]
    no_gate: bool,
}

#[derive(Parser, Debug)]
struct SlideArgs {
    /// Input deck JSON.
    #[arg(long)]
    deck: PathBuf,

    /// Slide position (0-based).
    #[arg(long)]
    index: usize,

    /// Font directory (display-bold.ttf, body-regular.ttf, ...).
    #[arg(long)]
    fonts: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Uniform scale factor (1.0 renders 1080x1080).
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Blueprint name (see `cardstock blueprints`).
    #[arg(long)]
    blueprint: Option<String>,

    /// Start from the minimal custom skeleton instead.
    #[arg(long, default_value_t = false)]
    custom: bool,

    /// Output deck JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Slide(args) => cmd_slide(args),
        Command::Init(args) => cmd_init(args),
        Command::Templates => {
            cmd_templates();
            Ok(())
        }
        Command::Blueprints => {
            cmd_blueprints();
            Ok(())
        }
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let deck = Deck::from_path(&args.deck)?;
    if !args.no_gate {
        deck.ensure_exportable()?;
    }
    let catalog = FontCatalog::prepare(&args.fonts)?;

    let opts = RenderOpts {
        scale: args.scale,
        parallel: args.parallel,
        threads: args.threads,
        ..RenderOpts::default()
    };
    let mut sink = PngDirSink::new(&args.out);
    let stats = render_deck(&deck, &catalog, &opts, &mut sink)?;

    eprintln!(
        "wrote {} slides to {} ({} rasterized, {} reused)",
        stats.slides_total,
        args.out.display(),
        stats.slides_rendered,
        stats.slides_elided
    );
    Ok(())
}

fn cmd_slide(args: SlideArgs) -> anyhow::Result<()> {
    let deck = Deck::from_path(&args.deck)?;
    let slide = deck.slides.get(args.index).with_context(|| {
        format!(
            "deck has {} slides, no slide at index {}",
            deck.len(),
            args.index
        )
    })?;

    let catalog = FontCatalog::prepare(&args.fonts)?;
    let mut renderer = SlideRenderer::new(&catalog)?;
    let index = pipeline::display_index(slide, args.index);
    let frame = renderer.render_slide(slide.template, &slide.fields, index, args.scale)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let straight = frame.to_straight_rgba();
    image::save_buffer_with_format(
        &args.out,
        &straight,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let deck = if args.custom {
        Deck::custom_skeleton()
    } else if let Some(name) = args.blueprint.as_deref() {
        SequenceBlueprint::by_name(name)
            .with_context(|| {
                format!("unknown blueprint '{name}' (run `cardstock blueprints` for the list)")
            })?
            .instantiate()
    } else {
        anyhow::bail!("pass --blueprint NAME or --custom");
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    deck.to_path(&args.out)?;
    eprintln!("wrote {} ({} slides)", args.out.display(), deck.len());
    Ok(())
}

fn cmd_templates() {
    for kind in TemplateKind::ALL {
        let def = kind.def();
        println!("{:<12} {}", kind.id(), def.name);
        for f in def.fields {
            let detail = match f.kind {
                FieldKind::Text if f.multiline => format!("max {}, multiline", f.max_chars),
                FieldKind::Text => format!("max {}", f.max_chars),
                FieldKind::Choice(options) => format!("one of: {}", options.join(" | ")),
                FieldKind::List { delimiter } => {
                    format!("max {}, '{delimiter}'-separated", f.max_chars)
                }
            };
            println!("    {:<12} {} ({detail})", f.key, f.label);
        }
    }
}

fn cmd_blueprints() {
    for bp in SequenceBlueprint::catalog() {
        println!("{:<12} {}", bp.name, bp.description);
        let kinds: Vec<&str> = bp.slots.iter().map(|s| s.template.id()).collect();
        println!("    {}", kinds.join(" -> "));
    }
}
