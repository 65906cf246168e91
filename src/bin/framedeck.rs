use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "framedeck", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a frame document without rendering.
    Validate(ValidateArgs),
    /// Render a frame document into a deck-plan JSON artifact.
    Plan(PlanArgs),
    /// Render a frame document and commit it through a deck writer.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input frame document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input frame document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output deck-plan JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Slide width in inches.
    #[arg(long, default_value_t = 10.0)]
    slide_width: f64,

    /// Slide height in inches.
    #[arg(long, default_value_t = 7.5)]
    slide_height: f64,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input frame document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Deck writer to commit through (`pptx` needs the external converter).
    #[arg(long, value_enum, default_value_t = SinkChoice::Json)]
    sink: SinkChoice,

    /// Explicit output path; defaults to a fresh id in the export store.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Export store directory used when --out is omitted.
    #[arg(long, default_value = "exports")]
    exports: PathBuf,

    /// Slide width in inches.
    #[arg(long, default_value_t = 10.0)]
    slide_width: f64,

    /// Slide height in inches.
    #[arg(long, default_value_t = 7.5)]
    slide_height: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SinkChoice {
    Json,
    Pptx,
}

impl SinkChoice {
    fn kind(self) -> framedeck::SinkKind {
        match self {
            Self::Json => framedeck::SinkKind::Json,
            Self::Pptx => framedeck::SinkKind::Pptx,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pptx => "pptx",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn read_doc_json(path: &Path) -> anyhow::Result<framedeck::FrameDocument> {
    let f = File::open(path).with_context(|| format!("open document '{}'", path.display()))?;
    let r = BufReader::new(f);
    let doc: framedeck::FrameDocument =
        serde_json::from_reader(r).with_context(|| "parse frame document JSON")?;
    Ok(doc)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let doc = read_doc_json(&args.in_path)?;
    doc.validate()?;

    let elements: usize = doc.pages.iter().map(|p| p.elements.len()).sum();
    eprintln!(
        "ok: project '{}', {} page(s), {} element(s)",
        doc.project_id,
        doc.pages.len(),
        elements
    );
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let doc = read_doc_json(&args.in_path)?;
    let slide = framedeck::SlideSize::new(args.slide_width, args.slide_height)?;
    let styles = framedeck::StyleTable::baseline();

    let mut sink = framedeck::JsonSink::new(&args.out);
    framedeck::export_document(&doc, slide, &styles, &mut sink)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let doc = read_doc_json(&args.in_path)?;
    let slide = framedeck::SlideSize::new(args.slide_width, args.slide_height)?;
    let styles = framedeck::StyleTable::baseline();

    let out_path = match &args.out {
        Some(path) => path.clone(),
        None => {
            let store = framedeck::ExportStore::new(&args.exports)?;
            let export_id = store.new_export_id(&doc.project_id);
            let path = store.path_for(&export_id, args.sink.extension())?;
            eprintln!("export id {export_id}");
            path
        }
    };

    let mut sink = framedeck::create_sink(args.sink.kind(), &out_path)?;
    framedeck::export_document(&doc, slide, &styles, sink.as_mut())?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
