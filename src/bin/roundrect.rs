use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "roundrect", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene JSON file to a PNG.
    Render(RenderArgs),
    /// Print the path commands emitted for one rounded rectangle.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[arg(long, allow_hyphen_values = true)]
    x: f64,
    #[arg(long, allow_hyphen_values = true)]
    y: f64,
    #[arg(long, allow_hyphen_values = true)]
    w: f64,
    #[arg(long, allow_hyphen_values = true)]
    h: f64,
    /// Corner radius.
    #[arg(long, allow_hyphen_values = true)]
    r: f64,

    /// Emit a JSON array instead of one command per line.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_scene_json(path: &Path) -> anyhow::Result<roundrect::Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene = roundrect::Scene::from_json_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    scene.validate()?;

    if scene.radius_policy == roundrect::RadiusPolicy::Unchecked {
        for i in scene.out_of_range_radii() {
            tracing::warn!(rect = i, "corner radius outside [0, min(w, h) / 2]");
        }
    }

    let frame = scene.render()?;
    roundrect::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let mut rec = roundrect::CommandRecorder::new();
    roundrect::stroke_rounded_rect(&mut rec, args.x, args.y, args.w, args.h, args.r)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, rec.commands()).context("write trace JSON")?;
        writeln!(out)?;
    } else {
        for cmd in rec.commands() {
            writeln!(out, "{cmd}")?;
        }
    }
    Ok(())
}
