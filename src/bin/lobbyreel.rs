use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use lobbyreel::{
    Composition, CompositionConfig, FrameIndex, LobbyData, RenderThreading, RenderToMp4Opts,
    SvgRasterizer,
};

#[derive(Parser, Debug)]
#[command(name = "lobbyreel", version, about = "Render looping lobby-screen infographic reels")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a payload (and optional config) without rendering.
    Validate(ValidateArgs),
    /// Write one frame as PNG, SVG or JSON (picked from the output extension).
    Frame(FrameArgs),
    /// Render the whole reel to MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Write a demo payload.
    Sample(SampleArgs),
    /// Print which scenes are active at a frame.
    Scenes(ScenesArgs),
}

#[derive(Parser, Debug)]
struct Inputs {
    /// Payload JSON.
    #[arg(long)]
    data: PathBuf,

    /// Composition config JSON (defaults to the 900-frame table).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    #[command(flatten)]
    inputs: Inputs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path: `.png`, `.svg` or `.json`.
    #[arg(long)]
    out: PathBuf,

    /// Extra directory of font files for rasterization.
    #[arg(long)]
    font_dir: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Rasterize frames on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads when `--parallel` (default: rayon's choice).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames computed per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Rasterize identical frames once per chunk.
    #[arg(long)]
    static_frame_elision: bool,

    /// Extra directory of font files for rasterization.
    #[arg(long)]
    font_dir: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Where to write the payload.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ScenesArgs {
    /// Global frame index.
    #[arg(long)]
    frame: u64,

    /// Composition config JSON (defaults to the 900-frame table).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Scenes(args) => cmd_scenes(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CompositionConfig> {
    match path {
        Some(p) => CompositionConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(CompositionConfig::default()),
    }
}

fn load_composition(inputs: &Inputs) -> anyhow::Result<Composition> {
    let config = load_config(inputs.config.as_deref())?;
    let data = LobbyData::from_path(&inputs.data)
        .with_context(|| format!("load payload '{}'", inputs.data.display()))?;
    Ok(Composition::new(config, data)?)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.inputs)?;
    let cfg = comp.config();
    println!(
        "ok: '{}' with {} kpis, {} regions; {} frames @ {} fps ({:.1}s), {}x{}",
        comp.data().company_name,
        comp.data().kpis.len(),
        comp.data().regions.len(),
        cfg.total_frames,
        cfg.fps.as_f64(),
        cfg.duration_secs(),
        cfg.canvas.width,
        cfg.canvas.height
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.inputs)?;
    let state = comp.compute_frame(FrameIndex(args.frame))?;
    let raster = SvgRasterizer::new(comp.config().theme.font_family.clone(), &args.font_dir);

    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => raster.rasterize(&state)?.save_png(&args.out)?,
        "svg" => write_text(&args.out, &raster.svg(&state)?)?,
        "json" => write_text(&args.out, &serde_json::to_string_pretty(&state)?)?,
        other => anyhow::bail!("unsupported output extension '{other}' (expected png, svg or json)"),
    }

    tracing::info!(frame = args.frame, out = %args.out.display(), "frame written");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.inputs)?;
    let raster = SvgRasterizer::new(comp.config().theme.font_family.clone(), &args.font_dir);
    let opts = RenderToMp4Opts {
        threading: RenderThreading {
            parallel: args.parallel,
            chunk_size: args.chunk_size,
            threads: args.threads,
            static_frame_elision: args.static_frame_elision,
        },
        ..RenderToMp4Opts::default()
    };

    let stats = lobbyreel::render_to_mp4(&comp, &args.out, opts, &raster)
        .with_context(|| format!("render '{}'", args.out.display()))?;
    println!(
        "wrote {} ({} frames, {} rasterized, {} elided)",
        args.out.display(),
        stats.frames_total,
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&LobbyData::sample())?;
    write_text(&args.out, &json)?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_scenes(args: ScenesArgs) -> anyhow::Result<()> {
    let comp = Composition::new(load_config(args.config.as_deref())?, LobbyData::sample())?;
    let active = comp.active_scenes(FrameIndex(args.frame))?;
    println!("{}", serde_json::to_string_pretty(&active)?);
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}
