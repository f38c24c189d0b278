use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hexmorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Dump the interpolated points at a progress as JSON.
    Points(PointsArgs),
    /// Render a 0 to 1 progress sweep as an MP4 (requires `ffmpeg` on PATH).
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input stage config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Global morph progress in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    progress: f64,

    /// Neon frames to simulate before rendering, so trails have built up.
    #[arg(long, default_value_t = 0)]
    warmup: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PointsArgs {
    /// Input stage config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Global morph progress in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    progress: f64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input stage config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frames in the sweep.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Neon frames to simulate before the first output frame.
    #[arg(long, default_value_t = 0)]
    warmup: u32,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Points(args) => cmd_points(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn load_stage(path: &Path) -> anyhow::Result<(hexmorph::StageConfig, hexmorph::Stage)> {
    let cfg = hexmorph::StageConfig::from_path(path)
        .with_context(|| format!("load stage config '{}'", path.display()))?;
    let stage = cfg.build_stage().context("build stage")?;
    Ok((cfg, stage))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (_, mut stage) = load_stage(&args.in_path)?;
    stage.warm_up(args.warmup)?;
    stage.set_progress(args.progress);
    let frame = stage.render_frame()?;

    hexmorph::encode::ffmpeg::ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_points(args: PointsArgs) -> anyhow::Result<()> {
    let (_, mut stage) = load_stage(&args.in_path)?;
    stage.set_progress(args.progress);
    if !stage.refresh_points() {
        anyhow::bail!("could not resolve shape points at progress {}", args.progress);
    }

    let json = serde_json::to_string_pretty(stage.points()).context("serialize points")?;
    match args.out {
        Some(out) => {
            hexmorph::encode::ffmpeg::ensure_parent_dir(&out)?;
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let (cfg, mut stage) = load_stage(&args.in_path)?;
    let mut sink = hexmorph::FfmpegSink::new(
        hexmorph::FfmpegSinkOpts::new(&args.out).with_background(cfg.background_rgba),
    );
    let opts = hexmorph::SweepOpts {
        frames: args.frames,
        fps: args.fps,
        warmup: args.warmup,
    };
    hexmorph::render_sweep(&mut stage, opts, &mut sink)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
