use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context as _, bail};
use clap::{ArgAction, Parser, Subcommand};
use glint::{
    FrameDriverOpts, GlintConfig, ResvgRasterizer, StyleCatalog, TidbytClient,
    config::{ENV_DEVICE_ID, ENV_STYLE, ENV_TOKEN, resolve},
    encode::ensure_parent_dir,
    push::DEFAULT_INSTALLATION_ID,
    style::{DEFAULT_STYLE, STATIC_FRAME_DELAY_MS},
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "glint", version, about = "Emotion eyes for a Tidbyt display")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an emotion and push it to the display (or write it with --out).
    Show(ShowArgs),
    /// List available emotions.
    List,
    /// List available styles.
    Styles(StylesArgs),
    /// Check a style directory for missing or malformed artwork.
    Validate(ValidateArgs),
    /// Render an SVG file, animated or not, to a GIF or PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Emotion name (see `glint list`).
    emotion: String,

    /// Style name (see `glint styles`).
    #[arg(long)]
    style: Option<String>,

    /// Root directory holding style sub-directories.
    #[arg(long)]
    styles_dir: Option<PathBuf>,

    /// Display API token.
    #[arg(long)]
    token: Option<String>,

    /// Target device id.
    #[arg(long)]
    device_id: Option<String>,

    /// Installation slot on the device.
    #[arg(long)]
    installation_id: Option<String>,

    /// Text stamped along the bottom of the display.
    #[arg(long)]
    label: Option<String>,

    /// Write the GIF here instead of pushing it.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct StylesArgs {
    /// Root directory holding style sub-directories.
    #[arg(long)]
    styles_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Style directory to check.
    dir: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input SVG.
    svg: PathBuf,

    /// Output GIF (or PNG for single-frame output).
    #[arg(long)]
    out: PathBuf,

    /// Samples per second for animated input.
    #[arg(long, default_value_t = 15.0)]
    fps: f64,

    /// Sampled span in seconds for animated input.
    #[arg(long, default_value_t = 3.0)]
    duration: f64,

    /// Output width in pixels.
    #[arg(long, default_value_t = glint::WIDTH)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = glint::HEIGHT)]
    height: u32,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = GlintConfig::load();
    match cli.cmd {
        Command::Show(args) => cmd_show(args, &config),
        Command::List => cmd_list(),
        Command::Styles(args) => cmd_styles(args, &config),
        Command::Validate(args) => Ok(cmd_validate(&args.dir)),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn styles_root(explicit: Option<PathBuf>, config: &GlintConfig) -> Option<PathBuf> {
    explicit.or_else(|| config.styles_dir())
}

fn cmd_show(args: ShowArgs, config: &GlintConfig) -> anyhow::Result<ExitCode> {
    let emotion = glint::get_emotion(&args.emotion)?;
    let catalog = StyleCatalog::discover(styles_root(args.styles_dir, config).as_deref())?;
    let style_name = resolve(
        args.style.as_deref(),
        config.style.as_deref(),
        Some(ENV_STYLE),
        Some(DEFAULT_STYLE),
    )
    .unwrap_or_else(|| DEFAULT_STYLE.to_owned());
    let style = catalog.get(&style_name)?;

    let rasterizer = match &style.dir {
        Some(dir) => ResvgRasterizer::with_resources_dir(dir),
        None => ResvgRasterizer::new(),
    };
    let mut rendered = style.render_emotion(emotion, &FrameDriverOpts::default(), &rasterizer)?;
    if let Some(label) = args.label.as_deref().filter(|l| !l.is_empty()) {
        rendered = rendered.with_label(label)?;
    }
    let gif = glint::encode_gif(&rendered.frames, rendered.delay_ms)?;

    if let Some(out) = args.out {
        write_file(&out, &gif)?;
        eprintln!(
            "wrote {} ({} frame(s), style '{}')",
            out.display(),
            rendered.frames.len(),
            style.name
        );
        return Ok(ExitCode::SUCCESS);
    }

    let Some(token) = resolve(args.token.as_deref(), config.token.as_deref(), Some(ENV_TOKEN), None)
    else {
        bail!("no token: pass --token, set \"token\" in the config file, or export {ENV_TOKEN}");
    };
    let Some(device_id) = resolve(
        args.device_id.as_deref(),
        config.device_id.as_deref(),
        Some(ENV_DEVICE_ID),
        None,
    ) else {
        bail!(
            "no device id: pass --device-id, set \"deviceId\" in the config file, or export {ENV_DEVICE_ID}"
        );
    };
    let installation_id = resolve(
        args.installation_id.as_deref(),
        config.installation_id.as_deref(),
        None,
        Some(DEFAULT_INSTALLATION_ID),
    )
    .unwrap_or_else(|| DEFAULT_INSTALLATION_ID.to_owned());

    TidbytClient::new(token)
        .push(&device_id, &glint::to_base64(&gif), &installation_id)
        .with_context(|| format!("push '{}' to device '{device_id}'", emotion.name))?;
    eprintln!("showing {} ({})", emotion.name, style.name);
    Ok(ExitCode::SUCCESS)
}

fn cmd_list() -> anyhow::Result<ExitCode> {
    for name in glint::list_emotions() {
        println!("{name}");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_styles(args: StylesArgs, config: &GlintConfig) -> anyhow::Result<ExitCode> {
    let catalog = StyleCatalog::discover(styles_root(args.styles_dir, config).as_deref())?;
    for style in catalog.styles() {
        if style.description.is_empty() {
            println!("{}\t{}", style.name, style.kind.as_str());
        } else {
            println!(
                "{}\t{}\t{}",
                style.name,
                style.kind.as_str(),
                style.description
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(dir: &Path) -> ExitCode {
    let report = glint::validate_style_dir(dir);
    for err in &report.errors {
        println!("error: {err}");
    }
    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    if report.is_valid() {
        println!("{}: ok", dir.display());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<ExitCode> {
    let source = std::fs::read_to_string(&args.svg)
        .with_context(|| format!("read svg '{}'", args.svg.display()))?;
    let opts = FrameDriverOpts {
        fps: args.fps,
        duration_secs: args.duration,
        width: args.width,
        height: args.height,
        parallel: args.parallel,
        threads: args.threads,
    };
    let rasterizer = match args.svg.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => ResvgRasterizer::with_resources_dir(dir),
        None => ResvgRasterizer::new(),
    };
    let frames = glint::render_svg(&source, &opts, &rasterizer)?;
    if frames.is_empty() {
        bail!("'{}' produced no frames (duration is zero)", args.svg.display());
    }

    let wants_png = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    let bytes = match frames.as_slice() {
        [single] if wants_png => glint::encode_png(single)?,
        [_] => glint::encode_gif(&frames, STATIC_FRAME_DELAY_MS)?,
        _ => glint::encode_gif(&frames, opts.frame_delay_ms())?,
    };
    write_file(&args.out, &bytes)?;
    eprintln!("wrote {} ({} frame(s))", args.out.display(), frames.len());
    Ok(ExitCode::SUCCESS)
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
