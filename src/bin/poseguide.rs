use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "poseguide", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a 6-column pose-guide sheet as a PNG.
    Guide(GuideArgs),
    /// Slice a generated composite sheet into individual frame PNGs.
    Slice(SliceArgs),
    /// Print the action preset library as JSON.
    Presets,
}

#[derive(Parser, Debug)]
struct GuideArgs {
    /// Action id (e.g. WALK_CYCLE, RUN_START_STOP, ATTACK_MELEE). Unknown
    /// ids render the default-case static pose.
    #[arg(long)]
    action: String,

    /// Camera direction (FRONT, BACK, SIDE, SIDE_LEFT, THREE_QUARTER,
    /// ISO_FRONT, ISO_BACK).
    #[arg(long, default_value = "SIDE")]
    direction: String,

    /// Character archetype (VANGUARD, ROGUE, MYSTIC, BEAST). Unknown values
    /// apply no posture modifiers.
    #[arg(long, default_value = "VANGUARD")]
    archetype: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SliceArgs {
    /// Input composite sheet image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of equal-width frames to cut.
    #[arg(long, default_value_t = poseguide::SHEET_COLUMNS)]
    frames: u32,

    /// Output directory for frame_<n>.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Guide(args) => cmd_guide(args),
        Command::Slice(args) => cmd_slice(args),
        Command::Presets => cmd_presets(),
    }
}

fn cmd_presets() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(poseguide::ACTION_PRESETS.as_slice())
        .context("serialize preset library")?;
    println!("{json}");
    Ok(())
}

fn cmd_guide(args: GuideArgs) -> anyhow::Result<()> {
    let direction = poseguide::Direction::parse(&args.direction);
    let posture = poseguide::Archetype::parse(&args.archetype)
        .map(poseguide::Archetype::posture)
        .unwrap_or_default();
    let action = poseguide::ActionKind::parse(&args.action);

    let sheet = poseguide::render_sheet(
        poseguide::SheetLayout::sprite_sheet(),
        action,
        direction,
        posture,
    )?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &sheet.data,
        sheet.width,
        sheet.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_slice(args: SliceArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read sheet '{}'", args.in_path.display()))?;

    let frames = poseguide::slice_sheet(&bytes, args.frames)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for (i, frame) in frames.iter().enumerate() {
        let path = args.out_dir.join(format!("frame_{i}.png"));
        std::fs::write(&path, frame)
            .with_context(|| format!("write frame '{}'", path.display()))?;
    }

    eprintln!("wrote {} frames to {}", frames.len(), args.out_dir.display());
    Ok(())
}
