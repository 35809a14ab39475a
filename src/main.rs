use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use sketchpad::script::Script;
use sketchpad::{APP_TITLE, Config, SketchApp};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHPAD_GIT_HASH"), ")"),
    about = "Draw with Me: sketch pad with freehand strokes, stickers, undo/redo and PNG export"
)]
struct Cli {
    /// Event script to replay (TOML, one [[event]] table per input event)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final canvas to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Export scale override (1.0 - 8.0)
    #[arg(long, value_name = "FACTOR")]
    scale: Option<f64>,

    /// Write the commented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => {
                Config::create_default_file_at(path)?;
                path.clone()
            }
            None => Config::create_default_file()?,
        };
        println!("Created config at {}", path.display());
        return Ok(());
    }

    if cli.script.is_none() && cli.output.is_none() {
        // No flags: show usage
        println!("sketchpad ({APP_TITLE}): sketch pad with strokes, stickers and undo/redo");
        println!();
        println!("Usage:");
        println!("  sketchpad --script events.toml --output sketch.png");
        println!("  sketchpad --output blank.png       Export an empty canvas");
        println!("  sketchpad --init-config            Write ~/.config/sketchpad/config.toml");
        println!("  sketchpad --help                   Show all options");
        println!();
        println!("Scripts hold one [[event]] table per input event, for example:");
        println!("  [[event]]");
        println!("  type = \"pointer-down\"");
        println!("  x = 40.0");
        println!("  y = 40.0");
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(scale) = cli.scale {
        config.export.scale = scale;
        config.validate_and_clamp();
    }

    let mut app = SketchApp::new(&config)?;

    let script = match &cli.script {
        Some(path) => Script::load(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?,
        None => Script::default(),
    };
    let summary = app.run(&script)?;

    if let Some(output) = &cli.output {
        app.export_to(output)?;
        println!("Saved {}", output.display());
    }

    for path in &summary.exports {
        println!("Exported {}", path.display());
    }
    println!("{summary}");

    Ok(())
}
