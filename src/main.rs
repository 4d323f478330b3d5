use anyhow::Context;
use clap::Parser;
use paintbox::Config;
use paintbox::draw::{CairoSurface, Surface};
use paintbox::export::{self, ExportTarget};
use paintbox::input::InputState;
use paintbox::script::Script;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paintbox")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PAINTBOX_GIT_HASH"), ")"),
    about = "Freehand and rectangle painting canvas"
)]
struct Cli {
    /// Event script to play onto the canvas (TOML)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Where to write the final PNG (overrides the [export] config section)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Canvas height in pixels
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Configuration file (defaults to ~/.config/paintbox/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        println!("paintbox: Freehand and rectangle painting canvas");
        println!();
        println!("Usage:");
        println!("  paintbox --script events.toml            Play a script, write painting.png");
        println!("  paintbox --script events.toml -o a.png   Write the image to a.png");
        println!("  paintbox --help                          Show help");
        println!();
        println!("Script events:");
        println!("  press/move/release (x, y), color (name or #rrggbb),");
        println!("  action (increase-brush, decrease-brush, toggle-rectangle,");
        println!("          toggle-airbrush, clear, save)");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let target = match &cli.output {
        Some(path) => ExportTarget::from_path(path),
        None => config.export.target(),
    };

    let script = Script::load(&script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;

    let mut surface = CairoSurface::new(config.canvas.width, config.canvas.height)?;
    let mut state = InputState::from_config(&config);
    log::info!(
        "Canvas {}x{}, brush {}px, tool {}",
        surface.width(),
        surface.height(),
        state.brush_size_label(),
        state.tool().label()
    );

    let saves = script.play(&mut state, &mut surface, |surface| {
        let bytes = surface.export_png()?;
        export::save_png(&bytes, &target)?;
        Ok(())
    })?;

    let bytes = surface.export_png()?;
    let path = export::save_png(&bytes, &target)?;
    log::info!(
        "Played {} events ({} saves), {} operations in history",
        script.events.len(),
        saves,
        state.history.len()
    );
    println!("Saved {}", path.display());

    Ok(())
}
