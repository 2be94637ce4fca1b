use clap::{ArgAction, Parser};
use std::path::PathBuf;

use sketchbook::{Config, backend};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKETCHBOOK_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sketchbook")]
#[command(version = VERSION, about = "Freehand sketchpad with emoji stamps for Wayland compositors")]
struct Cli {
    /// Write a documented default config to ~/.config/sketchbook/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Directory for PNG exports (overrides export.save_directory)
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a compositor with wlr-layer-shell (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!(
            "WAYLAND_DISPLAY not set; a Wayland session is required"
        ));
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {:#}. Using defaults.", e);
            Config::default()
        }
    };

    log::info!("Opening sketchbook...");
    log::info!("  - Draw: drag with the left button (1 = thin pen, 2 = thick pen)");
    log::info!("  - Stamps: click a stamp button or press S, then click the canvas");
    log::info!("  - Undo / Redo: Ctrl+Z / Ctrl+Y");
    log::info!("  - Export PNG: Ctrl+S");
    log::info!("  - Help: F10, Exit: Escape");

    backend::run_wayland(config, cli.export_dir)?;

    log::info!("Sketchbook closed.");
    Ok(())
}
