use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

pub mod wayland;

/// Opens the sketchbook window and runs until the user exits.
///
/// # Arguments
/// * `config` - Loaded and validated configuration
/// * `export_dir` - Directory override for PNG exports (from the CLI)
pub fn run_wayland(config: Config, export_dir: Option<PathBuf>) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(config, export_dir);
    backend.run()
}
