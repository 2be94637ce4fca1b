//! PNG export of the committed sketch.
//!
//! The scene is re-rendered offscreen at an upscale factor (no preview, no
//! UI chrome) and written to the configured export directory.

mod file;
mod raster;

pub use file::{ensure_directory_exists, expand_tilde, generate_filename, save_png};
pub use raster::render_png_bytes;

use crate::config::Config;
use crate::draw::{Color, Shape};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Invalid filename template '{0}'")]
    Template(String),

    #[error("Invalid export size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

/// Everything needed to export without touching the config again.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Upscale factor applied to the canvas size
    pub scale: f64,
    pub save_directory: PathBuf,
    /// Filename template (chrono format specifiers allowed), without extension
    pub filename_template: String,
    /// Background painted under the drawables; `None` keeps it transparent
    pub background: Option<Color>,
}

impl ExportSettings {
    /// Builds export settings from the config, with an optional directory override.
    pub fn from_config(config: &Config, directory_override: Option<PathBuf>) -> Self {
        let save_directory = directory_override
            .unwrap_or_else(|| expand_tilde(&config.export.save_directory));
        Self {
            scale: config.export.scale,
            save_directory,
            filename_template: config.export.filename_template.clone(),
            background: config
                .export
                .fill_background
                .then(|| config.canvas.background.to_color()),
        }
    }
}

/// Renders `shapes` for a `canvas_width` x `canvas_height` canvas and saves the PNG.
///
/// Returns the path of the written file.
pub fn export_png(
    shapes: &[Shape],
    canvas_width: u32,
    canvas_height: u32,
    settings: &ExportSettings,
) -> Result<PathBuf, ExportError> {
    let bytes = render_png_bytes(
        shapes,
        canvas_width,
        canvas_height,
        settings.scale,
        settings.background,
    )?;
    save_png(&bytes, &settings.save_directory, &settings.filename_template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, FontDescriptor};

    fn sample_shapes() -> Vec<Shape> {
        vec![
            Shape::Stroke {
                points: vec![(10, 128), (246, 128)],
                color: BLUE,
                thick: 8.0,
            },
            Shape::Stamp {
                x: 100,
                y: 100,
                glyph: "🍕".to_string(),
                rotation: 45.0,
                size: 36.0,
                font_descriptor: FontDescriptor::default(),
            },
        ]
    }

    #[test]
    fn export_writes_upscaled_png() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ExportSettings {
            scale: 4.0,
            save_directory: dir.path().join("nested"),
            filename_template: "sketch".to_string(),
            background: None,
        };

        let path = export_png(&sample_shapes(), 256, 256, &settings).unwrap();
        assert_eq!(path.file_name().unwrap(), "sketch.png");

        let mut file = std::fs::File::open(&path).unwrap();
        let surface = cairo::ImageSurface::create_from_png(&mut file).unwrap();
        assert_eq!((surface.width(), surface.height()), (1024, 1024));
    }

    #[test]
    fn settings_follow_config() {
        let mut config = Config::default();
        config.export.fill_background = true;
        config.export.scale = 2.0;

        let settings = ExportSettings::from_config(&config, Some(PathBuf::from("/tmp/out")));
        assert_eq!(settings.scale, 2.0);
        assert_eq!(settings.save_directory, PathBuf::from("/tmp/out"));
        assert_eq!(settings.background, Some(crate::draw::WHITE));

        config.export.fill_background = false;
        let settings = ExportSettings::from_config(&config, None);
        assert!(settings.background.is_none());
        assert!(!settings.save_directory.to_string_lossy().starts_with('~'));
    }
}
