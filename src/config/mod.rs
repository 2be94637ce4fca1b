//! Configuration file support for sketchbook.
//!
//! Settings are loaded from `~/.config/sketchbook/config.toml`. They cover the
//! canvas, pen presets, the stamp palette, history limits, PNG export, UI
//! styling and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    CanvasConfig, ExportConfig, HelpOverlayStyle, HistoryConfig, PenConfig, PerformanceConfig,
    StampConfig, ToolbarStyle, UiConfig,
};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 256
/// height = 256
/// background = "white"
///
/// [pen]
/// thin_thickness = 2.0
/// thick_thickness = 8.0
/// color = "random"
///
/// [stamps]
/// palette = ["🌸", "✨", "🎉", "🔥", "🍕"]
///
/// [export]
/// scale = 4.0
/// save_directory = "~/Pictures/Sketchbook"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas geometry and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Thin/thick pen presets
    #[serde(default)]
    pub pen: PenConfig,

    /// Stamp palette and glyph sizes
    #[serde(default)]
    pub stamps: StampConfig,

    /// Undo history limits
    #[serde(default)]
    pub history: HistoryConfig,

    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 64 - 4096
    /// - `pen.thin_thickness`, `pen.thick_thickness`: 1.0 - 50.0
    /// - `stamps.placed_size`, `stamps.preview_size`: 8.0 - 200.0
    /// - `export.scale`: 1.0 - 16.0
    /// - `buffer_count`: 2 - 4
    pub fn validate_and_clamp(&mut self) {
        clamp_u32("canvas.width", &mut self.canvas.width, 64, 4096);
        clamp_u32("canvas.height", &mut self.canvas.height, 64, 4096);

        clamp_f64("pen.thin_thickness", &mut self.pen.thin_thickness, 1.0, 50.0);
        clamp_f64("pen.thick_thickness", &mut self.pen.thick_thickness, 1.0, 50.0);

        clamp_f64("stamps.placed_size", &mut self.stamps.placed_size, 8.0, 200.0);
        clamp_f64("stamps.preview_size", &mut self.stamps.preview_size, 8.0, 200.0);

        let before = self.stamps.palette.len();
        self.stamps.palette.retain(|glyph| !glyph.trim().is_empty());
        if self.stamps.palette.len() != before {
            warn!("Dropped {} blank stamp(s) from palette", before - self.stamps.palette.len());
        }
        if self.stamps.palette.is_empty() {
            warn!("Stamp palette is empty, restoring the default palette");
            self.stamps.palette = types::default_stamp_palette();
        }

        if self.stamps.font_family.trim().is_empty() {
            warn!("Empty stamps.font_family, falling back to 'Sans'");
            self.stamps.font_family = "Sans".to_string();
        }

        clamp_f64("export.scale", &mut self.export.scale, 1.0, 16.0);

        if self.canvas.background.resolve().is_none() {
            warn!(
                "Invalid canvas.background {:?}, falling back to white",
                self.canvas.background
            );
            self.canvas.background = ColorSpec::Name("white".to_string());
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export.filename_template, falling back to 'sketch'");
            self.export.filename_template = "sketch".to_string();
        } else if !is_valid_template(&self.export.filename_template) {
            warn!(
                "Invalid export.filename_template '{}', using the default",
                self.export.filename_template
            );
            self.export.filename_template = types::default_filename_template();
        }

        clamp_u32(
            "performance.buffer_count",
            &mut self.performance.buffer_count,
            2,
            4,
        );
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config path cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the configuration at an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the bundled `config.example.toml` to the user's config directory
    /// and returns the path written.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path or
    /// the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, Self::example_toml())
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// The documented example configuration shipped with the binary.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Whether every chrono specifier in `template` is known.
fn is_valid_template(template: &str) -> bool {
    chrono::format::StrftimeItems::new(template)
        .all(|item| !matches!(item, chrono::format::Item::Error))
}

fn clamp_u32(name: &str, value: &mut u32, min: u32, max: u32) {
    if !(min..=max).contains(value) {
        warn!("Invalid {} {}, clamping to {}-{} range", name, value, min, max);
        *value = (*value).clamp(min, max);
    }
}

fn clamp_f64(name: &str, value: &mut f64, min: f64, max: f64) {
    if value.is_nan() {
        warn!("Invalid {} NaN, using {:.1}", name, min);
        *value = min;
    } else if !(min..=max).contains(value) {
        warn!(
            "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
            name, value, min, max
        );
        *value = value.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_sketchbook() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 256);
        assert_eq!(config.canvas.height, 256);
        assert_eq!(config.pen.thin_thickness, 2.0);
        assert_eq!(config.pen.thick_thickness, 8.0);
        assert!(config.pen.color.is_random());
        assert_eq!(config.stamps.palette, vec!["🌸", "✨", "🎉", "🔥", "🍕"]);
        assert_eq!(config.stamps.custom_default, "🌟");
        assert_eq!(config.stamps.placed_size, 36.0);
        assert_eq!(config.stamps.preview_size, 48.0);
        assert_eq!(config.export.scale, 4.0);
        assert!(!config.export.fill_background);
        assert_eq!(config.history.max_shapes, 0);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r##"
            [canvas]
            width = 512

            [pen]
            color = "#FF0000"
            "##,
        )
        .unwrap();
        assert_eq!(config.canvas.width, 512);
        assert_eq!(config.canvas.height, 256);
        assert!(!config.pen.color.is_random());
        assert_eq!(config.pen.thick_thickness, 8.0);
    }

    #[test]
    fn bad_filename_template_restores_default() {
        let mut config = Config::default();
        config.export.filename_template = "sketch_%Q".to_string();
        config.validate_and_clamp();
        assert_eq!(
            config.export.filename_template,
            types::default_filename_template()
        );

        config.export.filename_template = "doodle_%Y".to_string();
        config.validate_and_clamp();
        assert_eq!(config.export.filename_template, "doodle_%Y");
    }

    #[test]
    fn unresolvable_background_becomes_white() {
        let mut config = Config::default();
        config.canvas.background = ColorSpec::Name("random".to_string());
        config.validate_and_clamp();
        assert_eq!(config.canvas.background.resolve(), Some(crate::draw::WHITE));

        config.canvas.background = ColorSpec::Name("#FFF8E7".to_string());
        config.validate_and_clamp();
        assert_eq!(config.canvas.background, ColorSpec::Name("#FFF8E7".to_string()));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.canvas.width = 10;
        config.canvas.height = 100_000;
        config.pen.thin_thickness = 0.0;
        config.pen.thick_thickness = f64::NAN;
        config.export.scale = 64.0;
        config.performance.buffer_count = 9;
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 64);
        assert_eq!(config.canvas.height, 4096);
        assert_eq!(config.pen.thin_thickness, 1.0);
        assert_eq!(config.pen.thick_thickness, 1.0);
        assert_eq!(config.export.scale, 16.0);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn empty_palette_restores_defaults() {
        let mut config = Config::default();
        config.stamps.palette = vec!["  ".to_string()];
        config.validate_and_clamp();
        assert_eq!(config.stamps.palette.len(), 5);
    }

    #[test]
    fn example_config_parses() {
        let mut config: Config = toml::from_str(Config::example_toml()).unwrap();
        config.validate_and_clamp();
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = 1").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for key in ["canvas", "pen", "stamps", "history", "export", "keybindings"] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }
}
