//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas geometry and appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Canvas background color shown on screen
    #[serde(default = "default_canvas_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background: default_canvas_background(),
        }
    }
}

/// Pen presets.
///
/// Selecting a preset sets the pen thickness; with the default `color = "random"`
/// every selection also rolls a new random pen color.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PenConfig {
    /// Thin pen thickness in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_thin_thickness")]
    pub thin_thickness: f64,

    /// Thick pen thickness in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_thick_thickness")]
    pub thick_thickness: f64,

    /// Pen color: "random" (re-rolled on every pen selection), a named color,
    /// a "#RRGGBB" hex string, or an RGB array
    #[serde(default = "default_pen_color")]
    pub color: ColorSpec,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            thin_thickness: default_thin_thickness(),
            thick_thickness: default_thick_thickness(),
            color: default_pen_color(),
        }
    }
}

/// Stamp palette and glyph appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StampConfig {
    /// Glyphs offered in the toolbar at startup
    #[serde(default = "default_stamp_palette")]
    pub palette: Vec<String>,

    /// Text pre-filled in the custom stamp prompt
    #[serde(default = "default_custom_stamp")]
    pub custom_default: String,

    /// Size of placed stamps in pixels (valid range: 8.0 - 200.0)
    #[serde(default = "default_placed_size")]
    pub placed_size: f64,

    /// Size of the stamp preview under the pointer in pixels (valid range: 8.0 - 200.0)
    #[serde(default = "default_preview_size")]
    pub preview_size: f64,

    /// Font family used to shape stamp glyphs
    #[serde(default = "default_stamp_font_family")]
    pub font_family: String,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            palette: default_stamp_palette(),
            custom_default: default_custom_stamp(),
            placed_size: default_placed_size(),
            preview_size: default_preview_size(),
            font_family: default_stamp_font_family(),
        }
    }
}

/// History limits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of committed drawables (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_shapes: 0 }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Upscale factor applied to the canvas size (valid range: 1.0 - 16.0)
    #[serde(default = "default_export_scale")]
    pub scale: f64,

    /// Directory exports are written to (supports `~/`)
    #[serde(default = "default_export_directory")]
    pub save_directory: String,

    /// Filename template without extension (chrono format specifiers allowed)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Paint the canvas background into the export instead of leaving it transparent
    #[serde(default)]
    pub fill_background: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
            save_directory: default_export_directory(),
            filename_template: default_filename_template(),
            fill_background: false,
        }
    }
}

/// Performance tuning options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Heading shown above the canvas
    #[serde(default = "default_title")]
    pub title: String,

    /// Toolbar styling options
    #[serde(default)]
    pub toolbar_style: ToolbarStyle,

    /// Help overlay styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            toolbar_style: ToolbarStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Toolbar and window chrome styling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolbarStyle {
    /// Font size for button labels
    #[serde(default = "default_toolbar_font_size")]
    pub font_size: f64,

    /// Font size for the title heading
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,

    /// Height of one button row
    #[serde(default = "default_button_height")]
    pub button_height: f64,

    /// Gap between buttons and around the canvas
    #[serde(default = "default_toolbar_spacing")]
    pub spacing: f64,

    /// Window background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_window_bg_color")]
    pub window_bg_color: [f64; 4],

    /// Button background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_button_bg_color")]
    pub button_bg_color: [f64; 4],

    /// Background of the active tool's button [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_button_active_color")]
    pub button_active_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_toolbar_text_color")]
    pub text_color: [f64; 4],
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self {
            font_size: default_toolbar_font_size(),
            title_font_size: default_title_font_size(),
            button_height: default_button_height(),
            spacing: default_toolbar_spacing(),
            window_bg_color: default_window_bg_color(),
            button_bg_color: default_button_bg_color(),
            button_active_color: default_button_active_color(),
            text_color: default_toolbar_text_color(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HelpOverlayStyle {
    /// Font size for help overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for help text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around help box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    /// Border line width
    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_size() -> u32 {
    256
}

fn default_canvas_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_thin_thickness() -> f64 {
    2.0
}

fn default_thick_thickness() -> f64 {
    8.0
}

fn default_pen_color() -> ColorSpec {
    ColorSpec::Name("random".to_string())
}

pub(crate) fn default_stamp_palette() -> Vec<String> {
    ["🌸", "✨", "🎉", "🔥", "🍕"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_custom_stamp() -> String {
    "🌟".to_string()
}

fn default_placed_size() -> f64 {
    36.0
}

fn default_preview_size() -> f64 {
    48.0
}

fn default_stamp_font_family() -> String {
    "Sans".to_string()
}

fn default_export_scale() -> f64 {
    4.0
}

fn default_export_directory() -> String {
    "~/Pictures/Sketchbook".to_string()
}

pub(crate) fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_title() -> String {
    "Fun Sketchbook".to_string()
}

fn default_toolbar_font_size() -> f64 {
    13.0
}

fn default_title_font_size() -> f64 {
    22.0
}

fn default_button_height() -> f64 {
    28.0
}

fn default_toolbar_spacing() -> f64 {
    6.0
}

fn default_window_bg_color() -> [f64; 4] {
    [0.95, 0.95, 0.95, 1.0]
}

fn default_button_bg_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_button_active_color() -> [f64; 4] {
    [0.83, 0.83, 0.83, 1.0] // lightgray
}

fn default_toolbar_text_color() -> [f64; 4] {
    [0.1, 0.1, 0.1, 1.0]
}

// Help overlay style defaults
fn default_help_font_size() -> f64 {
    12.0
}

fn default_help_line_height() -> f64 {
    17.0
}

fn default_help_padding() -> f64 {
    14.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
