//! UI chrome: window layout, title, toolbar, custom stamp prompt, help overlay.

use crate::config::{Action, HelpOverlayStyle, ToolbarStyle};
use crate::input::{InputState, PenPreset, Tool};
use crate::util::Rect;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Narrowest surface; keeps the fixed buttons on a couple of rows
const MIN_SURFACE_WIDTH: f64 = 420.0;
/// Horizontal padding inside a button
const BUTTON_PADDING_X: f64 = 10.0;
/// Width estimate per ASCII character, relative to the font size
const ASCII_CHAR_WIDTH: f64 = 0.62;
/// Width estimate per non-ASCII glyph (emoji), relative to the font size
const WIDE_CHAR_WIDTH: f64 = 1.4;
/// Title row height relative to the title font size
const TITLE_LINE_FACTOR: f64 = 1.5;
/// Corner radius for buttons
const BUTTON_RADIUS: f64 = 4.0;

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;

/// A clickable toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    ThinPen,
    ThickPen,
    /// Palette entry by index
    Stamp(usize),
    CreateStamp,
    Export,
    Undo,
    Redo,
    Clear,
}

impl ToolbarButton {
    /// Buttons in display order for a palette of `palette_len` stamps.
    pub fn all(palette_len: usize) -> Vec<ToolbarButton> {
        let mut buttons = vec![ToolbarButton::ThinPen, ToolbarButton::ThickPen];
        buttons.extend((0..palette_len).map(ToolbarButton::Stamp));
        buttons.extend([
            ToolbarButton::CreateStamp,
            ToolbarButton::Export,
            ToolbarButton::Undo,
            ToolbarButton::Redo,
            ToolbarButton::Clear,
        ]);
        buttons
    }

    pub fn label(&self, palette: &[String]) -> String {
        match self {
            ToolbarButton::ThinPen => "Thin Pen".to_string(),
            ToolbarButton::ThickPen => "Thick Pen".to_string(),
            ToolbarButton::Stamp(index) => palette.get(*index).cloned().unwrap_or_default(),
            ToolbarButton::CreateStamp => "Create Custom Stamp".to_string(),
            ToolbarButton::Export => "Export as PNG".to_string(),
            ToolbarButton::Undo => "Undo".to_string(),
            ToolbarButton::Redo => "Redo".to_string(),
            ToolbarButton::Clear => "Clear".to_string(),
        }
    }

    /// The action a click dispatches.
    pub fn action(&self) -> Action {
        match self {
            ToolbarButton::ThinPen => Action::SelectThinPen,
            ToolbarButton::ThickPen => Action::SelectThickPen,
            ToolbarButton::Stamp(index) => Action::SelectStamp(*index),
            ToolbarButton::CreateStamp => Action::CreateStamp,
            ToolbarButton::Export => Action::Export,
            ToolbarButton::Undo => Action::Undo,
            ToolbarButton::Redo => Action::Redo,
            ToolbarButton::Clear => Action::ClearCanvas,
        }
    }

    /// Whether the button represents the active tool (drawn highlighted).
    pub fn is_active(&self, state: &InputState) -> bool {
        match (self, &state.tool) {
            (ToolbarButton::ThinPen, Tool::Pen) => state.pen_preset == PenPreset::Thin,
            (ToolbarButton::ThickPen, Tool::Pen) => state.pen_preset == PenPreset::Thick,
            (ToolbarButton::Stamp(index), Tool::Stamp { .. }) => {
                state.active_stamp_index() == Some(*index)
            }
            _ => false,
        }
    }
}

/// Estimated rendered width of `text` at `font_size`.
///
/// The layout has to be known before any surface exists, so it is computed
/// from character classes instead of measured.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                ASCII_CHAR_WIDTH
            } else if is_zero_width(c) {
                0.0
            } else {
                WIDE_CHAR_WIDTH
            }
        })
        .sum::<f64>()
        * font_size
}

fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200D}' | '\u{FE0E}' | '\u{FE0F}') || ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

/// Positions of everything on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Title text area
    pub title: Rect,
    /// Canvas area; pointer coordinates inside it are canvas coordinates
    pub canvas: Rect,
    /// Toolbar buttons with their bounds, in display order
    pub buttons: Vec<(ToolbarButton, Rect)>,
}

impl Layout {
    /// Lays out the title, the canvas and the wrapping toolbar below it.
    pub fn compute(
        canvas_width: u32,
        canvas_height: u32,
        palette: &[String],
        style: &ToolbarStyle,
    ) -> Self {
        let spacing = style.spacing.max(0.0);
        let canvas_w = canvas_width as f64;
        let canvas_h = canvas_height as f64;
        let width = (canvas_w + spacing * 2.0).max(MIN_SURFACE_WIDTH).ceil();

        let title_height = (style.title_font_size * TITLE_LINE_FACTOR).ceil();
        let title = rect(spacing, spacing, width - spacing * 2.0, title_height);

        let canvas_x = ((width - canvas_w) / 2.0).floor();
        let canvas_y = spacing + title_height + spacing;
        let canvas = rect(canvas_x, canvas_y, canvas_w, canvas_h);

        let row_height = style.button_height;
        let mut x = spacing;
        let mut row_y = canvas_y + canvas_h + spacing;
        let mut buttons = Vec::new();

        for button in ToolbarButton::all(palette.len()) {
            let label = button.label(palette);
            let button_w =
                (estimate_text_width(&label, style.font_size) + BUTTON_PADDING_X * 2.0).ceil();
            if x > spacing && x + button_w > width - spacing {
                x = spacing;
                row_y += row_height + spacing;
            }
            buttons.push((button, rect(x, row_y, button_w, row_height)));
            x += button_w + spacing;
        }

        let height = (row_y + row_height + spacing).ceil();

        Self {
            width: width as u32,
            height: height as u32,
            title,
            canvas,
            buttons,
        }
    }

    /// Returns the button under a surface position.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<ToolbarButton> {
        let (x, y) = (x.floor() as i32, y.floor() as i32);
        self.buttons
            .iter()
            .find(|(_, bounds)| bounds.contains(x, y))
            .map(|(button, _)| *button)
    }

    /// Converts a surface position to canvas coordinates.
    ///
    /// Returns `None` when the position is outside the canvas.
    pub fn canvas_point(&self, x: f64, y: f64) -> Option<(i32, i32)> {
        let (cx, cy) = self.to_canvas(x, y);
        (cx >= 0 && cy >= 0 && cx < self.canvas.width && cy < self.canvas.height)
            .then_some((cx, cy))
    }

    /// Converts a surface position to canvas coordinates without bounds checks.
    ///
    /// Used while a stroke is in progress, which may leave the canvas.
    pub fn to_canvas(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x - self.canvas.x as f64).floor() as i32,
            (y - self.canvas.y as f64).floor() as i32,
        )
    }
}

fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect {
        x: x.round() as i32,
        y: y.round() as i32,
        width: width.round().max(1.0) as i32,
        height: height.round().max(1.0) as i32,
    }
}

fn set_rgba(ctx: &cairo::Context, [r, g, b, a]: [f64; 4]) {
    ctx.set_source_rgba(r, g, b, a);
}

fn rounded_rect(ctx: &cairo::Context, bounds: &Rect, radius: f64) {
    let (x, y) = (bounds.x as f64, bounds.y as f64);
    let (w, h) = (bounds.width as f64, bounds.height as f64);
    let r = radius.min(w / 2.0).min(h / 2.0);
    let pi = std::f64::consts::PI;
    ctx.new_sub_path();
    ctx.arc(x + w - r, y + r, r, -pi / 2.0, 0.0);
    ctx.arc(x + w - r, y + h - r, r, 0.0, pi / 2.0);
    ctx.arc(x + r, y + h - r, r, pi / 2.0, pi);
    ctx.arc(x + r, y + r, r, pi, 1.5 * pi);
    ctx.close_path();
}

/// Draws `text` with Pango centered in `bounds`.
fn draw_centered_text(
    ctx: &cairo::Context,
    text: &str,
    font: &str,
    bounds: &Rect,
    color: [f64; 4],
) {
    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&pango::FontDescription::from_string(font)));
    layout.set_text(text);
    let (text_w, text_h) = layout.pixel_size();

    let x = bounds.x as f64 + (bounds.width as f64 - text_w as f64) / 2.0;
    let y = bounds.y as f64 + (bounds.height as f64 - text_h as f64) / 2.0;
    set_rgba(ctx, color);
    ctx.move_to(x, y);
    pangocairo::functions::show_layout(ctx, &layout);
}

/// Paints the window background and the title heading.
pub fn render_window(ctx: &cairo::Context, layout: &Layout, title: &str, style: &ToolbarStyle) {
    set_rgba(ctx, style.window_bg_color);
    let _ = ctx.paint();

    draw_centered_text(
        ctx,
        title,
        &format!("Sans Bold {}", style.title_font_size.round() as i32),
        &layout.title,
        style.text_color,
    );
}

/// Renders the toolbar; the active tool's button uses the active color.
pub fn render_toolbar(
    ctx: &cairo::Context,
    layout: &Layout,
    input_state: &InputState,
    style: &ToolbarStyle,
) {
    let font = format!("Sans {}", style.font_size.round() as i32);

    for (button, bounds) in &layout.buttons {
        let background = if button.is_active(input_state) {
            style.button_active_color
        } else {
            style.button_bg_color
        };

        rounded_rect(ctx, bounds, BUTTON_RADIUS);
        set_rgba(ctx, background);
        let _ = ctx.fill_preserve();
        ctx.set_source_rgba(0.6, 0.6, 0.6, 1.0);
        ctx.set_line_width(1.0);
        let _ = ctx.stroke();

        let label = button.label(&input_state.palette);
        draw_centered_text(ctx, &label, &font, bounds, style.text_color);
    }
}

/// Renders the custom stamp prompt as a dialog box over the canvas.
pub fn render_stamp_prompt(ctx: &cairo::Context, layout: &Layout, text: &str, style: &ToolbarStyle) {
    let canvas = &layout.canvas;
    let box_w = (canvas.width as f64 - style.spacing * 2.0).max(80.0);
    let box_h = style.button_height * 2.5;
    let bounds = rect(
        canvas.x as f64 + (canvas.width as f64 - box_w) / 2.0,
        canvas.y as f64 + (canvas.height as f64 - box_h) / 2.0,
        box_w,
        box_h,
    );

    // Dim the canvas behind the dialog
    ctx.set_source_rgba(0.0, 0.0, 0.0, 0.25);
    ctx.rectangle(
        canvas.x as f64,
        canvas.y as f64,
        canvas.width as f64,
        canvas.height as f64,
    );
    let _ = ctx.fill();

    rounded_rect(ctx, &bounds, BUTTON_RADIUS);
    set_rgba(ctx, style.button_bg_color);
    let _ = ctx.fill_preserve();
    set_rgba(ctx, style.text_color);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();

    let half = bounds.height / 2;
    let heading = Rect {
        height: half,
        ..bounds
    };
    let entry = Rect {
        y: bounds.y + half,
        height: bounds.height - half,
        ..bounds
    };
    let font = format!("Sans {}", style.font_size.round() as i32);
    draw_centered_text(ctx, "Enter a custom stamp:", &font, &heading, style.text_color);
    draw_centered_text(ctx, &format!("{}_", text), &font, &entry, style.text_color);
}

/// Render help overlay showing all keybindings
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let help_text = [
        "SKETCHBOOK CONTROLS",
        "",
        "  Drag              Draw with the pen",
        "  1 / 2             Thin / thick pen (new color)",
        "  +/- or Scroll     Pen thickness",
        "  S                 Next stamp",
        "  C                 Create custom stamp",
        "  Click             Place selected stamp",
        "  Right click       Cancel stroke or stamp",
        "",
        "  Ctrl+Z            Undo",
        "  Ctrl+Y            Redo",
        "  E                 Clear canvas",
        "  Ctrl+S            Export as PNG",
        "",
        "  F10               Toggle help",
        "  Escape / Ctrl+Q   Exit",
    ];

    ctx.set_font_size(style.font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    let mut max_width: f64 = 0.0;
    for line in &help_text {
        let width = match ctx.text_extents(line) {
            Ok(ext) => ext.width(),
            Err(e) => {
                log::warn!("Failed to measure help text line '{}': {}, using fallback width", line, e);
                line.len() as f64 * HELP_CHAR_WIDTH_ESTIMATE
            }
        };
        max_width = max_width.max(width);
    }

    let box_width = max_width + style.padding * 2.0;
    let box_height = (help_text.len() as f64) * style.line_height + style.padding * 2.0;

    // Center the box
    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    set_rgba(ctx, style.bg_color);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    set_rgba(ctx, style.border_color);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    set_rgba(ctx, style.text_color);
    for (i, line) in help_text.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
}
