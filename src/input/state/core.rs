//! Drawing state machine and input state management.

use crate::config::{Action, Config, KeyBinding};
use crate::draw::{Color, FontDescriptor, Frame};
use crate::input::{
    modifiers::Modifiers,
    preview::{PreviewKind, ToolPreview},
    tool::{PenPreset, Tool},
};
use std::collections::HashMap;

/// Thickness range reachable with `+`/`-` and the scroll wheel.
pub const MIN_THICKNESS: f64 = 1.0;
pub const MAX_THICKNESS: f64 = 50.0;

/// Current interaction mode.
///
/// Tracks whether the user is idle, dragging out a stroke, or typing a custom stamp.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// A stroke is in progress (left button held)
    Drawing {
        /// Accumulated points, starting with the press position
        points: Vec<(i32, i32)>,
        /// Color captured when the stroke started
        color: Color,
        /// Thickness captured when the stroke started
        thick: f64,
    },
    /// The custom stamp prompt is open
    StampEntry {
        /// Text typed so far
        buffer: String,
    },
}

/// Settings the input state needs from the configuration.
#[derive(Debug, Clone)]
pub struct SketchSettings {
    pub thin_thickness: f64,
    pub thick_thickness: f64,
    /// Fixed pen color, or `None` to roll a random one per pen selection
    pub fixed_pen_color: Option<Color>,
    pub palette: Vec<String>,
    pub custom_stamp_default: String,
    pub placed_stamp_size: f64,
    pub preview_stamp_size: f64,
    pub stamp_font: FontDescriptor,
    /// Maximum committed drawables (0 = unlimited)
    pub max_shapes: usize,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SketchSettings {
    fn from(config: &Config) -> Self {
        Self {
            thin_thickness: config.pen.thin_thickness,
            thick_thickness: config.pen.thick_thickness,
            fixed_pen_color: config.pen.color.fixed_color(),
            palette: config.stamps.palette.clone(),
            custom_stamp_default: config.stamps.custom_default.clone(),
            placed_stamp_size: config.stamps.placed_size,
            preview_stamp_size: config.stamps.preview_size,
            stamp_font: FontDescriptor::new(config.stamps.font_family.clone()),
            max_shapes: config.history.max_shapes,
        }
    }
}

/// Main input state containing the whole sketch session.
///
/// Holds the committed drawables and their history, the active tool and pen
/// parameters, the stamp palette and the interaction state machine. All
/// coordinates are relative to the canvas origin.
pub struct InputState {
    /// Committed drawables plus undo/redo history
    pub frame: Frame,
    /// Pen color for the next stroke
    pub current_color: Color,
    /// Pen thickness for the next stroke
    pub current_thickness: f64,
    /// Last pen preset chosen (drives toolbar highlighting)
    pub pen_preset: PenPreset,
    /// Tool applied on the next left press
    pub tool: Tool,
    /// Stamp glyphs offered in the toolbar, in button order
    pub palette: Vec<String>,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Interaction state machine
    pub state: DrawingState,
    /// Tool preview under the pointer, if any
    pub preview: Option<ToolPreview>,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is visible (toggled with F10)
    pub show_help: bool,
    pub(super) settings: SketchSettings,
    /// Keybinding action map
    action_map: HashMap<KeyBinding, Action>,
    /// Export requested and not yet handled by the backend
    pending_export: bool,
    /// Toolbar contents changed and the layout must be recomputed
    layout_changed: bool,
    pub(super) rng: fastrand::Rng,
}

impl InputState {
    /// Creates a new session with an empty canvas and the thin pen selected.
    pub fn new(
        settings: SketchSettings,
        action_map: HashMap<KeyBinding, Action>,
        rng: fastrand::Rng,
    ) -> Self {
        let mut state = Self {
            frame: Frame::new(),
            current_color: settings.fixed_pen_color.unwrap_or(crate::draw::BLACK),
            current_thickness: settings.thin_thickness,
            pen_preset: PenPreset::Thin,
            tool: Tool::Pen,
            palette: settings.palette.clone(),
            modifiers: Modifiers::new(),
            state: DrawingState::Idle,
            preview: None,
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            settings,
            action_map,
            pending_export: false,
            layout_changed: false,
            rng,
        };
        state.current_color = state.roll_pen_color();
        state
    }

    /// Font used for placed stamps and the stamp preview.
    pub fn stamp_font(&self) -> &FontDescriptor {
        &self.settings.stamp_font
    }

    /// Selects a pen preset: sets its thickness, rolls a new color and
    /// switches back to the pen tool.
    pub fn select_pen(&mut self, preset: PenPreset) {
        self.current_thickness = match preset {
            PenPreset::Thin => self.settings.thin_thickness,
            PenPreset::Thick => self.settings.thick_thickness,
        };
        self.current_color = self.roll_pen_color();
        self.pen_preset = preset;
        self.tool = Tool::Pen;
        self.refresh_preview();
        self.needs_redraw = true;
        log::debug!(
            "Selected {:?} pen ({:.0}px, {})",
            preset,
            self.current_thickness,
            self.current_color.to_hex()
        );
    }

    /// Selects the palette entry at `index` with a fresh random rotation.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_stamp(&mut self, index: usize) {
        let Some(glyph) = self.palette.get(index).cloned() else {
            log::warn!("No stamp at palette index {}", index);
            return;
        };
        let rotation = self.rng.u32(0..360) as f64;
        log::debug!("Selected stamp {} rotated {}°", glyph, rotation);
        self.tool = Tool::Stamp {
            index,
            glyph,
            rotation,
        };
        self.refresh_preview();
        self.needs_redraw = true;
    }

    /// Selects the stamp after the current one, wrapping around the palette.
    pub fn select_next_stamp(&mut self) {
        if self.palette.is_empty() {
            return;
        }
        let next = self
            .active_stamp_index()
            .map(|index| (index + 1) % self.palette.len())
            .unwrap_or(0);
        self.select_stamp(next);
    }

    /// Palette index of the selected stamp, if a stamp is selected.
    pub fn active_stamp_index(&self) -> Option<usize> {
        self.tool.stamp_index()
    }

    /// Drops a selected but unplaced stamp and returns to the pen.
    ///
    /// Returns `false` when no stamp was selected.
    pub fn cancel_stamp(&mut self) -> bool {
        if !matches!(self.tool, Tool::Stamp { .. }) {
            return false;
        }
        self.tool = Tool::Pen;
        self.refresh_preview();
        self.needs_redraw = true;
        true
    }

    /// Appends a custom glyph to the palette.
    ///
    /// Surrounding whitespace is trimmed; blank input is ignored. Returns the
    /// new palette index.
    pub fn add_custom_stamp(&mut self, glyph: &str) -> Option<usize> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            log::debug!("Ignoring empty custom stamp");
            return None;
        }
        self.palette.push(glyph.to_string());
        self.layout_changed = true;
        self.needs_redraw = true;
        log::info!("Added custom stamp {}", glyph);
        Some(self.palette.len() - 1)
    }

    /// Changes the pen thickness by `delta`, clamped to 1-50 px.
    pub fn adjust_thickness(&mut self, delta: f64) {
        let next = (self.current_thickness + delta).clamp(MIN_THICKNESS, MAX_THICKNESS);
        if next != self.current_thickness {
            self.current_thickness = next;
            self.refresh_preview();
            self.needs_redraw = true;
            log::debug!("Thickness adjusted to {:.0}px", self.current_thickness);
        }
    }

    /// Undoes the most recent committed drawable.
    pub fn undo(&mut self) {
        if self.frame.undo() {
            self.needs_redraw = true;
        }
    }

    /// Restores the most recently undone drawable.
    pub fn redo(&mut self) {
        if self.frame.redo() {
            self.needs_redraw = true;
        }
    }

    /// Empties the canvas and its history, cancelling any stroke in progress.
    pub fn clear(&mut self) {
        self.frame.clear();
        if matches!(self.state, DrawingState::Drawing { .. }) {
            self.state = DrawingState::Idle;
        }
        self.needs_redraw = true;
    }

    /// Hides the preview, e.g. when the pointer leaves the canvas.
    pub fn clear_preview(&mut self) {
        if self.preview.take().is_some() {
            self.needs_redraw = true;
        }
    }

    /// Rebuilds the preview for the active tool at the pointer position.
    ///
    /// Does nothing when no preview is showing; a hidden preview reappears on
    /// the next pointer motion.
    pub(super) fn refresh_preview(&mut self) {
        if let Some(preview) = &self.preview {
            let (x, y) = (preview.x, preview.y);
            self.preview = Some(self.preview_at(x, y));
        }
    }

    pub(super) fn preview_at(&self, x: i32, y: i32) -> ToolPreview {
        let kind = match &self.tool {
            Tool::Pen => PreviewKind::Brush {
                radius: self.current_thickness / 2.0,
                color: self.current_color,
            },
            Tool::Stamp { glyph, rotation, .. } => PreviewKind::Stamp {
                glyph: glyph.clone(),
                rotation: *rotation,
                size: self.settings.preview_stamp_size,
            },
        };
        ToolPreview { x, y, kind }
    }

    fn roll_pen_color(&mut self) -> Color {
        self.settings
            .fixed_pen_color
            .unwrap_or_else(|| Color::random(&mut self.rng))
    }

    /// Look up an action for the given key name and the held modifiers.
    ///
    /// Symbols typed with Shift (such as `+`) also match bindings written
    /// without it.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        let lookup = |shift: bool| {
            self.action_map.iter().find_map(|(binding, action)| {
                binding
                    .matches(key_str, self.modifiers.ctrl, shift, self.modifiers.alt)
                    .then_some(*action)
            })
        };

        lookup(self.modifiers.shift).or_else(|| {
            let is_symbol = key_str.chars().count() == 1
                && key_str.chars().all(|c| !c.is_alphanumeric());
            if self.modifiers.shift && is_symbol {
                lookup(false)
            } else {
                None
            }
        })
    }

    /// Takes and clears a pending export request.
    ///
    /// The backend calls this after each event batch since exporting needs
    /// the canvas size and export configuration.
    pub fn take_pending_export(&mut self) -> bool {
        std::mem::take(&mut self.pending_export)
    }

    pub(super) fn request_export(&mut self) {
        self.pending_export = true;
    }

    /// Takes and clears the toolbar layout change flag.
    pub fn take_layout_changed(&mut self) -> bool {
        std::mem::take(&mut self.layout_changed)
    }
}
