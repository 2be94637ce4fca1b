//! Tool selection.

/// Pen presets offered in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenPreset {
    Thin,
    Thick,
}

/// The tool applied on the next pointer press.
///
/// Stamps are one-shot: placing one returns the tool to [`Tool::Pen`].
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    /// Freehand pen using the current color and thickness
    Pen,
    /// Place `glyph` (palette entry `index`) rotated by `rotation` degrees
    Stamp {
        index: usize,
        glyph: String,
        rotation: f64,
    },
}

impl Tool {
    /// Palette index of the selected stamp, if a stamp is selected.
    ///
    /// Duplicate glyphs in the palette stay distinguishable by index.
    pub fn stamp_index(&self) -> Option<usize> {
        match self {
            Tool::Stamp { index, .. } => Some(*index),
            Tool::Pen => None,
        }
    }
}
