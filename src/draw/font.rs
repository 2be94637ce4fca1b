//! Font selection for stamp glyphs.

/// Font family used to shape stamp glyphs.
///
/// Each placed stamp keeps its own copy so the canvas and exports shape the
/// glyph the same way even if the configured family changes later.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Pango family list, e.g. `"Sans"` or `"Noto Color Emoji, Sans"`
    pub family: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
        }
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }

    /// Pango description at an absolute pixel `size`.
    ///
    /// Blank family names fall back to `Sans`.
    pub fn pango_description(&self, size: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::new();
        let family = self.family.trim();
        desc.set_family(if family.is_empty() { "Sans" } else { family });
        desc.set_absolute_size(size.max(1.0) * pango::SCALE as f64);
        desc
    }
}
