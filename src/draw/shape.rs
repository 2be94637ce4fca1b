//! Drawable definitions for the sketch canvas.

use super::color::Color;
use super::font::FontDescriptor;

/// Represents a drawable committed to the canvas.
///
/// Each variant stores everything it needs for independent rendering, so the
/// same value renders identically on screen and in exports.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Pen line - polyline connecting pointer drag points
    Stroke {
        /// Sequence of (x, y) canvas coordinates traced by the pointer
        points: Vec<(i32, i32)>,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Placed glyph with a fixed rotation
    Stamp {
        /// Anchor X coordinate (glyph baseline start)
        x: i32,
        /// Anchor Y coordinate (glyph baseline)
        y: i32,
        /// Glyph or short string to display
        glyph: String,
        /// Rotation around the anchor in degrees
        rotation: f64,
        /// Glyph size in pixels
        size: f64,
        /// Font used to shape the glyph
        font_descriptor: FontDescriptor,
    },
}

impl Shape {
    /// Returns a short human-readable kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Stroke { .. } => "stroke",
            Shape::Stamp { .. } => "stamp",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_name_each_variant() {
        let stroke = Shape::Stroke {
            points: vec![(5, 5)],
            color: crate::draw::WHITE,
            thick: 1.0,
        };
        let stamp = Shape::Stamp {
            x: 100,
            y: 50,
            glyph: "🔥".to_string(),
            rotation: 45.0,
            size: 36.0,
            font_descriptor: FontDescriptor::default(),
        };
        assert_eq!(stroke.kind(), "stroke");
        assert_eq!(stamp.kind(), "stamp");
    }
}
