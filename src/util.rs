//! Utility functions for colors and layout geometry.
//!
//! This module provides:
//! - Color name and hex parsing used by the configuration system
//! - The [`Rect`] helper used for toolbar layout and hit testing

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a `#RRGGBB` (or `RRGGBB`) hex string into an opaque color.
///
/// Returns `None` when the string is not exactly six hex digits after the
/// optional leading `#`.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|v| v as f64 / 255.0)
    };

    Some(Color {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
        a: 1.0,
    })
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle used for layout and pointer hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Returns true if the point lies inside the rectangle (max edges exclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn name_color_mapping_is_case_insensitive() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert_eq!(name_to_color("black").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn hex_colors_parse_with_or_without_hash() {
        let orange = hex_to_color("#FF8000").unwrap();
        assert_eq!(orange.r, 1.0);
        assert!((orange.g - 128.0 / 255.0).abs() < f64::EPSILON);
        assert_eq!(orange.b, 0.0);
        assert_eq!(hex_to_color("ffffff").unwrap(), WHITE);
        assert!(hex_to_color("#FFF").is_none());
        assert!(hex_to_color("#GG0000").is_none());
    }

    #[test]
    fn rect_contains_uses_exclusive_max_edges() {
        let rect = Rect {
            x: 10,
            y: 20,
            width: 30,
            height: 40,
        };
        assert!(rect.contains(10, 20));
        assert!(rect.contains(39, 59));
        assert!(!rect.contains(40, 20));
        assert!(!rect.contains(10, 60));
    }
}
