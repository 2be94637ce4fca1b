//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// background = "white"
///
/// # Hex color
/// background = "#FFF8E7"
///
/// # Custom RGB color (0-255 per component)
/// background = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black),
    /// a `#RRGGBB` hex string, or `random` where a random color is allowed
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Returns true when the spec asks for a freshly rolled random color.
    pub fn is_random(&self) -> bool {
        matches!(self, ColorSpec::Name(name) if name.eq_ignore_ascii_case("random"))
    }

    /// Resolves the spec to a fixed color, or `None` when it is `random`.
    pub fn fixed_color(&self) -> Option<Color> {
        if self.is_random() {
            None
        } else {
            Some(self.to_color())
        }
    }

    /// Resolves the spec without falling back; `None` for unknown names and
    /// `random`.
    pub fn resolve(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => {
                crate::util::name_to_color(name).or_else(|| crate::util::hex_to_color(name))
            }
            ColorSpec::Rgb([r, g, b]) => Some(Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            }),
        }
    }

    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped with `util::name_to_color()`, hex strings with
    /// `util::hex_to_color()`. Unknown names (including `random`) default to
    /// black with a warning. RGB arrays are converted from 0-255 range to
    /// 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        self.resolve().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using black", self);
            BLACK
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_hex_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("white".into()).to_color(), WHITE);
        assert_eq!(ColorSpec::Name("#0000FF".into()).to_color(), BLUE);
        assert_eq!(ColorSpec::Rgb([255, 0, 0]).to_color(), RED);
    }

    #[test]
    fn random_spec_has_no_fixed_color() {
        let spec = ColorSpec::Name("Random".into());
        assert!(spec.is_random());
        assert!(spec.fixed_color().is_none());
        assert_eq!(
            ColorSpec::Name("green".into()).fixed_color(),
            Some(GREEN)
        );
    }

    #[test]
    fn unknown_names_fall_back_to_black() {
        assert_eq!(ColorSpec::Name("chartreuse".into()).resolve(), None);
        assert_eq!(ColorSpec::Name("chartreuse".into()).to_color(), BLACK);
    }
}
