//! Transient tool preview drawn under the pointer.

use crate::draw::{Color, FontDescriptor, render_brush_indicator, render_glyph};

/// What the preview shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewKind {
    /// Outline of the pen tip; `radius` is half the pen thickness
    Brush { radius: f64, color: Color },
    /// The selected, not yet placed stamp
    Stamp {
        glyph: String,
        rotation: f64,
        size: f64,
    },
}

/// Uncommitted preview of the active tool at the pointer position.
///
/// Never part of the history and never exported.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPreview {
    pub x: i32,
    pub y: i32,
    pub kind: PreviewKind,
}

impl ToolPreview {
    /// Moves the preview to a new pointer position.
    pub fn update_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn render(&self, ctx: &cairo::Context, font: &FontDescriptor) {
        let (x, y) = (self.x as f64, self.y as f64);
        match &self.kind {
            PreviewKind::Brush { radius, color } => {
                render_brush_indicator(ctx, x, y, *radius, *color);
            }
            PreviewKind::Stamp {
                glyph,
                rotation,
                size,
            } => {
                render_glyph(ctx, x, y, glyph, *rotation, *size, font);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn brush_preview_paints_at_pointer() {
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 32, 32).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        let mut preview = ToolPreview {
            x: 2,
            y: 2,
            kind: PreviewKind::Brush {
                radius: 3.0,
                color: RED,
            },
        };
        preview.update_position(16, 16);
        preview.render(&ctx, &FontDescriptor::default());
        drop(ctx);
        surface.flush();

        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let center = 16 * stride + 16 * 4;
        assert!(data[center..center + 4].iter().any(|b| *b != 0));
        assert!(data[0..4].iter().all(|b| *b == 0));
    }
}
