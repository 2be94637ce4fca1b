//! Cairo-based rendering functions for drawables and previews.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::Shape;

/// Fills the current clip (or the whole target) with a solid color.
///
/// Called after clearing the canvas area and before rendering drawables.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - if paint fails, the area stays transparent
}

/// Renders all drawables in a collection to a Cairo context.
///
/// Drawables are drawn in the order they appear (first = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single drawable to a Cairo context.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Stroke {
            points,
            color,
            thick,
        } => {
            render_stroke_borrowed(ctx, points, *color, *thick);
        }
        Shape::Stamp {
            x,
            y,
            glyph,
            rotation,
            size,
            font_descriptor,
        } => {
            render_glyph(
                ctx,
                *x as f64,
                *y as f64,
                glyph,
                *rotation,
                *size,
                font_descriptor,
            );
        }
    }
}

/// Render a pen stroke (polyline through points)
///
/// Accepts a borrowed slice so the stroke in progress can be drawn every frame
/// without cloning its points.
pub fn render_stroke_borrowed(ctx: &cairo::Context, points: &[(i32, i32)], color: Color, thick: f64) {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x0 as f64, y0 as f64);
    if rest.is_empty() {
        // Zero-length segment so a single click still leaves a round dot
        ctx.line_to(x0 as f64, y0 as f64);
    }
    for &(x, y) in rest {
        ctx.line_to(x as f64, y as f64);
    }

    let _ = ctx.stroke();
}

/// Renders a glyph rotated around its baseline anchor using Pango.
///
/// `(x, y)` is the start of the glyph's baseline, matching how canvas text is
/// anchored. `rotation` is in degrees, clockwise in screen space. `size` is an
/// absolute pixel size.
pub fn render_glyph(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    glyph: &str,
    rotation: f64,
    size: f64,
    font_descriptor: &FontDescriptor,
) {
    if glyph.is_empty() {
        return;
    }

    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);
    ctx.translate(x, y);
    ctx.rotate(rotation.to_radians());

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font_descriptor.pango_description(size)));
    layout.set_text(glyph);

    // Pango positions from the top-left corner; shift so (0, 0) is the baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(0.0, -baseline);

    // Color fonts ignore the source; plain glyphs come out black
    ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

/// Renders the brush-size indicator: an outlined circle the size of the pen tip.
pub fn render_brush_indicator(ctx: &cairo::Context, x: f64, y: f64, radius: f64, color: Color) {
    let radius = radius.max(1.0);
    let _ = ctx.save();

    ctx.set_source_rgba(color.r, color.g, color.b, color.a * 0.35);
    ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill_preserve();

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();

    let _ = ctx.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, WHITE};

    fn surface_with_context(width: i32, height: i32) -> (cairo::ImageSurface, cairo::Context) {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        (surface, ctx)
    }

    fn alpha_at(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> u8 {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        // ARGB32 is native-endian; alpha is the most significant byte
        let offset = y * stride + x * 4;
        let pixel = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        (pixel >> 24) as u8
    }

    #[test]
    fn stroke_paints_along_its_path() {
        let (mut surface, ctx) = surface_with_context(64, 64);
        render_shape(
            &ctx,
            &Shape::Stroke {
                points: vec![(8, 32), (56, 32)],
                color: BLUE,
                thick: 6.0,
            },
        );
        drop(ctx);
        surface.flush();

        assert_eq!(alpha_at(&mut surface, 32, 32), 255);
        assert_eq!(alpha_at(&mut surface, 32, 4), 0);
    }

    #[test]
    fn single_point_stroke_leaves_a_dot() {
        let (mut surface, ctx) = surface_with_context(32, 32);
        render_stroke_borrowed(&ctx, &[(16, 16)], BLUE, 8.0);
        drop(ctx);
        surface.flush();

        assert!(alpha_at(&mut surface, 16, 16) > 0);
    }

    #[test]
    fn empty_stroke_draws_nothing() {
        let (mut surface, ctx) = surface_with_context(16, 16);
        render_stroke_borrowed(&ctx, &[], BLUE, 8.0);
        drop(ctx);
        surface.flush();

        let data = surface.data().unwrap();
        assert!(data.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn background_fills_every_pixel() {
        let (mut surface, ctx) = surface_with_context(8, 8);
        render_background(&ctx, WHITE);
        drop(ctx);
        surface.flush();

        assert_eq!(alpha_at(&mut surface, 0, 0), 255);
        assert_eq!(alpha_at(&mut surface, 7, 7), 255);
    }

    #[test]
    fn brush_indicator_marks_the_pointer_position() {
        let (mut surface, ctx) = surface_with_context(32, 32);
        render_brush_indicator(&ctx, 16.0, 16.0, 4.0, BLUE);
        drop(ctx);
        surface.flush();

        assert!(alpha_at(&mut surface, 16, 16) > 0);
        assert_eq!(alpha_at(&mut surface, 1, 1), 0);
    }
}
