use super::ExportError;
use crate::draw::{Color, Shape, render_background, render_shapes};

/// Renders drawables onto an offscreen surface scaled by `scale` and encodes it as PNG.
///
/// A 256x256 canvas at scale 4 produces a 1024x1024 image. Without a
/// `background` the image keeps a transparent background.
pub fn render_png_bytes(
    shapes: &[Shape],
    canvas_width: u32,
    canvas_height: u32,
    scale: f64,
    background: Option<Color>,
) -> Result<Vec<u8>, ExportError> {
    let width = (canvas_width as f64 * scale).round() as i32;
    let height = (canvas_height as f64 * scale).round() as i32;
    if width <= 0 || height <= 0 {
        return Err(ExportError::InvalidSize { width, height });
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        ctx.scale(scale, scale);
        if let Some(color) = background {
            render_background(&ctx, color);
        }
        render_shapes(&ctx, shapes);
    }
    surface.flush();

    let mut bytes = Vec::new();
    surface
        .write_to_png(&mut bytes)
        .map_err(|e| ExportError::Encode(e.to_string()))?;

    log::debug!(
        "Rendered {} drawables to {}x{} PNG ({} bytes)",
        shapes.len(),
        width,
        height,
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, WHITE};

    fn decode(bytes: &[u8]) -> cairo::ImageSurface {
        let mut cursor = std::io::Cursor::new(bytes);
        cairo::ImageSurface::create_from_png(&mut cursor).unwrap()
    }

    fn pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> u32 {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    }

    #[test]
    fn empty_scene_is_transparent() {
        let bytes = render_png_bytes(&[], 16, 16, 2.0, None).unwrap();
        let mut surface = decode(&bytes);
        assert_eq!((surface.width(), surface.height()), (32, 32));
        assert_eq!(pixel(&mut surface, 5, 5) >> 24, 0);
    }

    #[test]
    fn background_fill_is_opaque() {
        let bytes = render_png_bytes(&[], 8, 8, 1.0, Some(WHITE)).unwrap();
        let mut surface = decode(&bytes);
        assert_eq!(pixel(&mut surface, 3, 3), 0xFFFF_FFFF);
    }

    #[test]
    fn strokes_are_scaled_with_the_canvas() {
        let stroke = Shape::Stroke {
            points: vec![(0, 4), (8, 4)],
            color: RED,
            thick: 2.0,
        };
        let bytes = render_png_bytes(&[stroke], 8, 8, 4.0, None).unwrap();
        let mut surface = decode(&bytes);
        // Canvas y=4 lands on y=16 once scaled; 2px thick becomes 8px
        assert_eq!(pixel(&mut surface, 16, 16) >> 24, 0xFF);
        assert_eq!(pixel(&mut surface, 16, 19) >> 24, 0xFF);
        assert_eq!(pixel(&mut surface, 16, 2) >> 24, 0);
    }

    #[test]
    fn zero_scale_is_rejected() {
        assert!(matches!(
            render_png_bytes(&[], 16, 16, 0.0, None),
            Err(ExportError::InvalidSize { .. })
        ));
    }
}
