use crate::draw::render_stroke_borrowed;

use super::{DrawingState, InputState};

impl InputState {
    /// Renders the stroke in progress directly from its point buffer.
    ///
    /// Returns `true` if a stroke was drawn.
    pub fn render_stroke_in_progress(&self, ctx: &cairo::Context) -> bool {
        if let DrawingState::Drawing {
            points,
            color,
            thick,
        } = &self.state
        {
            render_stroke_borrowed(ctx, points, *color, *thick);
            true
        } else {
            false
        }
    }

    /// Renders the tool preview, which only shows while idle.
    ///
    /// Returns `true` if a preview was drawn.
    pub fn render_preview(&self, ctx: &cairo::Context) -> bool {
        match (&self.state, &self.preview) {
            (DrawingState::Idle, Some(preview)) => {
                preview.render(ctx, &self.settings.stamp_font);
                true
            }
            _ => false,
        }
    }

    /// Renders the whole canvas contents: committed drawables in commit
    /// order, then the stroke in progress, then the preview.
    pub fn render_canvas(&self, ctx: &cairo::Context) {
        crate::draw::render_shapes(ctx, &self.frame.shapes);
        self.render_stroke_in_progress(ctx);
        self.render_preview(ctx);
    }

    /// Text of the open custom stamp prompt.
    pub fn prompt_text(&self) -> Option<&str> {
        match &self.state {
            DrawingState::StampEntry { buffer } => Some(buffer),
            _ => None,
        }
    }
}
