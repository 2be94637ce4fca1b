use crate::draw::Shape;
use crate::input::{events::MouseButton, tool::Tool};
use log::warn;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a mouse button press on the canvas.
    ///
    /// # Behavior
    /// - Left press with a stamp selected: places the stamp and returns to the pen
    /// - Left press with the pen: starts a stroke and drops the redo history
    /// - Right press: cancels the stroke in progress or the selected stamp
    ///
    /// Presses are ignored while the custom stamp prompt is open.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if matches!(self.state, DrawingState::StampEntry { .. }) {
            return;
        }

        match button {
            MouseButton::Left => {
                if !matches!(self.state, DrawingState::Idle) {
                    return;
                }
                self.preview = None;

                match self.tool.clone() {
                    Tool::Stamp { glyph, rotation, .. } => self.place_stamp(x, y, glyph, rotation),
                    Tool::Pen => {
                        self.frame.discard_redo();
                        self.state = DrawingState::Drawing {
                            points: vec![(x, y)],
                            color: self.current_color,
                            thick: self.current_thickness,
                        };
                    }
                }
                self.needs_redraw = true;
            }
            MouseButton::Right => {
                if matches!(self.state, DrawingState::Drawing { .. }) {
                    self.state = DrawingState::Idle;
                    self.needs_redraw = true;
                } else {
                    self.cancel_stamp();
                }
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion over the canvas.
    ///
    /// While drawing, extends the stroke in progress. Otherwise moves the
    /// tool preview to the pointer.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        if let DrawingState::Drawing { points, .. } = &mut self.state {
            if points.last() != Some(&(x, y)) {
                points.push((x, y));
                self.needs_redraw = true;
            }
            return;
        }

        if matches!(self.state, DrawingState::Idle) {
            if let Some(preview) = self.preview.as_mut() {
                preview.update_position(x, y);
            } else {
                self.preview = Some(self.preview_at(x, y));
            }
            self.needs_redraw = true;
        }
    }

    /// Processes mouse button release events.
    ///
    /// Releasing the left button freezes the stroke in progress and commits
    /// it to the history.
    pub fn on_mouse_release(&mut self, button: MouseButton, _x: i32, _y: i32) {
        if button != MouseButton::Left {
            return;
        }

        let DrawingState::Drawing {
            points,
            color,
            thick,
        } = std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return;
        };

        let shape = Shape::Stroke {
            points,
            color,
            thick,
        };
        self.commit(shape);
        self.needs_redraw = true;
    }

    /// Scroll wheel adjusts pen thickness; scrolling down makes it thicker.
    pub fn on_scroll(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.adjust_thickness(1.0);
        } else if delta_y < 0.0 {
            self.adjust_thickness(-1.0);
        }
    }

    fn place_stamp(&mut self, x: i32, y: i32, glyph: String, rotation: f64) {
        let shape = Shape::Stamp {
            x,
            y,
            glyph,
            rotation,
            size: self.settings.placed_stamp_size,
            font_descriptor: self.settings.stamp_font.clone(),
        };
        self.commit(shape);
        self.tool = Tool::Pen;
    }

    fn commit(&mut self, shape: Shape) {
        let kind = shape.kind();
        if self.frame.try_add_shape(shape, self.settings.max_shapes) {
            log::debug!("Committed {} ({} drawables)", kind, self.frame.shapes.len());
        } else {
            warn!(
                "Drawable limit ({}) reached; discarding new {}",
                self.settings.max_shapes, kind
            );
        }
    }
}
