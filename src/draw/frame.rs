//! Frame container holding the committed drawables and the undo/redo history.

use super::shape::Shape;

/// Container for all drawables in the current sketch.
///
/// `shapes` is the committed sequence (draw order, first = bottom layer) and
/// `undone` holds drawables removed by undo, most recent last. History is
/// linear: committing anything new discards the undone sequence.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Committed drawables in draw order
    pub shapes: Vec<Shape>,
    /// Undone drawables, the next redo candidate is last
    undone: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all drawables and the redo history, clearing the canvas.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.undone.clear();
    }

    /// Drops the redo history without touching committed drawables.
    pub fn discard_redo(&mut self) {
        self.undone.clear();
    }

    /// Commits a drawable on top of the existing ones and clears the redo history.
    pub fn add_shape(&mut self, shape: Shape) {
        self.undone.clear();
        self.shapes.push(shape);
    }

    /// Attempts to commit a drawable, enforcing a maximum count when `max` > 0.
    ///
    /// Returns `true` if the drawable was added, `false` if the limit would be exceeded.
    /// A rejected drawable leaves the redo history intact.
    pub fn try_add_shape(&mut self, shape: Shape, max: usize) -> bool {
        if max == 0 || self.shapes.len() < max {
            self.add_shape(shape);
            true
        } else {
            false
        }
    }

    /// Moves the most recently committed drawable onto the redo history.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.shapes.pop() {
            Some(shape) => {
                self.undone.push(shape);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone drawable back onto the canvas.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(shape) => {
                self.shapes.push(shape);
                true
            }
            None => false,
        }
    }

    /// Returns whether undo would change anything.
    pub fn can_undo(&self) -> bool {
        !self.shapes.is_empty()
    }

    /// Returns whether redo would change anything.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of drawables waiting in the redo history.
    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Color, FontDescriptor};

    fn stroke(x: i32) -> Shape {
        Shape::Stroke {
            points: vec![(x, x), (x + 1, x + 1)],
            color: Color {
                r: 1.0,
                g: 0.0,
                b: 0.0,
                a: 1.0,
            },
            thick: 2.0,
        }
    }

    fn stamp(glyph: &str) -> Shape {
        Shape::Stamp {
            x: 10,
            y: 10,
            glyph: glyph.to_string(),
            rotation: 90.0,
            size: 36.0,
            font_descriptor: FontDescriptor::default(),
        }
    }

    #[test]
    fn undo_and_redo_swap_the_last_drawable() {
        let mut frame = Frame::new();
        frame.add_shape(stroke(1));
        frame.add_shape(stroke(2));

        assert!(frame.undo());
        assert_eq!(frame.shapes, vec![stroke(1)]);
        assert_eq!(frame.undone_len(), 1);

        assert!(frame.redo());
        assert_eq!(frame.shapes, vec![stroke(1), stroke(2)]);
        assert!(!frame.can_redo());
    }

    #[test]
    fn undo_and_redo_are_noops_when_empty() {
        let mut frame = Frame::new();
        assert!(!frame.undo());
        assert!(!frame.redo());
        assert!(frame.shapes.is_empty());
        assert!(!frame.can_undo());
    }

    #[test]
    fn redo_order_is_last_undone_first() {
        let mut frame = Frame::new();
        frame.add_shape(stroke(1));
        frame.add_shape(stamp("🍕"));
        frame.add_shape(stroke(3));

        assert!(frame.undo());
        assert!(frame.undo());
        assert!(frame.redo());
        assert_eq!(frame.shapes, vec![stroke(1), stamp("🍕")]);
        assert_eq!(frame.undone_len(), 1);
    }

    #[test]
    fn committing_clears_redo_history() {
        let mut frame = Frame::new();
        frame.add_shape(stroke(1));
        frame.add_shape(stroke(2));
        frame.undo();
        assert!(frame.can_redo());

        frame.add_shape(stamp("✨"));
        assert!(!frame.can_redo());
        assert!(!frame.redo());
        assert_eq!(frame.shapes, vec![stroke(1), stamp("✨")]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut frame = Frame::new();
        frame.add_shape(stroke(1));
        frame.add_shape(stroke(2));
        frame.undo();
        frame.clear();
        assert!(!frame.can_undo());
        assert!(!frame.can_redo());
    }

    #[test]
    fn try_add_shape_respects_limit() {
        let mut frame = Frame::new();
        assert!(frame.try_add_shape(stroke(1), 1));
        assert!(!frame.try_add_shape(stroke(2), 1));
        assert_eq!(frame.shapes.len(), 1);
        assert!(frame.try_add_shape(stroke(3), 0));
    }

    #[test]
    fn rejected_shape_keeps_redo_history() {
        let mut frame = Frame::new();
        frame.add_shape(stroke(1));
        frame.add_shape(stroke(2));
        frame.undo();
        assert!(!frame.try_add_shape(stroke(3), 1));
        assert!(frame.can_redo());
    }
}
