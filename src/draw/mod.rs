//! Rendering primitives and drawable definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the sketchpad:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: The two drawable kinds (pen strokes and placed stamps)
//! - [`Frame`]: Committed drawables plus the undo/redo history
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod font;
pub mod frame;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
pub use frame::Frame;
pub use render::{
    render_background, render_brush_indicator, render_glyph, render_shape, render_shapes,
    render_stroke_borrowed,
};
pub use shape::Shape;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
