mod actions;
mod core;
mod mouse;
mod render;

pub use core::{DrawingState, InputState, MAX_THICKNESS, MIN_THICKNESS, SketchSettings};
