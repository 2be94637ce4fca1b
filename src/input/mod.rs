//! Input handling and tool state machine.
//!
//! Translates backend keyboard and pointer events into sketchbook operations:
//! pen strokes, stamp placement, history navigation, the custom stamp prompt
//! and export requests.

pub mod events;
pub mod modifiers;
pub mod preview;
pub mod state;
pub mod tool;

pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use preview::{PreviewKind, ToolPreview};
pub use state::{DrawingState, InputState, SketchSettings};
pub use tool::{PenPreset, Tool};
