//! Layer-shell window hosting the sketchbook: event loop, protocol handlers
//! and shared-memory rendering.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
