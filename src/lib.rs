//! Fun Sketchbook: a freehand sketchpad with emoji stamps.
//!
//! The binary opens a Wayland layer-shell window; the modules below are also
//! exposed so the schema dump and the integration tests can reuse the config,
//! drawing, input and export code without a compositor.

pub mod backend;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
