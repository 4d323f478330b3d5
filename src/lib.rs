//! Freehand and rectangle painting canvas.
//!
//! The library holds the whole drawing core: the stroke history and its
//! replay, the tool state machine driven by pointer events, the Cairo canvas,
//! and PNG export. The `paintbox` binary wires it to a scripted event source.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
