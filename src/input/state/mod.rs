mod actions;
mod core;
mod pointer;
mod render;

pub use core::{BRUSH_STEP, DrawingState, InputState, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
