//! Input handling and tool state machine.
//!
//! This module translates pointer events and toolbar actions into drawing
//! calls. It owns the current tool, the brush parameters (color, width), the
//! in-progress rectangle, and the stroke history.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::Action;
pub use state::{BRUSH_STEP, DrawingState, InputState, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
pub use tool::Tool;
