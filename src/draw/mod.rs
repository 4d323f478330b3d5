//! Rendering primitives and the stroke history (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`DrawOperation`]: a committed freehand point or rectangle
//! - [`History`]: ordered log of operations that can be replayed onto a surface
//! - [`Surface`]: the rendering primitives the core draws with
//! - [`CairoSurface`]: in-memory Cairo implementation of [`Surface`]

pub mod color;
pub mod history;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use history::History;
pub use render::{CairoSurface, DrawError};
pub use shape::DrawOperation;
pub use surface::Surface;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
