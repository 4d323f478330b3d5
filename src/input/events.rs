//! Control actions issued by the toolbar.

use serde::Deserialize;

/// A control button press.
///
/// Pointer input goes through the `on_pointer_*` handlers instead; actions
/// cover everything else the toolbar exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Grow the brush by one step
    IncreaseBrush,
    /// Shrink the brush by one step (never below the minimum)
    DecreaseBrush,
    /// Switch the rectangle tool on or off
    ToggleRectangle,
    /// Switch the airbrush on or off
    ToggleAirbrush,
    /// Erase the canvas and the stroke history
    Clear,
    /// Request an image export
    Save,
}
