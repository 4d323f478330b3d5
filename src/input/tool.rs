//! Drawing tool selection.

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. Rectangle and Airbrush are toggled on
/// from the controls; Freehand is what remains when neither toggle is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand brush - follows the pointer path (default)
    #[default]
    Freehand,
    /// Airbrush - stamps translucent squares, never recorded
    Airbrush,
    /// Rectangle outline - from corner to corner
    Rectangle,
}

impl Tool {
    /// Human-readable tool name for logs and status text.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Freehand => "Freehand",
            Tool::Airbrush => "Airbrush",
            Tool::Rectangle => "Rectangle",
        }
    }
}
