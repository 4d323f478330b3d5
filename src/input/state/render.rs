use crate::draw::{DrawOperation, Surface};

use super::{DrawingState, InputState};

impl InputState {
    /// Returns the rectangle currently being dragged, normalized.
    ///
    /// # Returns
    /// - `Some(DrawOperation::Rectangle)` while the pointer is held in rectangle mode
    /// - `None` otherwise
    pub fn in_progress_rectangle(&self) -> Option<DrawOperation> {
        if let DrawingState::Rectangle {
            start_x,
            start_y,
            end_x,
            end_y,
            color,
        } = &self.state
        {
            Some(DrawOperation::normalized_rectangle(
                *start_x, *start_y, *end_x, *end_y, *color,
            ))
        } else {
            None
        }
    }

    /// Strokes the in-progress rectangle on top of whatever the surface shows.
    ///
    /// # Returns
    /// `true` if a preview was drawn, `false` when no rectangle is being dragged
    pub fn render_preview<S: Surface + ?Sized>(&self, surface: &mut S) -> bool {
        if let DrawingState::Rectangle {
            start_x,
            start_y,
            end_x,
            end_y,
            color,
        } = &self.state
        {
            // Raw drag extents; the surface normalizes negative sizes
            surface.stroke_rect(
                *start_x,
                *start_y,
                end_x.saturating_sub(*start_x),
                end_y.saturating_sub(*start_y),
                *color,
                self.line_width(),
            );
            true
        } else {
            false
        }
    }

    /// Clears the surface, replays the history and draws the live preview.
    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.history.replay_all(surface, self.line_width());
        self.render_preview(surface);
    }
}
