use crate::draw::Surface;
use crate::input::events::Action;

use super::{BRUSH_STEP, DrawingState, InputState, MIN_BRUSH_WIDTH};

impl InputState {
    /// Handle a toolbar action.
    ///
    /// `Save` only marks an export as pending; the host retrieves it with
    /// [`InputState::take_pending_export`] because writing the file needs the
    /// export target, which the input state does not own.
    pub fn handle_action<S: Surface + ?Sized>(&mut self, action: Action, surface: &mut S) {
        match action {
            Action::IncreaseBrush => {
                self.set_brush_width(self.brush_width().saturating_add(BRUSH_STEP));
            }
            Action::DecreaseBrush => {
                if self.brush_width() > MIN_BRUSH_WIDTH {
                    self.set_brush_width(self.brush_width().saturating_sub(BRUSH_STEP));
                }
            }
            Action::ToggleRectangle => {
                let enabled = self.toggle_rectangle();
                log::info!("Rectangle tool {}", if enabled { "enabled" } else { "disabled" });
            }
            Action::ToggleAirbrush => {
                let enabled = self.toggle_airbrush();
                log::info!("Airbrush {}", if enabled { "enabled" } else { "disabled" });
            }
            Action::Clear => {
                self.state = DrawingState::Idle;
                self.history.reset(surface);
                log::info!("Canvas cleared");
            }
            Action::Save => {
                log::debug!("Export pending for host");
                self.request_export();
            }
        }
    }
}
