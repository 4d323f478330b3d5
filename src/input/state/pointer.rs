use crate::draw::{DrawOperation, Surface};
use crate::input::tool::Tool;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a primary button press.
    ///
    /// # Behavior
    /// - Rectangle tool: starts an in-progress rectangle at the pointer
    /// - Freehand tool: draws a dot and records the first point of a new path
    /// - Airbrush tool: stamps immediately (not recorded)
    ///
    /// A press while a drag is already in progress is ignored.
    pub fn on_pointer_press<S: Surface + ?Sized>(&mut self, surface: &mut S, x: i32, y: i32) {
        if self.is_pointer_held() {
            log::trace!("Ignoring press at ({x}, {y}) while a drag is in progress");
            return;
        }

        match self.tool() {
            Tool::Rectangle => {
                self.state = DrawingState::Rectangle {
                    start_x: x,
                    start_y: y,
                    end_x: x,
                    end_y: y,
                    color: self.current_color,
                };
            }
            Tool::Freehand => {
                surface.stroke_path(&[(x, y)], self.current_color, self.line_width());
                self.history.record(DrawOperation::Freehand {
                    x,
                    y,
                    color: self.current_color,
                    starts_path: true,
                });
                self.state = DrawingState::Stroking {
                    last_x: x,
                    last_y: y,
                };
            }
            Tool::Airbrush => {
                self.stamp_airbrush(surface, x, y);
                self.state = DrawingState::Stroking {
                    last_x: x,
                    last_y: y,
                };
            }
        }
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Not held: ignored
    /// - Rectangle tool: moves the rectangle's end point, replays the whole
    ///   history and strokes the live preview on top
    /// - Freehand tool: draws a segment from the previous point and records the point
    /// - Airbrush tool: stamps a translucent square (not recorded)
    pub fn on_pointer_motion<S: Surface + ?Sized>(&mut self, surface: &mut S, x: i32, y: i32) {
        let previous = match &mut self.state {
            DrawingState::Idle => return,
            DrawingState::Rectangle { end_x, end_y, .. } => {
                *end_x = x;
                *end_y = y;
                None
            }
            DrawingState::Stroking { last_x, last_y } => {
                let previous = (*last_x, *last_y);
                *last_x = x;
                *last_y = y;
                Some(previous)
            }
        };

        match (self.tool(), previous) {
            (Tool::Rectangle, None) => self.redraw(surface),
            (Tool::Freehand, Some(previous)) => {
                surface.stroke_path(&[previous, (x, y)], self.current_color, self.line_width());
                self.history.record(DrawOperation::Freehand {
                    x,
                    y,
                    color: self.current_color,
                    starts_path: false,
                });
            }
            (Tool::Airbrush, Some(_)) => self.stamp_airbrush(surface, x, y),
            (tool, _) => log::warn!("Drawing state does not match the {} tool", tool.label()),
        }
    }

    /// Processes a primary button release.
    ///
    /// Commits an in-progress rectangle (normalized, using the last position
    /// seen by a motion event) to the history; otherwise just ends the path.
    pub fn on_pointer_release<S: Surface + ?Sized>(&mut self, _surface: &mut S, x: i32, y: i32) {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Idle => {
                log::trace!("Ignoring release at ({x}, {y}) with nothing in progress");
            }
            DrawingState::Stroking { .. } => {
                log::trace!("Ended {} path at ({x}, {y})", self.tool().label());
            }
            DrawingState::Rectangle {
                start_x,
                start_y,
                end_x,
                end_y,
                color,
            } => {
                let rect = DrawOperation::normalized_rectangle(start_x, start_y, end_x, end_y, color);
                log::info!("Committed rectangle {:?}", rect.rect_bounds());
                self.history.record(rect);
            }
        }
    }

    /// Fills a translucent brush-sized square with its corner at the pointer.
    fn stamp_airbrush<S: Surface + ?Sized>(&self, surface: &mut S, x: i32, y: i32) {
        let size = i32::try_from(self.brush_width()).unwrap_or(i32::MAX);
        let color = self
            .current_color
            .with_alpha(self.current_color.a * self.airbrush_opacity);
        surface.fill_rect(x, y, size, size, color);
    }
}
