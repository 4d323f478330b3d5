//! Recorded drawing operations.

use super::color::Color;
use crate::util;

/// A committed drawing operation, as stored in the [`History`](super::History).
///
/// Brush width is deliberately absent: it is a tool-state property read at
/// replay time, so changing the brush size re-strokes every recorded shape.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOperation {
    /// One point sampled along a pointer drag.
    Freehand {
        /// X coordinate on the surface
        x: i32,
        /// Y coordinate on the surface
        y: i32,
        /// Stroke color when the point was sampled
        color: Color,
        /// First point of a drag; replay starts a fresh path here
        starts_path: bool,
    },
    /// Finalized rectangle outline.
    Rectangle {
        /// First corner X coordinate
        start_x: i32,
        /// First corner Y coordinate
        start_y: i32,
        /// Opposite corner X coordinate
        end_x: i32,
        /// Opposite corner Y coordinate
        end_y: i32,
        /// Outline color
        color: Color,
    },
}

impl DrawOperation {
    /// Builds a rectangle whose corners are reordered so `start <= end` on both axes.
    pub fn normalized_rectangle(x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> Self {
        DrawOperation::Rectangle {
            start_x: x1.min(x2),
            start_y: y1.min(y2),
            end_x: x1.max(x2),
            end_y: y1.max(y2),
            color,
        }
    }

    /// Returns `(x, y, width, height)` for rectangles, normalizing any corner order.
    pub fn rect_bounds(&self) -> Option<(i32, i32, i32, i32)> {
        match self {
            DrawOperation::Rectangle {
                start_x,
                start_y,
                end_x,
                end_y,
                ..
            } => Some(util::normalize_corners(*start_x, *start_y, *end_x, *end_y)),
            DrawOperation::Freehand { .. } => None,
        }
    }
}
