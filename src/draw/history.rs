//! Stroke history for replaying committed drawing operations.

use super::color::Color;
use super::shape::DrawOperation;
use super::surface::Surface;

/// Ordered log of every committed drawing operation.
///
/// Insertion order is drawing order is replay order. The history is the only
/// thing that survives a clear-and-redraw cycle: anything drawn straight onto
/// the surface without being recorded (airbrush stamps, live previews) is gone
/// after the next [`History::replay_all`].
#[derive(Debug, Clone, Default)]
pub struct History {
    operations: Vec<DrawOperation>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Appends an operation. Always succeeds.
    pub fn record(&mut self, op: DrawOperation) {
        self.operations.push(op);
    }

    /// Clears the surface and redraws every recorded operation in order.
    ///
    /// Freehand points are joined into polylines; a point flagged
    /// `starts_path` opens a new polyline. Both freehand paths and rectangles
    /// are stroked with `brush_width`, the width current at replay time.
    ///
    /// Cost is linear in the history length, and this runs on every pointer
    /// move while a rectangle preview is live.
    pub fn replay_all<S: Surface + ?Sized>(&self, surface: &mut S, brush_width: f64) {
        surface.clear();

        let mut path: Vec<(i32, i32)> = Vec::new();
        let mut path_color: Option<Color> = None;

        for op in &self.operations {
            match op {
                DrawOperation::Freehand {
                    x,
                    y,
                    color,
                    starts_path,
                } => {
                    if *starts_path || path_color != Some(*color) {
                        // A color change mid-drag keeps the path connected
                        let carry = if *starts_path {
                            None
                        } else {
                            path.last().copied()
                        };
                        flush_path(surface, &mut path, path_color, brush_width);
                        path.extend(carry);
                        path_color = Some(*color);
                    }
                    path.push((*x, *y));
                }
                DrawOperation::Rectangle { color, .. } => {
                    flush_path(surface, &mut path, path_color, brush_width);
                    path_color = None;
                    if let Some((x, y, w, h)) = op.rect_bounds() {
                        surface.stroke_rect(x, y, w, h, *color, brush_width);
                    }
                }
            }
        }

        flush_path(surface, &mut path, path_color, brush_width);
    }

    /// Empties the history and clears the surface.
    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.operations.clear();
        surface.clear();
    }

    /// All recorded operations in drawing order.
    pub fn operations(&self) -> &[DrawOperation] {
        &self.operations
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

fn flush_path<S: Surface + ?Sized>(
    surface: &mut S,
    path: &mut Vec<(i32, i32)>,
    color: Option<Color>,
    width: f64,
) {
    if let Some(color) = color
        && !path.is_empty()
    {
        surface.stroke_path(path, color, width);
    }
    path.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::surface::recording::{RecordingSurface, SurfaceCall};

    fn point(x: i32, y: i32, starts_path: bool) -> DrawOperation {
        DrawOperation::Freehand {
            x,
            y,
            color: RED,
            starts_path,
        }
    }

    #[test]
    fn replay_connects_points_of_one_drag() {
        let mut history = History::new();
        history.record(point(0, 0, true));
        history.record(point(5, 5, false));
        history.record(point(10, 0, false));

        let mut surface = RecordingSurface::new(100, 100);
        history.replay_all(&mut surface, 4.0);

        assert_eq!(
            surface.since_last_clear(),
            &[SurfaceCall::StrokePath {
                points: vec![(0, 0), (5, 5), (10, 0)],
                color: RED,
                width: 4.0,
            }]
        );
    }

    #[test]
    fn new_drag_starts_fresh_path() {
        let mut history = History::new();
        history.record(point(0, 0, true));
        history.record(point(5, 5, false));
        history.record(point(50, 50, true));
        history.record(point(60, 60, false));

        let mut surface = RecordingSurface::new(100, 100);
        history.replay_all(&mut surface, 2.0);

        let strokes: Vec<_> = surface
            .since_last_clear()
            .iter()
            .map(|call| match call {
                SurfaceCall::StrokePath { points, .. } => points.clone(),
                other => panic!("unexpected call {other:?}"),
            })
            .collect();
        assert_eq!(strokes, vec![vec![(0, 0), (5, 5)], vec![(50, 50), (60, 60)]]);
    }

    #[test]
    fn color_change_mid_drag_stays_connected() {
        let mut history = History::new();
        history.record(point(0, 0, true));
        history.record(point(5, 5, false));
        history.record(DrawOperation::Freehand {
            x: 10,
            y: 10,
            color: BLUE,
            starts_path: false,
        });

        let mut surface = RecordingSurface::new(100, 100);
        history.replay_all(&mut surface, 2.0);

        assert_eq!(
            surface.since_last_clear(),
            &[
                SurfaceCall::StrokePath {
                    points: vec![(0, 0), (5, 5)],
                    color: RED,
                    width: 2.0,
                },
                SurfaceCall::StrokePath {
                    points: vec![(5, 5), (10, 10)],
                    color: BLUE,
                    width: 2.0,
                },
            ]
        );
    }

    #[test]
    fn rectangles_use_width_at_replay_time() {
        let mut history = History::new();
        history.record(DrawOperation::normalized_rectangle(40, 40, 10, 20, BLUE));

        let mut surface = RecordingSurface::new(100, 100);
        history.replay_all(&mut surface, 2.0);
        history.replay_all(&mut surface, 12.0);

        assert_eq!(
            surface.since_last_clear(),
            &[SurfaceCall::StrokeRect {
                x: 10,
                y: 20,
                w: 30,
                h: 20,
                color: BLUE,
                width: 12.0,
            }]
        );
    }

    #[test]
    fn replay_preserves_insertion_order() {
        let mut history = History::new();
        history.record(point(1, 1, true));
        history.record(DrawOperation::normalized_rectangle(0, 0, 10, 10, BLUE));
        history.record(point(2, 2, true));

        let mut surface = RecordingSurface::new(100, 100);
        history.replay_all(&mut surface, 2.0);

        let kinds: Vec<&str> = surface
            .since_last_clear()
            .iter()
            .map(|call| match call {
                SurfaceCall::StrokePath { .. } => "path",
                SurfaceCall::StrokeRect { .. } => "rect",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["path", "rect", "path"]);
    }

    #[test]
    fn reset_empties_history_and_clears() {
        let mut history = History::new();
        history.record(point(1, 1, true));
        history.record(DrawOperation::normalized_rectangle(0, 0, 10, 10, BLUE));

        let mut surface = RecordingSurface::new(100, 100);
        history.reset(&mut surface);
        assert!(history.is_empty());
        assert!(matches!(surface.calls.last(), Some(SurfaceCall::Clear(_))));

        history.replay_all(&mut surface, 2.0);
        assert!(surface.since_last_clear().is_empty());
    }
}
