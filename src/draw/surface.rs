//! Drawing surface abstraction.

use super::color::Color;
use crate::export::ExportError;
use crate::util::Rect;

/// The pixel canvas the drawing core renders onto.
///
/// These calls are the only rendering primitives the core uses; the input
/// handlers and the history replay never reach past them.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> i32;

    /// Surface height in pixels.
    fn height(&self) -> i32;

    /// Resets a region to fully transparent pixels.
    fn clear_region(&mut self, region: Rect);

    /// Resets the whole surface to fully transparent pixels.
    fn clear(&mut self) {
        if let Some(full) = Rect::new(0, 0, self.width(), self.height()) {
            self.clear_region(full);
        }
    }

    /// Strokes a polyline through `points` with round caps and joins.
    ///
    /// A single point is stroked as a dot of diameter `width`.
    fn stroke_path(&mut self, points: &[(i32, i32)], color: Color, width: f64);

    /// Strokes a rectangle outline. Negative width/height are normalized.
    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, width: f64);

    /// Fills a rectangle, blending with the color's alpha.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    /// Encodes the current pixels as PNG bytes.
    fn export_png(&mut self) -> Result<Vec<u8>, ExportError>;
}
