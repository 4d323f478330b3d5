//! Cairo-backed drawing surface.

use super::color::Color;
use super::surface::Surface;
use crate::export::ExportError;
use crate::util::Rect;
use thiserror::Error;

/// Errors that can occur while setting up a drawing surface.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Failed to create drawing surface: {0}")]
    Cairo(#[from] cairo::Error),
}

/// In-memory ARGB32 canvas rendered with Cairo.
///
/// A fresh Cairo context is created per drawing call so the underlying image
/// surface stays exclusively owned and its pixels can be read back at any time.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
}

impl CairoSurface {
    /// Creates a transparent canvas of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, DrawError> {
        if width <= 0 || height <= 0 {
            return Err(DrawError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { surface })
    }

    /// Returns a copy of the raw pixel buffer (premultiplied ARGB32, row-major).
    pub fn pixels(&mut self) -> Vec<u8> {
        self.surface.flush();
        match self.surface.data() {
            Ok(data) => data.to_vec(),
            Err(err) => {
                log::warn!("Failed to borrow canvas pixels: {err}");
                Vec::new()
            }
        }
    }

    /// Returns true if any pixel has been painted.
    pub fn has_pixels(&mut self) -> bool {
        self.pixels().iter().any(|byte| *byte != 0)
    }

    /// Returns the alpha channel of the pixel at (x, y), or 0 when out of bounds.
    pub fn alpha_at(&mut self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return 0;
        }
        let stride = self.surface.stride() as usize;
        let pixels = self.pixels();
        // ARGB32 is stored native-endian; alpha is the high byte of the u32
        let offset = y as usize * stride + x as usize * 4;
        pixels
            .get(offset..offset + 4)
            .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) >> 24)
            .map_or(0, |alpha| alpha as u8)
    }

    fn context(&self) -> Option<cairo::Context> {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                log::warn!("Failed to create Cairo context: {err}");
                None
            }
        }
    }
}

impl Surface for CairoSurface {
    fn width(&self) -> i32 {
        self.surface.width()
    }

    fn height(&self) -> i32 {
        self.surface.height()
    }

    fn clear_region(&mut self, region: Rect) {
        let Some(ctx) = self.context() else {
            return;
        };
        ctx.set_operator(cairo::Operator::Clear);
        ctx.rectangle(
            region.x as f64,
            region.y as f64,
            region.width as f64,
            region.height as f64,
        );
        let _ = ctx.fill();
    }

    fn stroke_path(&mut self, points: &[(i32, i32)], color: Color, width: f64) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        let Some(ctx) = self.context() else {
            return;
        };

        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.set_line_width(width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        ctx.move_to(x0 as f64, y0 as f64);
        if rest.is_empty() {
            // Zero-length segment so the round cap leaves a dot
            ctx.line_to(x0 as f64, y0 as f64);
        }
        for &(x, y) in rest {
            ctx.line_to(x as f64, y as f64);
        }

        let _ = ctx.stroke();
    }

    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, width: f64) {
        let Some(ctx) = self.context() else {
            return;
        };

        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.set_line_width(width);
        ctx.set_line_join(cairo::LineJoin::Miter);

        // Normalize in f64 so extreme corners cannot overflow
        let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);
        ctx.rectangle(x.min(x + w), y.min(y + h), w.abs(), h.abs());
        let _ = ctx.stroke();
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let Some(ctx) = self.context() else {
            return;
        };

        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.rectangle(x as f64, y as f64, w as f64, h as f64);
        let _ = ctx.fill();
    }

    fn export_png(&mut self) -> Result<Vec<u8>, ExportError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface
            .write_to_png(&mut buffer)
            .map_err(|err| ExportError::Encode(err.to_string()))?;
        log::debug!("Encoded canvas as PNG ({} bytes)", buffer.len());
        Ok(buffer)
    }
}
