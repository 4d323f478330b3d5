//! Utility functions for colors and rectangle geometry.
//!
//! This module provides:
//! - Color name and hex string parsing (constants live in draw::color)
//! - Corner normalization for rectangles dragged in any direction
//! - A small axis-aligned [`Rect`] used for surface regions

use crate::draw::{Color, color::*};

// ============================================================================
// Color Parsing
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and event scripts.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a `#rrggbb` or `#rgb` hex string, the format color pickers report.
///
/// The leading `#` is optional. Returns `None` for anything else.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let (r, g, b) = match digits.len() {
        6 => (
            u8::from_str_radix(&digits[0..2], 16).ok()?,
            u8::from_str_radix(&digits[2..4], 16).ok()?,
            u8::from_str_radix(&digits[4..6], 16).ok()?,
        ),
        3 => {
            // #abc expands to #aabbcc
            let expand = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v * 17);
            (
                expand(&digits[0..1])?,
                expand(&digits[1..2])?,
                expand(&digits[2..3])?,
            )
        }
        _ => return None,
    };

    Some(Color::from_rgb8(r, g, b))
}

/// Parses either a named color or a hex string.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    name_to_color(value).or_else(|| hex_to_color(value))
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Normalizes two drag corners into `(x, y, width, height)` with non-negative size.
///
/// Dragging up-left from (50, 50) to (10, 10) yields the same rectangle as
/// dragging down-right from (10, 10) to (50, 50). Extents wider than
/// `i32::MAX` saturate.
pub fn normalize_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32, i32) {
    let x = x1.min(x2);
    let y = y1.min(y2);
    let width = x1.abs_diff(x2).min(i32::MAX as u32) as i32;
    let height = y1.abs_diff(y2).min(i32::MAX as u32) as i32;
    (x, y, width, height)
}

/// Axis-aligned rectangle helper used for surface regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }
}
