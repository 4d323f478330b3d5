//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::{Color, History};
use crate::input::tool::Tool;

/// Smallest brush width the controls allow.
pub const MIN_BRUSH_WIDTH: u32 = 2;

/// Largest brush width the controls allow.
pub const MAX_BRUSH_WIDTH: u32 = 512;

/// Amount one increase/decrease action changes the brush width by.
pub const BRUSH_STEP: u32 = 2;

/// Current pointer interaction state.
///
/// Tracks whether the primary button is held and, for the rectangle tool,
/// the rectangle being dragged. State transitions occur on pointer events.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Pointer not held - waiting for a press
    Idle,
    /// Pointer held with the freehand brush or airbrush
    Stroking {
        /// X coordinate of the previous sample
        last_x: i32,
        /// Y coordinate of the previous sample
        last_y: i32,
    },
    /// Pointer held with the rectangle tool; not yet in the history
    Rectangle {
        /// X coordinate where the pointer was pressed
        start_x: i32,
        /// Y coordinate where the pointer was pressed
        start_y: i32,
        /// Latest pointer X coordinate
        end_x: i32,
        /// Latest pointer Y coordinate
        end_y: i32,
        /// Color captured at press time
        color: Color,
    },
}

/// Main input state containing all drawing session state.
///
/// Holds the stroke history, the brush parameters and the pointer state
/// machine. Every pointer and toolbar handler takes `&mut self` together with
/// the surface it draws on.
pub struct InputState {
    /// Committed freehand points and rectangles
    pub history: History,
    /// Current stroke color (the color picker value)
    pub current_color: Color,
    /// Opacity of airbrush stamps (0.0-1.0)
    pub airbrush_opacity: f64,
    /// Current pointer state machine
    pub state: DrawingState,
    /// Brush width in pixels, within MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH
    brush_width: u32,
    /// Active tool
    tool: Tool,
    /// Export requested by the save action, waiting for the host
    pending_export: bool,
}

impl InputState {
    /// Creates an InputState with the freehand tool active.
    ///
    /// # Arguments
    /// * `color` - Initial stroke color
    /// * `brush_width` - Initial brush width in pixels (clamped to the allowed range)
    /// * `airbrush_opacity` - Alpha applied to airbrush stamps
    pub fn with_defaults(color: Color, brush_width: u32, airbrush_opacity: f64) -> Self {
        Self {
            history: History::new(),
            current_color: color,
            airbrush_opacity,
            state: DrawingState::Idle,
            brush_width: brush_width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH),
            tool: Tool::default(),
            pending_export: false,
        }
    }

    /// Creates an InputState from the drawing section of the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.default_brush_width,
            config.drawing.airbrush_opacity,
        )
    }

    /// Current brush width in pixels.
    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    /// Current brush width as a stroke line width.
    pub fn line_width(&self) -> f64 {
        self.brush_width as f64
    }

    /// Sets the brush width, clamped to the allowed range.
    pub fn set_brush_width(&mut self, width: u32) {
        self.brush_width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
        log::debug!("Brush width set to {}px", self.brush_width);
    }

    /// Text for the brush size indicator next to the +/- controls.
    pub fn brush_size_label(&self) -> String {
        self.brush_width.to_string()
    }

    /// Sets the stroke color used by subsequent strokes.
    ///
    /// Strokes already in the history keep the color they were drawn with.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Returns the active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Returns whether the rectangle toggle is on.
    pub fn rectangle_enabled(&self) -> bool {
        self.tool == Tool::Rectangle
    }

    /// Returns whether the airbrush toggle is on.
    pub fn airbrush_enabled(&self) -> bool {
        self.tool == Tool::Airbrush
    }

    /// Toggles the rectangle tool. Turning it on turns the airbrush off.
    ///
    /// Returns whether the rectangle tool is now enabled.
    pub fn toggle_rectangle(&mut self) -> bool {
        let next = if self.rectangle_enabled() {
            Tool::Freehand
        } else {
            Tool::Rectangle
        };
        self.set_tool(next);
        self.rectangle_enabled()
    }

    /// Toggles the airbrush. Turning it on turns the rectangle tool off.
    ///
    /// Returns whether the airbrush is now enabled.
    pub fn toggle_airbrush(&mut self) -> bool {
        let next = if self.airbrush_enabled() {
            Tool::Freehand
        } else {
            Tool::Airbrush
        };
        self.set_tool(next);
        self.airbrush_enabled()
    }

    fn set_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }

        // A drag never carries over to another tool; an uncommitted rectangle is dropped
        if !matches!(self.state, DrawingState::Idle) {
            log::debug!("Dropping in-progress {} drag", self.tool.label());
            self.state = DrawingState::Idle;
        }

        log::debug!("Switched tool from {} to {}", self.tool.label(), tool.label());
        self.tool = tool;
    }

    /// Returns whether the primary button is currently held.
    pub fn is_pointer_held(&self) -> bool {
        !matches!(self.state, DrawingState::Idle)
    }

    /// Takes and clears a pending export request.
    ///
    /// The host calls this after dispatching an action and performs the export
    /// with access to the surface and the export target.
    pub fn take_pending_export(&mut self) -> bool {
        std::mem::take(&mut self.pending_export)
    }

    pub(super) fn request_export(&mut self) {
        self.pending_export = true;
    }
}
