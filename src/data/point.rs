//! Parsed data points.

use super::Rgb;

/// Point size used when the file gives no `[S]` specifier.
pub const DEFAULT_POINT_SIZE: u32 = 7;

/// Draw-order key shared by points and the axis unless set otherwise.
pub const DEFAULT_Z_INDEX: i32 = 100;

/// A single point read from the input file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate in data units.
    pub x: f64,
    /// Y coordinate in data units.
    pub y: f64,
    /// Fill colour.
    pub color: Rgb,
    /// Diameter in pixels.
    pub size: u32,
    /// Draw-order key; higher values are drawn later.
    pub z_index: i32,
}

impl Point {
    /// Create a point with the default colour, size and z-index.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            color: Rgb::BLACK,
            size: DEFAULT_POINT_SIZE,
            z_index: DEFAULT_Z_INDEX,
        }
    }

    /// Set the fill colour.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Set the diameter.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the draw-order key.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}
