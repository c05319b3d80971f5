//! Layout configuration constants for the plot view.

use crate::plot::Margins;

/// Configuration for axis geometry, in surface pixels.
#[derive(Debug, Clone)]
pub struct AxisLayoutConfig {
    /// Insets between the surface edge and the plotted rectangle.
    pub margins: Margins,
    /// Stroke width of the axis lines and tick marks.
    pub stroke_width: f64,
    /// Length of each tick mark.
    pub tick_length: f64,
    /// Offset of a Y tick label from the axis line at its tick.
    pub y_label_offset: (f64, f64),
    /// Offset of an X tick label from its tick on the axis line.
    pub x_label_offset: (f64, f64),
}

impl Default for AxisLayoutConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            stroke_width: 2.0,
            tick_length: 5.0,
            y_label_offset: (10.0, 3.0),
            x_label_offset: (-3.0, 15.0),
        }
    }
}

/// Configuration for mapping terminal cells to surface pixels.
#[derive(Debug, Clone)]
pub struct CanvasLayoutConfig {
    /// Pixels per terminal column.
    pub dots_per_column: u16,
    /// Pixels per terminal row.
    pub dots_per_row: u16,
}

impl Default for CanvasLayoutConfig {
    fn default() -> Self {
        Self {
            dots_per_column: 2, // Braille cells are 2x4 dots
            dots_per_row: 4,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the axis.
    pub axis: AxisLayoutConfig,
    /// Configuration for the canvas.
    pub canvas: CanvasLayoutConfig,
}
