//! A surface that records draw calls.

use super::Surface;
use crate::data::Rgb;
use crate::plot::{Pixel, PixelRect};

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// See [`Surface::draw_line`].
    Line {
        from: Pixel,
        to: Pixel,
        color: Rgb,
        width: f64,
    },
    /// See [`Surface::fill_circle`].
    Circle {
        center: Pixel,
        radius: f64,
        color: Rgb,
    },
    /// See [`Surface::draw_text`].
    Text { at: Pixel, text: String, color: Rgb },
}

/// Draw calls in the order they were made.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    bounds: PixelRect,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty list for a surface of the given bounds.
    pub fn new(bounds: PixelRect) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
        }
    }

    /// Recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for DisplayList {
    fn bounds(&self) -> PixelRect {
        self.bounds
    }

    fn draw_line(&mut self, from: Pixel, to: Pixel, color: Rgb, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Pixel, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, at: Pixel, text: &str, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            at,
            text: text.to_string(),
            color,
        });
    }
}
