//! Rendering.
//!
//! The plot model draws through the [`Surface`] trait. [`DisplayList`]
//! records those calls, and [`PlotCanvas`] replays a recording onto a
//! ratatui canvas.

mod canvas;
mod display_list;

pub use canvas::{disk_dots, PlotCanvas};
pub use display_list::{DisplayList, DrawCommand};

use crate::data::Rgb;
use crate::plot::{Pixel, PixelRect};

/// Drawing primitives offered by a render target.
///
/// Coordinates are pixels with the origin at the top-left of [`bounds`].
///
/// [`bounds`]: Surface::bounds
pub trait Surface {
    /// The drawable rectangle.
    fn bounds(&self) -> PixelRect;

    /// Draw a straight line `width` pixels wide.
    fn draw_line(&mut self, from: Pixel, to: Pixel, color: Rgb, width: f64);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Pixel, radius: f64, color: Rgb);

    /// Draw a text label starting at `at`.
    fn draw_text(&mut self, at: Pixel, text: &str, color: Rgb);
}
