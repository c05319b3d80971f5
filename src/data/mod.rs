//! Plot data representation.
//!
//! This module holds the values the parser produces: points and their
//! colours.

mod color;
mod point;

pub use color::Rgb;
pub use point::{Point, DEFAULT_POINT_SIZE, DEFAULT_Z_INDEX};
