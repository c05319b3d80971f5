//! Plot model: geometry, the axis and the draw-order registry.

mod axis;
mod geometry;
mod scene;

pub use axis::AxisModel;
pub use geometry::{Margins, Pixel, PixelRect};
pub use scene::{AxisId, DrawableItem, ItemKind, Scene};
