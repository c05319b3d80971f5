//! Pixel-space geometry.

/// A position on the render surface. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position, measured from the top.
    pub y: f64,
}

impl Pixel {
    /// Create a pixel position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, never negative.
    pub width: f64,
    /// Height, never negative.
    pub height: f64,
}

impl PixelRect {
    /// Create a rectangle; negative extents are clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink by per-side margins.
    pub fn inset(&self, margins: &Margins) -> Self {
        Self::new(
            self.x + margins.left,
            self.y + margins.top,
            self.width - margins.left - margins.right,
            self.height - margins.top - margins.bottom,
        )
    }
}

/// Pixel insets between the surface edge and the plotted rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Left inset.
    pub left: f64,
    /// Right inset.
    pub right: f64,
    /// Top inset.
    pub top: f64,
    /// Bottom inset.
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 20.0,
            right: 20.0,
            top: 30.0,
            bottom: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_applies_each_margin() {
        let rect = PixelRect::new(0.0, 0.0, 200.0, 100.0).inset(&Margins::default());
        assert_eq!(rect, PixelRect::new(20.0, 30.0, 160.0, 50.0));
        assert_eq!(rect.right(), 180.0);
        assert_eq!(rect.bottom(), 80.0);
    }

    #[test]
    fn inset_of_tiny_surface_collapses_to_empty() {
        let rect = PixelRect::new(0.0, 0.0, 10.0, 10.0).inset(&Margins::default());
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }
}
