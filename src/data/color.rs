//! RGB colour triples.

use ratatui::style::Color;
use std::fmt;

/// An RGB colour as written in the input file.
///
/// Channels are stored as read. Values above 255 are accepted by the parser
/// and saturate when converted to a display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u16,
    /// Green channel.
    pub g: u16,
    /// Blue channel.
    pub b: u16,
}

impl Rgb {
    /// Black, the default point and axis colour.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a colour from its channels.
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Convert to a terminal colour.
    pub fn to_color(self) -> Color {
        Color::Rgb(saturate(self.r), saturate(self.g), saturate(self.b))
    }
}

fn saturate(channel: u16) -> u8 {
    channel.min(u16::from(u8::MAX)) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{},{}}}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.to_color()
    }
}
