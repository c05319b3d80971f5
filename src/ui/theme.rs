//! Color theme for the UI.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Plot background; light so the default black points stay visible.
    pub paper: Color,
    /// Title text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar foreground color.
    pub keymap_fg: Color,
}

impl Default for ThemeColors {
    // Gruvbox light
    fn default() -> Self {
        Self {
            paper: Color::Rgb(251, 245, 234),
            heading: Color::Rgb(175, 58, 3),
            border: Color::Rgb(213, 196, 161),
            status_fg: Color::Rgb(60, 56, 54),
            status_bg: Color::Rgb(235, 219, 178),
            keymap_fg: Color::Rgb(121, 116, 14),
        }
    }
}
