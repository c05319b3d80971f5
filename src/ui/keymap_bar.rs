//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(crate) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new("q/Esc:quit")
        .style(Style::default().fg(colors.keymap_fg).bg(colors.paper));

    f.render_widget(paragraph, area);
}
