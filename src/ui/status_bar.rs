//! Status bar UI component.

use super::formatters::format_number;
use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(crate) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let axis = app.scene.axis();
    let text = format!(
        "{} | {} points | x 0..{} step {} | y 0..{} step {}",
        app.status,
        format_number(app.scene.point_count()),
        axis.x_max,
        axis.x_scale,
        axis.y_max,
        axis.y_scale,
    );

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
