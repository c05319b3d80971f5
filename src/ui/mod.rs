//! User interface rendering.

mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::render::{DisplayList, PlotCanvas};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

pub use formatters::format_number;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_plot(f, chunks[0], app, &colors);
    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}

fn draw_plot(f: &mut Frame<'_>, area: Rect, app: &mut App, colors: &ThemeColors) {
    let block = Block::default()
        .title(format!(" Fileplot - {} ", app.file_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title_style(Style::default().fg(colors.heading));

    let inner = block.inner(area);
    let mut list = DisplayList::new(app.surface_bounds(inner.width, inner.height));
    app.scene.paint(&mut list);

    let canvas = PlotCanvas::new(&list)
        .block(block)
        .background(colors.paper);
    f.render_widget(canvas, area);
}
