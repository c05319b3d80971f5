//! Ratatui canvas adapter for a [`DisplayList`].
//!
//! One Braille dot is one surface pixel. The canvas measures Y upward, so
//! every coordinate is flipped on the way in.

use super::{DisplayList, DrawCommand, Surface};
use crate::plot::{Pixel, PixelRect};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        canvas::{Canvas, Context, Line, Points},
        Block, Widget,
    },
};

/// Widget that replays a display list.
#[derive(Debug, Clone)]
pub struct PlotCanvas<'a> {
    list: &'a DisplayList,
    block: Option<Block<'a>>,
    background: Color,
}

impl<'a> PlotCanvas<'a> {
    /// Create a widget for `list`.
    pub fn new(list: &'a DisplayList) -> Self {
        Self {
            list,
            block: None,
            background: Color::Reset,
        }
    }

    /// Surround the canvas with a block.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the canvas background.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}

impl Widget for PlotCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list = self.list;
        let bounds = list.bounds();

        let mut canvas = Canvas::default();
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }

        canvas
            .marker(Marker::Braille)
            .background_color(self.background)
            .x_bounds(dot_span(bounds.x, bounds.width))
            .y_bounds(dot_span(bounds.y, bounds.height))
            .paint(|ctx| {
                for command in list.commands() {
                    paint_command(ctx, command, &bounds);
                }
            })
            .render(area, buf);
    }
}

// Map `len` pixels starting at `start` onto dot centres.
fn dot_span(start: f64, len: f64) -> [f64; 2] {
    [start, start + (len - 1.0).max(1.0)]
}

fn flip(bounds: &PixelRect, y: f64) -> f64 {
    bounds.y + bounds.bottom() - 1.0 - y
}

fn paint_command(ctx: &mut Context<'_>, command: &DrawCommand, bounds: &PixelRect) {
    match command {
        DrawCommand::Line {
            from,
            to,
            color,
            width,
        } => {
            for (dx, dy) in stroke_offsets(*from, *to, *width) {
                ctx.draw(&Line::new(
                    from.x + dx,
                    flip(bounds, from.y + dy),
                    to.x + dx,
                    flip(bounds, to.y + dy),
                    color.to_color(),
                ));
            }
        },
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => {
            let coords: Vec<(f64, f64)> = disk_dots(*center, *radius, bounds)
                .into_iter()
                .map(|p| (p.x, flip(bounds, p.y)))
                .collect();
            ctx.draw(&Points {
                coords: &coords,
                color: color.to_color(),
            });
        },
        DrawCommand::Text { at, text, color } => {
            ctx.print(
                at.x,
                flip(bounds, at.y),
                TextLine::styled(text.clone(), Style::default().fg(color.to_color())),
            );
        },
    }
}

/// Offsets of the parallel 1-dot strokes that make up a wide line.
fn stroke_offsets(from: Pixel, to: Pixel, width: f64) -> Vec<(f64, f64)> {
    let strokes = width.round().max(1.0) as usize;
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = dx.hypot(dy);
    let normal = if len > 0.0 {
        (-dy / len, dx / len)
    } else {
        (1.0, 0.0)
    };

    let center = (strokes as f64 - 1.0) / 2.0;
    (0..strokes)
        .map(|k| {
            let t = k as f64 - center;
            (normal.0 * t, normal.1 * t)
        })
        .collect()
}

/// Pixels covered by a filled circle, clipped to `bounds`. A radius below 1
/// covers the centre only.
pub fn disk_dots(center: Pixel, radius: f64, bounds: &PixelRect) -> Vec<Pixel> {
    let r = radius.max(0.0);
    let reach = r.floor();
    let (dy_lo, dy_hi) = clip_reach(reach, center.y, bounds.y, bounds.bottom());
    let (dx_lo, dx_hi) = clip_reach(reach, center.x, bounds.x, bounds.right());
    let mut dots = Vec::new();

    for dy in dy_lo..=dy_hi {
        for dx in dx_lo..=dx_hi {
            let (fx, fy) = (dx as f64, dy as f64);
            if fx * fx + fy * fy <= r * r {
                dots.push(center.offset(fx, fy));
            }
        }
    }

    dots
}

// Offsets in `-reach..=reach` whose dot lands in `[start, end)`.
fn clip_reach(reach: f64, center: f64, start: f64, end: f64) -> (i64, i64) {
    let lo = (-reach).max((start - center).ceil());
    let hi = reach.min((end - center).ceil() - 1.0);
    (lo as i64, hi as i64)
}
