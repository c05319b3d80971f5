//! Axis bounds, tick scale and data-to-pixel mapping.

use super::{Pixel, PixelRect};
use crate::data::{Point, Rgb, DEFAULT_Z_INDEX};
use crate::render::Surface;
use crate::util::AxisLayoutConfig;

/// Upper bound on the number of ticks per axis.
const MAX_TICKS: u32 = 20;

/// The single axis every point is plotted against.
#[derive(Debug, Clone)]
pub struct AxisModel {
    /// Largest X value on the axis, at least 1.
    pub x_max: u32,
    /// Largest Y value on the axis, at least 1.
    pub y_max: u32,
    /// Interval between X ticks, at least 1.
    pub x_scale: u32,
    /// Interval between Y ticks, at least 1.
    pub y_scale: u32,
    /// Axis colour.
    pub color: Rgb,
    /// Draw-order key.
    pub z_index: i32,
    /// Margins and tick geometry.
    pub layout: AxisLayoutConfig,
}

impl AxisModel {
    /// Size the axis to fit `points`.
    ///
    /// Each bound is the ceiling of the largest coordinate, never below 1, so
    /// an empty point set gives a 1x1 grid.
    pub fn from_points(points: &[Point], layout: AxisLayoutConfig) -> Self {
        let (max_x, max_y) = points
            .iter()
            .fold((1.0_f64, 1.0_f64), |(mx, my), p| (mx.max(p.x), my.max(p.y)));

        // `as` saturates, so the axis stops at u32::MAX.
        let limit = f64::from(u32::MAX);
        if max_x > limit || max_y > limit {
            tracing::warn!(
                "Coordinates up to ({}, {}) exceed the axis range; clamping to {}",
                max_x,
                max_y,
                u32::MAX
            );
        }
        let x_max = max_x.ceil() as u32;
        let y_max = max_y.ceil() as u32;

        Self {
            x_max,
            y_max,
            x_scale: tick_scale(x_max),
            y_scale: tick_scale(y_max),
            color: Rgb::BLACK,
            z_index: DEFAULT_Z_INDEX,
            layout,
        }
    }

    /// The plotted rectangle inside a surface of the given bounds.
    pub fn plot_area(&self, surface: PixelRect) -> PixelRect {
        surface.inset(&self.layout.margins)
    }

    /// Map a data coordinate to a pixel inside `area`. Y is flipped so that
    /// larger values sit higher on screen.
    pub fn to_pixel(&self, area: &PixelRect, x: f64, y: f64) -> Pixel {
        let x_max = f64::from(self.x_max);
        let y_max = f64::from(self.y_max);
        Pixel::new(
            x * area.width / x_max + area.x,
            area.y + (y_max - y) * area.height / y_max,
        )
    }

    /// Labelled X tick values, from `x_max` downward in steps of `x_scale`.
    pub fn x_ticks(&self) -> impl Iterator<Item = u32> {
        ticks(self.x_max, self.x_scale)
    }

    /// Labelled Y tick values, from `y_max` downward in steps of `y_scale`.
    pub fn y_ticks(&self) -> impl Iterator<Item = u32> {
        ticks(self.y_max, self.y_scale)
    }

    /// Draw both axis lines with their ticks and labels.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let area = self.plot_area(surface.bounds());
        let layout = &self.layout;
        let width = layout.stroke_width;
        let origin = Pixel::new(area.x, area.bottom());

        surface.draw_line(Pixel::new(area.x, area.y), origin, self.color, width);
        surface.draw_line(origin, Pixel::new(area.right(), area.bottom()), self.color, width);

        for value in self.y_ticks() {
            let at = Pixel::new(area.x, self.to_pixel(&area, 0.0, f64::from(value)).y);
            let (dx, dy) = layout.y_label_offset;
            surface.draw_text(at.offset(dx, dy), &value.to_string(), self.color);
            surface.draw_line(at, at.offset(layout.tick_length, 0.0), self.color, width);
        }

        for value in self.x_ticks() {
            let at = Pixel::new(self.to_pixel(&area, f64::from(value), 0.0).x, area.bottom());
            let (dx, dy) = layout.x_label_offset;
            surface.draw_text(at.offset(dx, dy), &value.to_string(), self.color);
            surface.draw_line(at, at.offset(0.0, -layout.tick_length), self.color, width);
        }
    }
}

fn tick_scale(max: u32) -> u32 {
    (max / MAX_TICKS).max(1)
}

fn ticks(max: u32, scale: u32) -> impl Iterator<Item = u32> {
    (0..max).step_by(scale as usize).map(move |i| max - i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DisplayList, DrawCommand};

    fn axis_for(coords: &[(f64, f64)]) -> AxisModel {
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        AxisModel::from_points(&points, AxisLayoutConfig::default())
    }

    #[test]
    fn bounds_are_ceiling_of_maxima() {
        let axis = axis_for(&[(3.0, 5.0), (10.0, 2.0)]);
        assert_eq!((axis.x_max, axis.y_max), (10, 5));
        assert_eq!((axis.x_scale, axis.y_scale), (1, 1));

        let axis = axis_for(&[(2.1, 0.2)]);
        assert_eq!((axis.x_max, axis.y_max), (3, 1));
    }

    #[test]
    fn empty_and_negative_points_keep_unit_bounds() {
        let axis = axis_for(&[]);
        assert_eq!((axis.x_max, axis.y_max, axis.x_scale, axis.y_scale), (1, 1, 1, 1));

        let axis = axis_for(&[(-4.0, -9.0)]);
        assert_eq!((axis.x_max, axis.y_max), (1, 1));
    }

    #[test]
    fn huge_coordinates_clamp_to_u32_range() {
        let axis = axis_for(&[(1e12, 3.0), (2.0, 5e10)]);
        assert_eq!((axis.x_max, axis.y_max), (u32::MAX, u32::MAX));
        assert_eq!(axis.x_scale, u32::MAX / 20);
        assert_eq!(axis.x_ticks().count(), 21);

        let axis = axis_for(&[(f64::from(u32::MAX), 1.0)]);
        assert_eq!(axis.x_max, u32::MAX);
    }

    #[test]
    fn scale_limits_tick_count() {
        let axis = axis_for(&[(100.0, 45.0)]);
        assert_eq!(axis.x_scale, 5);
        assert_eq!(axis.y_scale, 2);
        assert_eq!(axis.x_ticks().count(), 20);
        assert_eq!(axis.y_ticks().take(3).collect::<Vec<_>>(), vec![45, 43, 41]);
        assert_eq!(axis.y_ticks().last(), Some(1));
    }

    #[test]
    fn mapping_flips_y() {
        let axis = axis_for(&[(10.0, 5.0)]);
        let area = PixelRect::new(20.0, 30.0, 100.0, 50.0);
        assert_eq!(axis.to_pixel(&area, 0.0, 0.0), Pixel::new(20.0, 80.0));
        assert_eq!(axis.to_pixel(&area, 10.0, 5.0), Pixel::new(120.0, 30.0));
        assert_eq!(axis.to_pixel(&area, 5.0, 2.5), Pixel::new(70.0, 55.0));
    }

    #[test]
    fn draws_both_lines_and_one_tick_per_value() {
        let axis = axis_for(&[(3.0, 2.0)]);
        let mut list = DisplayList::new(PixelRect::new(0.0, 0.0, 140.0, 110.0));
        axis.draw(&mut list);

        let lines = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        let labels: Vec<&str> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(lines, 2 + 2 + 3);
        assert_eq!(labels, vec!["2", "1", "3", "2", "1"]);
    }

    #[test]
    fn ticks_land_where_points_with_the_same_value_land() {
        let axis = axis_for(&[(4.0, 8.0)]);
        let bounds = PixelRect::new(0.0, 0.0, 200.0, 120.0);
        let area = axis.plot_area(bounds);
        let mut list = DisplayList::new(bounds);
        axis.draw(&mut list);

        let x_ticks: Vec<f64> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. }
                    if from.y == area.bottom() && to.x == from.x && to.y < from.y =>
                {
                    Some(from.x)
                },
                _ => None,
            })
            .collect();

        assert_eq!(x_ticks, vec![180.0, 140.0, 100.0, 60.0]);
        assert!(x_ticks.contains(&axis.to_pixel(&area, 2.0, 0.0).x));
    }
}
