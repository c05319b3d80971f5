//! Drawable registry and z-order compositor.
//!
//! A [`Scene`] owns one axis and every point. Items are kept in creation
//! order and stably sorted by z-index before each paint, so items with equal
//! z-index always draw in the order they were added.

use super::AxisModel;
use crate::data::Point;
use crate::render::Surface;
use crate::util::AxisLayoutConfig;

/// Handle to an axis owned by a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisId(usize);

/// What a drawable item is.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    /// The axis lines, ticks and labels.
    Axis(AxisId),
    /// A point plotted against an axis.
    Point {
        /// The point data.
        point: Point,
        /// Axis that maps the point to pixels.
        axis: AxisId,
    },
}

/// An entry in the draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableItem {
    /// Draw-order key; higher values are drawn later.
    pub z_index: i32,
    /// The item itself.
    pub kind: ItemKind,
}

/// Everything drawn for one loaded file.
#[derive(Debug, Clone)]
pub struct Scene {
    axes: Vec<AxisModel>,
    items: Vec<DrawableItem>,
}

impl Scene {
    /// Build the scene for `points`, sizing the axis to fit them.
    pub fn new(points: Vec<Point>, layout: &AxisLayoutConfig) -> Self {
        let model = AxisModel::from_points(&points, layout.clone());
        let axis = AxisId(0);

        let mut items = Vec::with_capacity(points.len() + 1);
        items.push(DrawableItem {
            z_index: model.z_index,
            kind: ItemKind::Axis(axis),
        });
        items.extend(points.into_iter().map(|point| DrawableItem {
            z_index: point.z_index,
            kind: ItemKind::Point { point, axis },
        }));

        Self {
            axes: vec![model],
            items,
        }
    }

    /// The scene's axis.
    pub fn axis(&self) -> &AxisModel {
        &self.axes[0]
    }

    /// Items in their current order.
    pub fn items(&self) -> &[DrawableItem] {
        &self.items
    }

    /// Points in their current order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.items.iter().filter_map(|item| match &item.kind {
            ItemKind::Point { point, .. } => Some(point),
            ItemKind::Axis(_) => None,
        })
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    /// Stable sort by z-index, ascending.
    pub fn sort_by_z(&mut self) {
        self.items.sort_by_key(|item| item.z_index);
    }

    /// Sort, then draw every item onto `surface`.
    pub fn paint(&mut self, surface: &mut dyn Surface) {
        self.sort_by_z();
        for item in &self.items {
            match &item.kind {
                ItemKind::Axis(id) => self.axes[id.0].draw(surface),
                ItemKind::Point { point, axis } => draw_point(point, &self.axes[axis.0], surface),
            }
        }
    }
}

fn draw_point(point: &Point, axis: &AxisModel, surface: &mut dyn Surface) {
    let area = axis.plot_area(surface.bounds());
    let center = axis.to_pixel(&area, point.x, point.y);
    surface.fill_circle(center, f64::from(point.size) / 2.0, point.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Rgb;
    use crate::plot::{Pixel, PixelRect};
    use crate::render::{DisplayList, DrawCommand};

    fn circles(list: &DisplayList) -> Vec<(Pixel, f64, Rgb)> {
        list.commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    fn paint(scene: &mut Scene) -> DisplayList {
        let mut list = DisplayList::new(PixelRect::new(0.0, 0.0, 240.0, 150.0));
        scene.paint(&mut list);
        list
    }

    #[test]
    fn one_axis_then_points_in_creation_order() {
        let scene = Scene::new(
            vec![Point::new(3.0, 5.0), Point::new(10.0, 2.0)],
            &AxisLayoutConfig::default(),
        );
        assert_eq!(scene.point_count(), 2);
        assert!(matches!(scene.items()[0].kind, ItemKind::Axis(_)));
        assert_eq!((scene.axis().x_max, scene.axis().y_max), (10, 5));
    }

    #[test]
    fn empty_scene_still_draws_axis() {
        let mut scene = Scene::new(Vec::new(), &AxisLayoutConfig::default());
        let list = paint(&mut scene);
        assert_eq!(scene.point_count(), 0);
        assert!(circles(&list).is_empty());
        assert!(list
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "1")));
    }

    #[test]
    fn one_circle_per_point_at_mapped_position() {
        let mut scene = Scene::new(
            vec![
                Point::new(10.0, 5.0).with_color(Rgb::new(1, 2, 3)),
                Point::new(0.0, 0.0).with_size(12),
            ],
            &AxisLayoutConfig::default(),
        );
        let list = paint(&mut scene);
        let area = scene.axis().plot_area(list.bounds());

        let drawn = circles(&list);
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0], (Pixel::new(area.right(), area.y), 3.5, Rgb::new(1, 2, 3)));
        assert_eq!(drawn[1], (Pixel::new(area.x, area.bottom()), 6.0, Rgb::BLACK));
    }

    #[test]
    fn higher_z_index_draws_later() {
        let mut scene = Scene::new(
            vec![
                Point::new(1.0, 1.0).with_z_index(300),
                Point::new(2.0, 2.0).with_z_index(-5),
            ],
            &AxisLayoutConfig::default(),
        );
        let list = paint(&mut scene);

        assert!(matches!(list.commands()[0], DrawCommand::Circle { .. }));
        assert!(matches!(list.commands().last(), Some(DrawCommand::Circle { .. })));
        let z: Vec<i32> = scene.items().iter().map(|i| i.z_index).collect();
        assert_eq!(z, vec![-5, 100, 300]);
    }

    #[test]
    fn equal_z_index_keeps_creation_order_across_repaints() {
        let points: Vec<Point> = (0..8)
            .map(|i| Point::new(f64::from(i), 1.0).with_color(Rgb::new(i as u16, 0, 0)))
            .collect();
        let mut scene = Scene::new(points, &AxisLayoutConfig::default());

        for _ in 0..3 {
            let list = paint(&mut scene);
            let order: Vec<u16> = circles(&list).iter().map(|(_, _, c)| c.r).collect();
            assert_eq!(order, (0..8).collect::<Vec<_>>());
            assert!(matches!(list.commands()[0], DrawCommand::Line { .. }));
        }
    }
}
