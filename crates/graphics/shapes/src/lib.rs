//! Vector shapes that can be drawn onto a [Canvas] and transformed in place
//!
//! Every kind of shape implements [Shape]. A [Group] owns any number of other
//! shapes (including other groups) and forwards every operation to them, in order.

mod ellipse;
mod group;
mod polygon;
mod polyline;
mod transform;

pub use ellipse::Ellipse;
pub use group::Group;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use transform::{ParseTransformError, Transform};

pub use math::{Color, Point};
pub use render::Canvas;

use std::fmt;

/// Common interface of everything that can be drawn
pub trait Shape: fmt::Debug {
    /// The color used to paint the shape
    fn fill(&self) -> Color;

    /// Paint the shape onto `canvas`
    ///
    /// This never changes the geometry of the shape.
    fn draw(&self, canvas: &mut dyn Canvas);

    fn translate(&mut self, offset: Point);

    /// Multiply the distance of every point from `origin` by `factor`
    fn scale(&mut self, origin: Point, factor: i32);

    /// Rotate every point around `origin`
    ///
    /// See [Point::rotated] for the direction of the rotation.
    fn rotate(&mut self, origin: Point, degrees: i32);

    /// Create a copy of the shape that shares nothing with the original
    #[must_use]
    fn duplicate(&self) -> Box<dyn Shape>;

    /// Returns `Some` if the shape is a [Group]
    fn as_group(&self) -> Option<&Group> {
        None
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

/// Replace every point with the result of `transform`, keeping the order
fn transform_points<F>(points: &mut [Point], transform: F)
where
    F: Fn(Point) -> Point,
{
    for point in points {
        *point = transform(*point);
    }
}
