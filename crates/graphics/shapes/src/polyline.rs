use crate::{transform_points, Canvas, Color, Point, Shape};

/// A sequence of connected line segments
///
/// Unlike a [Polygon](crate::Polygon), a polyline is open: its last point is
/// not connected to the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polyline {
    fill: Color,
    points: Vec<Point>,
}

impl Polyline {
    #[must_use]
    pub fn new(fill: Color, points: Vec<Point>) -> Self {
        Self { fill, points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The line segments between consecutive points
    ///
    /// There is one segment less than there are points, and none at all for
    /// polylines with fewer than two points.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|segment| (segment[0], segment[1]))
    }
}

impl Shape for Polyline {
    fn fill(&self) -> Color {
        self.fill
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        for (from, to) in self.segments() {
            canvas.draw_line(from, to, self.fill);
        }
    }

    fn translate(&mut self, offset: Point) {
        transform_points(&mut self.points, |point| point.translated(offset));
    }

    fn scale(&mut self, origin: Point, factor: i32) {
        transform_points(&mut self.points, |point| point.scaled(origin, factor));
    }

    fn rotate(&mut self, origin: Point, degrees: i32) {
        transform_points(&mut self.points, |point| point.rotated(origin, degrees));
    }

    fn duplicate(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
