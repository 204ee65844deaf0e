use crate::{transform_points, Canvas, Color, Point, Shape};

/// A filled polygon
///
/// The outline is closed implicitly, the last point connects back to the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    fill: Color,
    points: Vec<Point>,
}

impl Polygon {
    #[must_use]
    pub fn new(fill: Color, points: Vec<Point>) -> Self {
        Self { fill, points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Shape for Polygon {
    fn fill(&self) -> Color {
        self.fill
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_polygon(&self.points, self.fill);
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
