use crate::{Canvas, Color, Point, Shape};

/// An axis-aligned ellipse
///
/// The radius holds the two semi-axes. It is a size, not a position: scaling
/// multiplies it directly (independent of the scaling origin) and rotating leaves
/// it untouched, so only the center moves when the ellipse is rotated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ellipse {
    fill: Color,
    center: Point,
    radius: Point,
}

impl Ellipse {
    #[must_use]
    pub const fn new(fill: Color, center: Point, radius: Point) -> Self {
        Self {
            fill,
            center,
            radius,
        }
    }

    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub const fn radius(&self) -> Point {
        self.radius
    }
}

impl Shape for Ellipse {
    fn fill(&self) -> Color {
        self.fill
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_ellipse(self.center, self.radius, self.fill);
    }

    fn translate(&mut self, offset: Point) {
        self.center = self.center.translated(offset);
    }

    fn scale(&mut self, origin: Point, factor: i32) {
        if factor < 0 {
            log::debug!("Scaling ellipse by {factor}, its radius becomes negative");
        }

        self.radius = self.radius.map(|component| component.saturating_mul(factor));
        self.center = self.center.scaled(origin, factor);
    }

    fn rotate(&mut self, origin: Point, degrees: i32) {
        self.center = self.center.rotated(origin, degrees);
    }

    fn duplicate(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
