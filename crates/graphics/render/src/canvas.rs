use image::Texture;
use math::{Angle, Color, Point, Rectangle, Vec2D};

use crate::Rasterizer;

/// Maximum distance (in pixels) between a flattened ellipse and the real outline
const ELLIPSE_FLATTEN_TOLERANCE: f32 = 0.25;
const MIN_ELLIPSE_SEGMENTS: usize = 16;
const MAX_ELLIPSE_SEGMENTS: usize = 1024;

/// A surface that primitive shapes can be drawn onto
pub trait Canvas {
    /// Fill an axis-aligned ellipse with the given semi-axes
    fn draw_ellipse(&mut self, center: Point, radius: Point, color: Color);

    /// Fill a polygon
    ///
    /// The polygon is closed implicitly, there is no need to repeat the first point.
    fn draw_polygon(&mut self, points: &[Point], color: Color);

    /// Draw a straight line between two points
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
}

impl Canvas for Texture<Color> {
    fn draw_ellipse(&mut self, center: Point, radius: Point, color: Color) {
        if radius.x < 0 || radius.y < 0 {
            log::warn!(
                "Ellipse at {center:?} has a negative radius {radius:?}, using its absolute value"
            );
        }

        let radius = radius.map(|component| component.unsigned_abs() as f32);
        if radius.x == 0. || radius.y == 0. {
            log::debug!("Not drawing ellipse at {center:?} without area");
            return;
        }

        let outline = flatten_ellipse(center.map(|component| component as f32), radius);
        fill(self, &outline, color);
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            log::debug!("Not drawing polygon with only {} points", points.len());
            return;
        }

        let outline: Vec<Vec2D> = points
            .iter()
            .map(|point| point.map(|component| component as f32))
            .collect();
        fill(self, &outline, color);
    }

    /// Lines are one pixel wide and include both endpoints
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let Some((from, to)) = clip_line(from, to, self.width(), self.height()) else {
            return;
        };

        let delta_x = (to.x - from.x).abs();
        let delta_y = -(to.y - from.y).abs();
        let step_x = if from.x < to.x { 1 } else { -1 };
        let step_y = if from.y < to.y { 1 } else { -1 };

        let mut error = delta_x + delta_y;
        let mut position = from;

        loop {
            if let (Ok(x), Ok(y)) = (usize::try_from(position.x), usize::try_from(position.y)) {
                if self.contains(x, y) {
                    self.set_pixel(x, y, color);
                }
            }

            if position == to {
                break;
            }

            let doubled_error = 2 * error;
            if doubled_error >= delta_y {
                error += delta_y;
                position.x += step_x;
            }
            if doubled_error <= delta_x {
                error += delta_x;
                position.y += step_y;
            }
        }
    }
}

fn fill(texture: &mut Texture<Color>, outline: &[Vec2D], color: Color) {
    let texture_area = Rectangle::from_corners(
        Vec2D::new(0, 0),
        Vec2D::new(
            i32::try_from(texture.width()).unwrap_or(i32::MAX),
            i32::try_from(texture.height()).unwrap_or(i32::MAX),
        ),
    );

    let Some(mut rasterizer) = Rasterizer::for_outline(outline, texture_area) else {
        return;
    };

    rasterizer.fill(outline);
    rasterizer.into_mask().compose_onto(texture, color);
}

/// Cut a line down to the part that lies on a `width` x `height` pixel grid
///
/// Uses the Liang-Barsky algorithm. The endpoints of the visible part are rounded
/// to the nearest pixel, endpoints that are already visible stay where they are.
/// Returns `None` if no part of the line is visible.
fn clip_line(
    from: Point,
    to: Point,
    width: usize,
    height: usize,
) -> Option<(Vec2D<i64>, Vec2D<i64>)> {
    if width == 0 || height == 0 {
        return None;
    }

    let start = from.map(f64::from);
    let delta = to.map(f64::from) - start;
    let max = Vec2D::new(width as f64 - 1., height as f64 - 1.);

    let mut t_enter: f64 = 0.;
    let mut t_exit: f64 = 1.;
    for (p, q) in [
        (-delta.x, start.x),
        (delta.x, max.x - start.x),
        (-delta.y, start.y),
        (delta.y, max.y - start.y),
    ] {
        if p == 0. {
            // Parallel to this edge
            if q < 0. {
                return None;
            }
        } else if p < 0. {
            t_enter = t_enter.max(q / p);
        } else {
            t_exit = t_exit.min(q / p);
        }
    }

    if t_exit < t_enter {
        return None;
    }

    let point_at = |t: f64| {
        Vec2D::new(
            delta.x.mul_add(t, start.x).round() as i64,
            delta.y.mul_add(t, start.y).round() as i64,
        )
    };

    Some((point_at(t_enter), point_at(t_exit)))
}

/// Approximate an ellipse with a closed polygon
fn flatten_ellipse(center: Vec2D, radius: Vec2D) -> Vec<Vec2D> {
    // The largest deviation of a chord from a circle with radius r is r * (1 - cos(step / 2))
    let largest_radius = radius.x.max(radius.y);
    let max_step = 2. * (1. - ELLIPSE_FLATTEN_TOLERANCE / largest_radius).max(-1.).acos();
    let num_segments = ((Angle::FULL_CIRCLE.radians() / max_step).ceil() as usize)
        .clamp(MIN_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS);

    (0..num_segments)
        .map(|segment| {
            let angle = Angle::from_radians(
                Angle::FULL_CIRCLE.radians() * segment as f32 / num_segments as f32,
            );
            Vec2D::new(
                radius.x.mul_add(angle.cos(), center.x),
                radius.y.mul_add(angle.sin(), center.y),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{flatten_ellipse, Canvas, MIN_ELLIPSE_SEGMENTS};
    use image::Texture;
    use math::{Color, Point, Vec2D};

    fn canvas(width: usize, height: usize) -> Texture<Color> {
        let mut texture = Texture::new(width, height);
        texture.clear(Color::WHITE);
        texture
    }

    fn count_pixels(texture: &Texture<Color>, color: Color) -> usize {
        texture.data().iter().filter(|&&pixel| pixel == color).count()
    }

    #[test]
    fn polygon_is_filled() {
        let mut texture = canvas(10, 10);
        let square = [
            Point::new(2, 2),
            Point::new(6, 2),
            Point::new(6, 6),
            Point::new(2, 6),
        ];
        texture.draw_polygon(&square, Color::BLUE);

        assert_eq!(count_pixels(&texture, Color::BLUE), 16);
        assert_eq!(texture.get_pixel(2, 2), Color::BLUE);
        assert_eq!(texture.get_pixel(5, 5), Color::BLUE);
        assert_eq!(texture.get_pixel(6, 6), Color::WHITE);
        assert_eq!(texture.get_pixel(1, 2), Color::WHITE);
    }

    #[test]
    fn polygon_is_clipped() {
        let mut texture = canvas(4, 4);
        let square = [
            Point::new(-5, -5),
            Point::new(2, -5),
            Point::new(2, 2),
            Point::new(-5, 2),
        ];
        texture.draw_polygon(&square, Color::RED);

        assert_eq!(count_pixels(&texture, Color::RED), 4);
        assert_eq!(texture.get_pixel(1, 1), Color::RED);
        assert_eq!(texture.get_pixel(2, 2), Color::WHITE);
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut texture = canvas(4, 4);
        texture.draw_polygon(&[], Color::RED);
        texture.draw_polygon(&[Point::new(1, 1), Point::new(3, 3)], Color::RED);

        assert_eq!(count_pixels(&texture, Color::WHITE), 16);
    }

    #[test]
    fn ellipse_is_filled() {
        let mut texture = canvas(40, 40);
        texture.draw_ellipse(Point::new(20, 20), Point::new(10, 5), Color::RED);

        assert_eq!(texture.get_pixel(20, 20), Color::RED);
        assert_eq!(texture.get_pixel(12, 20), Color::RED);
        assert_eq!(texture.get_pixel(20, 17), Color::RED);
        assert_eq!(texture.get_pixel(20, 10), Color::WHITE);
        assert_eq!(texture.get_pixel(5, 20), Color::WHITE);

        // The area of the ellipse is about pi * 10 * 5 = 157 pixels
        let covered = texture.data().iter().filter(|&&pixel| pixel != Color::WHITE).count();
        assert!((140..=220).contains(&covered), "{covered} pixels covered");
    }

    #[test]
    fn ellipse_with_negative_radius() {
        let mut positive = canvas(20, 20);
        positive.draw_ellipse(Point::new(10, 10), Point::new(4, 6), Color::GREEN);

        let mut negative = canvas(20, 20);
        negative.draw_ellipse(Point::new(10, 10), Point::new(-4, -6), Color::GREEN);

        assert_eq!(positive, negative);
    }

    #[test]
    fn ellipse_without_area() {
        let mut texture = canvas(10, 10);
        texture.draw_ellipse(Point::new(5, 5), Point::new(0, 3), Color::GREEN);
        texture.draw_ellipse(Point::new(5, 5), Point::new(0, 0), Color::GREEN);

        assert_eq!(count_pixels(&texture, Color::WHITE), 100);
    }

    #[test]
    fn flattened_ellipse_stays_on_outline() {
        let center = Vec2D::new(0., 0.);
        let radius = Vec2D::new(30., 30.);
        let outline = flatten_ellipse(center, radius);

        assert!(outline.len() >= MIN_ELLIPSE_SEGMENTS);
        for point in outline {
            assert!((point.magnitude() - 30.).abs() < 0.01);
        }
    }

    #[test]
    fn horizontal_line() {
        let mut texture = canvas(10, 3);
        texture.draw_line(Point::new(1, 1), Point::new(8, 1), Color::BLACK);

        assert_eq!(count_pixels(&texture, Color::BLACK), 8);
        assert!((1..=8).all(|x| texture.get_pixel(x, 1) == Color::BLACK));
    }

    #[test]
    fn diagonal_line() {
        let mut texture = canvas(5, 5);
        texture.draw_line(Point::new(4, 4), Point::new(0, 0), Color::BLACK);

        assert_eq!(count_pixels(&texture, Color::BLACK), 5);
        assert!((0..5).all(|i| texture.get_pixel(i, i) == Color::BLACK));
    }

    #[test]
    fn line_is_clipped() {
        let mut texture = canvas(5, 5);
        texture.draw_line(Point::new(-3, 2), Point::new(10, 2), Color::BLACK);

        assert_eq!(count_pixels(&texture, Color::BLACK), 5);
    }

    #[test]
    fn long_lines_are_clipped() {
        let mut texture = canvas(16, 16);
        texture.draw_line(Point::new(0, 3), Point::new(1_000_000_000, 3), Color::BLACK);
        texture.draw_line(
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
            Color::RED,
        );

        // The diagonal covers one pixel of the horizontal line
        assert_eq!(count_pixels(&texture, Color::BLACK), 15);
        assert_eq!(count_pixels(&texture, Color::RED), 16);
        assert!((0..16).all(|i| texture.get_pixel(i, i) == Color::RED));
    }

    #[test]
    fn invisible_lines() {
        let mut texture = canvas(16, 16);
        texture.draw_line(
            Point::new(-1_000_000_000, -5),
            Point::new(1_000_000_000, -5),
            Color::BLACK,
        );
        texture.draw_line(Point::new(20, 0), Point::new(40, 40), Color::BLACK);
        texture.draw_line(Point::new(i32::MAX, 0), Point::new(0, i32::MAX), Color::BLACK);

        assert_eq!(count_pixels(&texture, Color::WHITE), 256);

        let mut empty: Texture<Color> = Texture::new(0, 0);
        empty.draw_line(Point::new(0, 0), Point::new(5, 5), Color::BLACK);
    }

    #[test]
    fn huge_shapes_are_clipped() {
        let mut texture = canvas(16, 16);
        let square = [
            Point::new(0, 0),
            Point::new(160_000, 0),
            Point::new(160_000, 200_000),
            Point::new(0, 200_000),
        ];
        texture.draw_polygon(&square, Color::BLUE);
        assert_eq!(count_pixels(&texture, Color::BLUE), 256);

        texture.draw_ellipse(Point::new(8, 8), Point::new(1 << 20, 1 << 20), Color::RED);
        assert_eq!(count_pixels(&texture, Color::RED), 256);

        let triangle = [
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MIN),
            Point::new(0, i32::MAX),
        ];
        texture.draw_polygon(&triangle, Color::GREEN);
        assert_eq!(count_pixels(&texture, Color::GREEN), 256);
    }

    #[test]
    fn single_point_line() {
        let mut texture = canvas(3, 3);
        texture.draw_line(Point::new(1, 1), Point::new(1, 1), Color::BLACK);

        assert_eq!(count_pixels(&texture, Color::BLACK), 1);
    }
}
