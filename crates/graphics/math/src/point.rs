//! Integer positions and the transformations that vector shapes apply to them

use crate::Vec2D;

/// A position on the pixel grid
///
/// All transformations saturate at the bounds of `i32` instead of overflowing.
pub type Point = Vec2D<i32>;

/// Convert back onto the grid, saturating at the bounds of `i32`
#[inline]
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Vec2D<i32> {
    /// Shift the point by a fixed offset
    #[inline]
    #[must_use]
    pub fn translated(self, offset: Self) -> Self {
        Self::new(
            self.x.saturating_add(offset.x),
            self.y.saturating_add(offset.y),
        )
    }

    /// Multiply the distance between the point and `origin` by `factor`
    ///
    /// Negative factors mirror the point through `origin`.
    #[inline]
    #[must_use]
    pub fn scaled(self, origin: Self, factor: i32) -> Self {
        let scale = |position: i32, origin: i32| {
            let distance = i64::from(position) - i64::from(origin);
            let scaled_distance = distance.saturating_mul(i64::from(factor));
            saturate(i64::from(origin).saturating_add(scaled_distance))
        };

        Self::new(scale(self.x, origin.x), scale(self.y, origin.y))
    }

    /// Rotate the point around `origin`
    ///
    /// Positive angles turn the positive x axis towards the positive y axis. Since
    /// y grows downwards on a raster image, that is clockwise on screen.
    /// The rotated coordinates are rounded to the nearest grid position.
    #[must_use]
    pub fn rotated(self, origin: Self, degrees: i32) -> Self {
        // f64 represents every i32 (and every difference of two) exactly
        let (sin, cos) = f64::from(degrees).to_radians().sin_cos();

        let origin = origin.map(f64::from);
        let relative = self.map(f64::from) - origin;
        let rotated = Vec2D::new(
            relative.x.mul_add(cos, -relative.y * sin),
            relative.x.mul_add(sin, relative.y * cos),
        );

        (origin + rotated).map(|component| component.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn translate() {
        let point = Point::new(4, -3);
        assert_eq!(point.translated(Point::new(1, 2)), Point::new(5, -1));
    }

    #[test]
    fn scale_around_origin() {
        let point = Point::new(10, 10);
        assert_eq!(point.scaled(Point::new(0, 0), 2), Point::new(20, 20));
    }

    #[test]
    fn scale_around_pivot() {
        let point = Point::new(10, 10);
        assert_eq!(point.scaled(Point::new(5, 0), 3), Point::new(20, 30));
        assert_eq!(point.scaled(Point::new(5, 0), -1), Point::new(0, -10));
        assert_eq!(point.scaled(Point::new(5, 0), 0), Point::new(5, 0));
        assert_eq!(point.scaled(Point::new(5, 0), 1), point);
    }

    #[test]
    fn rotate_quarter_turns() {
        let origin = Point::new(1, 1);
        let point = Point::new(4, 1);

        assert_eq!(point.rotated(origin, 90), Point::new(1, 4));
        assert_eq!(point.rotated(origin, 180), Point::new(-2, 1));
        assert_eq!(point.rotated(origin, 270), Point::new(1, -2));
        assert_eq!(point.rotated(origin, -90), Point::new(1, -2));
    }

    #[test]
    fn rotate_identity() {
        let point = Point::new(-7, 12);
        assert_eq!(point.rotated(Point::new(3, 3), 0), point);
        assert_eq!(point.rotated(Point::new(3, 3), 360), point);
    }

    #[test]
    fn rotate_around_self() {
        let point = Point::new(20, 20);
        assert_eq!(point.rotated(point, 90), point);
        assert_eq!(point.rotated(point, 37), point);
    }

    #[test]
    fn rotate_identity_far_from_origin() {
        // Beyond the range in which f32 represents every integer
        let pivot = Point::new(12, -7);
        for point in [
            Point::new(16_777_217, 0),
            Point::new(i32::MAX / 2, -(i32::MAX / 2)),
            Point::new(i32::MAX, i32::MIN),
        ] {
            assert_eq!(point.rotated(pivot, 0), point);
            assert_eq!(point.rotated(pivot, 360), point);
            assert_eq!(point.rotated(Point::new(0, 0), -720), point);
        }
    }

    #[test]
    fn rotate_half_turn_far_from_origin() {
        let point = Point::new(i32::MAX / 2, 1);
        assert_eq!(
            point.rotated(Point::new(0, 0), 180),
            Point::new(-(i32::MAX / 2), -1)
        );
    }

    #[test]
    fn transforms_saturate() {
        let point = Point::new(1 << 20, -(1 << 20));

        assert_eq!(
            point.scaled(Point::new(0, 0), 4096),
            Point::new(i32::MAX, i32::MIN)
        );
        assert_eq!(
            point.scaled(Point::new(0, 0), i32::MIN),
            Point::new(i32::MIN, i32::MAX)
        );
        assert_eq!(
            Point::new(i32::MAX, i32::MIN).translated(Point::new(5, -5)),
            Point::new(i32::MAX, i32::MIN)
        );
        assert_eq!(
            Point::new(i32::MIN, 0).scaled(Point::new(i32::MAX, 0), 2),
            Point::new(i32::MIN, 0)
        );
    }

    #[test]
    fn rotate_rounds_to_grid() {
        // (10, 0) rotated by 45 degrees is (7.07, 7.07)
        assert_eq!(
            Point::new(10, 0).rotated(Point::new(0, 0), 45),
            Point::new(7, 7)
        );
    }
}
