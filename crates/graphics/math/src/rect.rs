use super::Vec2D;

use std::{cmp, ops};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rectangle<T = f32> {
    top_left: Vec2D<T>,
    bottom_right: Vec2D<T>,
}

impl<T> Rectangle<T> {
    pub const fn from_corners(top_left: Vec2D<T>, bottom_right: Vec2D<T>) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}

impl<T> Rectangle<T>
where
    T: Copy,
{
    pub const fn top_left(&self) -> Vec2D<T> {
        self.top_left
    }

    pub const fn bottom_right(&self) -> Vec2D<T> {
        self.bottom_right
    }
}

impl<T> Rectangle<T>
where
    T: ops::Sub<Output = T> + Copy,
{
    pub fn width(&self) -> T {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> T {
        self.bottom_right.y - self.top_left.y
    }
}

impl<T> Rectangle<T>
where
    T: Ord + Copy,
{
    /// Compute the smallest rectangle containing all of the given points
    ///
    /// Returns `None` if there are no points.
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2D<T>>,
    {
        points.into_iter().fold(None, |extent: Option<Self>, point| {
            let mut extent = extent.unwrap_or(Self::from_corners(point, point));
            extent.grow_to_contain_point(point);
            Some(extent)
        })
    }

    /// The area covered by both rectangles, if there is any
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let top_left = Vec2D::new(
            cmp::max(self.top_left.x, other.top_left.x),
            cmp::max(self.top_left.y, other.top_left.y),
        );
        let bottom_right = Vec2D::new(
            cmp::min(self.bottom_right.x, other.bottom_right.x),
            cmp::min(self.bottom_right.y, other.bottom_right.y),
        );

        (top_left.x <= bottom_right.x && top_left.y <= bottom_right.y)
            .then_some(Self::from_corners(top_left, bottom_right))
    }

    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec2D<T>) -> bool {
        (self.top_left.x..=self.bottom_right.x).contains(&point.x)
            && (self.top_left.y..=self.bottom_right.y).contains(&point.y)
    }

    pub fn grow_to_contain_point(&mut self, point: Vec2D<T>) {
        self.top_left.x = cmp::min(self.top_left.x, point.x);
        self.top_left.y = cmp::min(self.top_left.y, point.y);
        self.bottom_right.x = cmp::max(self.bottom_right.x, point.x);
        self.bottom_right.y = cmp::max(self.bottom_right.y, point.y);
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;
    use crate::Vec2D;

    #[test]
    fn bounding_box() {
        let points = [Vec2D::new(3, 4), Vec2D::new(-1, 10), Vec2D::new(5, 0)];
        let extent = Rectangle::bounding(points).unwrap();

        assert_eq!(extent.top_left(), Vec2D::new(-1, 0));
        assert_eq!(extent.bottom_right(), Vec2D::new(5, 10));
        assert_eq!(extent.width(), 6);
        assert_eq!(extent.height(), 10);
        assert!(points.iter().all(|point| extent.contains_point(*point)));
    }

    #[test]
    fn intersection() {
        let a = Rectangle::from_corners(Vec2D::new(0, 0), Vec2D::new(16, 16));
        let b = Rectangle::from_corners(Vec2D::new(-1000, 8), Vec2D::new(1000, 2000));

        assert_eq!(
            a.intersection(&b),
            Some(Rectangle::from_corners(Vec2D::new(0, 8), Vec2D::new(16, 16)))
        );
        assert_eq!(a.intersection(&b), b.intersection(&a));

        let far_away = Rectangle::from_corners(Vec2D::new(20, 20), Vec2D::new(30, 30));
        assert_eq!(a.intersection(&far_away), None);
    }

    #[test]
    fn bounding_box_of_nothing() {
        assert_eq!(Rectangle::<i32>::bounding([]), None);
    }
}
