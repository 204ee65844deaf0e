//! The scene drawn by the binary

use math::{Color, Point};
use shapes::{Ellipse, Group, Polygon, Polyline, Shape};

const ORANGE: Color = Color::rgb(255, 165, 0);

/// Build the demo scene, sized to fit into a 256x256 image
#[must_use]
pub fn demo() -> Group {
    let sun = Ellipse::new(ORANGE, Point::new(196, 60), Point::new(36, 36));

    let roof = Polygon::new(
        Color::RED,
        vec![Point::new(40, 120), Point::new(100, 70), Point::new(160, 120)],
    );
    let wall = Polygon::new(
        Color::BLUE,
        vec![
            Point::new(50, 120),
            Point::new(150, 120),
            Point::new(150, 200),
            Point::new(50, 200),
        ],
    );

    // The shed is a copy of the house from before it got a door
    let mut house = Group::new(vec![Box::new(roof), Box::new(wall)]);
    let mut shed = house.duplicate();
    shed.translate(Point::new(120, 0));
    house.push(Box::new(Ellipse::new(
        Color::WHITE,
        Point::new(100, 150),
        Point::new(12, 18),
    )));

    let ground = Polyline::new(
        Color::GREEN,
        vec![
            Point::new(0, 200),
            Point::new(64, 210),
            Point::new(128, 200),
            Point::new(192, 210),
            Point::new(255, 200),
        ],
    );

    Group::new(vec![Box::new(sun), Box::new(house), shed, Box::new(ground)])
}

#[cfg(test)]
mod tests {
    use super::demo;
    use shapes::Shape;

    #[test]
    fn demo_scene_structure() {
        let scene = demo();

        assert_eq!(scene.len(), 4);
        assert_eq!(scene.leaf_count(), 7);
        assert_eq!(scene.depth(), 2);
        assert_eq!(scene.fill(), shapes::Group::FILL);
    }
}
