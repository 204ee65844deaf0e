//! Recording of draw calls

use math::{Color, Point};

use crate::Canvas;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Ellipse {
        center: Point,
        radius: Point,
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
}

/// A [Canvas] that remembers what was drawn instead of producing pixels
///
/// Recorded commands can later be replayed onto another canvas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayList {
    commands: Vec<Command>,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Issue all recorded commands to `canvas`, in the order they were recorded
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            match command {
                Command::Ellipse {
                    center,
                    radius,
                    color,
                } => canvas.draw_ellipse(*center, *radius, *color),
                Command::Polygon { points, color } => canvas.draw_polygon(points, *color),
                Command::Line { from, to, color } => canvas.draw_line(*from, *to, *color),
            }
        }
    }
}

impl Canvas for DisplayList {
    fn draw_ellipse(&mut self, center: Point, radius: Point, color: Color) {
        self.commands.push(Command::Ellipse {
            center,
            radius,
            color,
        });
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(Command::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(Command::Line { from, to, color });
    }
}
