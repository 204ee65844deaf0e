use crate::{Canvas, Color, Point, Shape};

/// A collection of shapes that are drawn and transformed together
///
/// The group owns its children. Every operation is forwarded to each child in
/// the order the children were added, so later children are drawn on top of
/// earlier ones.
#[derive(Debug, Default)]
pub struct Group {
    children: Vec<Box<dyn Shape>>,
}

impl Group {
    /// Groups are never painted themselves, this color only exists to satisfy [Shape::fill]
    pub const FILL: Color = Color::WHITE;

    #[must_use]
    pub fn new(children: Vec<Box<dyn Shape>>) -> Self {
        Self { children }
    }

    /// Add a shape after all existing children
    pub fn push(&mut self, child: Box<dyn Shape>) {
        self.children.push(child);
    }

    #[must_use]
    pub fn children(&self) -> &[Box<dyn Shape>] {
        &self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of non-group shapes in this group and all nested groups
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.as_group().map_or(1, Group::leaf_count))
            .sum()
    }

    /// Number of nested group levels, including this one
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .filter_map(|child| child.as_group())
            .map(Group::depth)
            .max()
            .unwrap_or_default()
    }
}

impl Clone for Group {
    fn clone(&self) -> Self {
        log::trace!("Duplicating group with {} children", self.children.len());

        self.children
            .iter()
            .map(|child| child.duplicate())
            .collect()
    }
}

impl FromIterator<Box<dyn Shape>> for Group {
    fn from_iter<I: IntoIterator<Item = Box<dyn Shape>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Shape for Group {
    fn fill(&self) -> Color {
        Self::FILL
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        for child in &self.children {
            child.draw(canvas);
        }
    }

    fn translate(&mut self, offset: Point) {
        for child in &mut self.children {
            child.translate(offset);
        }
    }

    fn scale(&mut self, origin: Point, factor: i32) {
        for child in &mut self.children {
            child.scale(origin, factor);
        }
    }

    fn rotate(&mut self, origin: Point, degrees: i32) {
        for child in &mut self.children {
            child.rotate(origin, degrees);
        }
    }

    fn duplicate(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn as_group(&self) -> Option<&Group> {
        Some(self)
    }
}
