//! Common utilities used in graphics-related libraries

mod angle;
mod color;
mod point;
mod rect;
mod vec2d;

pub use angle::Angle;
pub use color::{Color, ParseColorError};
pub use point::Point;
pub use rect::Rectangle;
pub use vec2d::Vec2D;
