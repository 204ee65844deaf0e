//! Draws vector primitives onto raster surfaces

mod canvas;
mod display_list;
mod rasterizer;

pub use canvas::Canvas;
pub use display_list::{Command, DisplayList};
pub use rasterizer::{Mask, Rasterizer};
