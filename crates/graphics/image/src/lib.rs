pub mod bmp;
mod texture;

pub use texture::Texture;
