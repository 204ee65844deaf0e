/// The target surface that content should be drawn to
#[derive(Clone, Debug, PartialEq)]
pub struct Texture<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Default + Copy> Texture<T> {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T> Texture<T> {
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Set the pixel at the given coordinates to the specified value.
    ///
    /// # Panics
    /// This function panics if the coordinates are outside of the texture
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: T) {
        let index = self.index_of_pixel(x, y);
        self.data[index] = pixel;
    }

    /// Calculate the index of the pixel data for a given set of coordinates
    #[must_use]
    fn index_of_pixel(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y));

        y * self.width + x
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the rows of the texture, from top to bottom
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[T]> {
        // chunks_exact panics on a chunk size of zero
        self.data.chunks_exact(self.width.max(1))
    }

    /// Return `true` if the coordinates are inside the bounds of the texture
    #[must_use]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }
}

impl<T: Copy> Texture<T> {
    pub fn clear(&mut self, clear_color: T) {
        self.data.fill(clear_color);
    }

    /// Get the pixel value at the given coordinates
    ///
    /// # Panics
    /// This function panics if the coordinates are outside of the texture
    #[must_use]
    pub fn get_pixel(&self, x: usize, y: usize) -> T {
        self.data[self.index_of_pixel(x, y)]
    }

    /// Access a specific pixel in the image
    ///
    /// If the coordinates are outside the image, `default` will be returned
    #[must_use]
    pub fn get_or(&self, x: usize, y: usize, default: T) -> T {
        if self.contains(x, y) {
            self.get_pixel(x, y)
        } else {
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Texture;

    #[test]
    fn set_and_get() {
        let mut texture: Texture<u32> = Texture::new(3, 2);
        texture.set_pixel(2, 1, 7);

        assert_eq!(texture.get_pixel(2, 1), 7);
        assert_eq!(texture.get_pixel(1, 1), 0);
        assert_eq!(texture.data()[5], 7);
    }

    #[test]
    fn out_of_bounds_access() {
        let texture: Texture<u32> = Texture::new(3, 2);

        assert!(texture.contains(2, 1));
        assert!(!texture.contains(3, 0));
        assert!(!texture.contains(0, 2));
        assert_eq!(texture.get_or(5, 5, 42), 42);
    }

    #[test]
    fn rows_and_clear() {
        let mut texture: Texture<u32> = Texture::new(2, 3);
        texture.clear(9);
        texture.set_pixel(0, 2, 1);

        let rows: Vec<&[u32]> = texture.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[1, 9]);
    }
}
