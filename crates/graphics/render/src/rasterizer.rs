use image::Texture;
use math::{Color, Rectangle, Vec2D};

/// Computes the pixel coverage of a closed outline
#[derive(Clone, Debug)]
pub struct Rasterizer {
    width: usize,
    height: usize,

    /// Position of the top left pixel of the rasterizer on the target surface
    offset: Vec2D<i32>,
    buffer: Vec<f32>,
}

impl Rasterizer {
    /// Create a rasterizer that covers the given pixel area
    #[must_use]
    pub fn new(area: Rectangle<i32>) -> Self {
        // Coverage can spill over into the column right of an edge
        let width = area.width().unsigned_abs() as usize + 2;
        let height = area.height().unsigned_abs() as usize + 1;

        Self {
            width,
            height,
            offset: area.top_left(),
            buffer: vec![0.; width * height],
        }
    }

    /// Create a rasterizer that covers the part of the outline inside `clip`
    ///
    /// Returns `None` if the outline is empty or lies completely outside of `clip`.
    #[must_use]
    pub fn for_outline(outline: &[Vec2D], clip: Rectangle<i32>) -> Option<Self> {
        let grid_points = outline
            .iter()
            .flat_map(|point| [point.map(f32::floor), point.map(f32::ceil)])
            .map(|point| point.map(|component| component as i32));

        let area = Rectangle::bounding(grid_points)?.intersection(&clip)?;
        Some(Self::new(area))
    }

    #[must_use]
    pub fn into_mask(self) -> Mask {
        Mask {
            width: self.width,
            height: self.height,
            offset: self.offset,
            mask: self.buffer,
        }
    }

    /// Rasterize a 2D Line.
    /// **Greatly** inspired by <https://github.com/raphlinus/font-rs/blob/master/src/raster.rs#L44>
    pub fn draw_line(&mut self, from: Vec2D, to: Vec2D) {
        let offset = self.offset.map(|component| component as f32);
        let (from, to) = (from - offset, to - offset);

        // The rasterizer does not draw horizontal lines, those are covered by the fill
        // algorithm
        if (from.y - to.y).abs() <= f32::EPSILON {
            return;
        }

        // Make sure to always go from the lower point to the higher one
        let (direction, from, to) = if from.y < to.y {
            (1.0, from, to)
        } else {
            (-1.0, to, from)
        };

        let line_slope = (to.x - from.x) / (to.y - from.y);
        let max_x = (self.width - 2) as f32;

        // Skip the part of the line above the rasterizer
        let mut x = if from.y < 0. {
            line_slope.mul_add(-from.y, from.x)
        } else {
            from.x
        }
        .clamp(0., max_x);
        let y_start = from.y.max(0.) as usize;

        for y in y_start..self.height.min(to.y.ceil() as usize) {
            let linestart = y * self.width;

            // The y-delta covered by this line segment.
            // Will usually be one, except for the first and last segments
            let dy = ((y + 1) as f32).min(to.y) - (y as f32).max(from.y);

            // The x coordinate where this line segment will end
            let xnext = line_slope.mul_add(dy, x).clamp(0., max_x);

            let d = dy * direction;

            let (x0, x1) = if x < xnext { (x, xnext) } else { (xnext, x) };

            let x0floor = x0.floor();
            let x0i = x0floor as usize;
            let x1ceil = x1.ceil();
            let x1i = x1ceil as usize;

            if x1i <= x0i + 1 {
                // The segment stays within a single pixel
                let xmf = 0.5f32.mul_add(x + xnext, -x0floor);
                self.buffer[linestart + x0i] += d - d * xmf;
                self.buffer[linestart + x0i + 1] += d * xmf;
            } else {
                let s = (x1 - x0).recip();
                let x0f = x0 - x0floor;
                let a0 = 0.5 * s * (1.0 - x0f) * (1.0 - x0f);
                let x1f = x1 - x1ceil + 1.0;
                let am = 0.5 * s * x1f * x1f;

                self.buffer[linestart + x0i] += d * a0;
                if x1i == x0i + 2 {
                    self.buffer[linestart + x0i + 1] += d * (1.0 - a0 - am);
                } else {
                    let a1 = s * (1.5 - x0f);
                    self.buffer[linestart + x0i + 1] += d * (a1 - a0);
                    for xi in x0i + 2..x1i - 1 {
                        self.buffer[linestart + xi] += d * s;
                    }
                    let a2 = ((x1i - x0i - 3) as f32).mul_add(s, a1);
                    self.buffer[linestart + x1i - 1] += d * (1.0 - a2 - am);
                }

                self.buffer[linestart + x1i] += d * am;
            }
            x = xnext;
        }
    }

    /// Fill the polygon described by `outline`
    ///
    /// The outline is closed implicitly, its last point is connected to the first one.
    pub fn fill(&mut self, outline: &[Vec2D]) {
        for (index, &from) in outline.iter().enumerate() {
            let to = outline[(index + 1) % outline.len()];
            self.draw_line(from, to);
        }

        self.fill_outline()
    }

    fn fill_outline(&mut self) {
        let mut accumulator = 0.;
        for elem in &mut self.buffer {
            accumulator += *elem;
            *elem = accumulator;
        }
    }
}

/// Per-pixel coverage produced by a [Rasterizer]
#[derive(Clone, Debug)]
pub struct Mask {
    width: usize,
    height: usize,
    offset: Vec2D<i32>,
    mask: Vec<f32>,
}

impl Mask {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The opacity of a pixel, relative to the top left corner of the mask
    #[must_use]
    pub fn opacity_at(&self, x: usize, y: usize) -> f32 {
        self.mask[y * self.width + x].abs().min(1.)
    }

    /// Paint `color` onto the texture, weighted by the coverage of each pixel
    ///
    /// Pixels outside of the texture are skipped.
    pub fn compose_onto(&self, texture: &mut Texture<Color>, color: Color) {
        for y in 0..self.height {
            let Some(texture_y) = to_texture_coordinate(self.offset.y, y, texture.height())
            else {
                continue;
            };

            for x in 0..self.width {
                let Some(texture_x) = to_texture_coordinate(self.offset.x, x, texture.width())
                else {
                    continue;
                };

                let opacity = self.opacity_at(x, y);
                if opacity <= 0. {
                    continue;
                }

                let previous_color = texture.get_pixel(texture_x, texture_y);
                texture.set_pixel(
                    texture_x,
                    texture_y,
                    color.interpolate(previous_color, opacity),
                );
            }
        }
    }
}

fn to_texture_coordinate(offset: i32, position: usize, limit: usize) -> Option<usize> {
    let coordinate = i64::from(offset) + position as i64;
    usize::try_from(coordinate)
        .ok()
        .filter(|&coordinate| coordinate < limit)
}
