//! The `.bmp` file format
//!
//! Information about the format can be found at
//! * <http://www.ece.ualberta.ca/~elliott/ee552/studentAppNotes/2003_w/misc/bmp_file_format/bmp_file_format.htm>
//! * <http://www.martinreddy.net/gfx/2d/BMP.txt>
//!
//! Only uncompressed 24 bit images are written.

use error_derive::Error;
use math::Color;

use crate::Texture;

pub(crate) const BMP_MAGIC: [u8; 2] = [0x42, 0x4d];

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// 72 DPI, expressed in pixels per meter
const PIXELS_PER_METER: u32 = 2835;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[msg = "image dimensions do not fit into a bmp header"]
    TooLarge,
}

/// Every row of pixels is padded to a multiple of four bytes
#[must_use]
fn row_size(width: usize) -> usize {
    (width * 3).next_multiple_of(4)
}

pub fn encode(texture: &Texture<Color>) -> Result<Vec<u8>, Error> {
    let width = i32::try_from(texture.width()).map_err(|_| Error::TooLarge)?;
    let height = i32::try_from(texture.height()).map_err(|_| Error::TooLarge)?;

    let row_size = row_size(texture.width());
    let image_size = row_size
        .checked_mul(texture.height())
        .and_then(|size| u32::try_from(size).ok())
        .ok_or(Error::TooLarge)?;
    let image_data_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    let file_size = image_data_offset
        .checked_add(image_size)
        .ok_or(Error::TooLarge)?;

    log::debug!(
        "Encoding {width}x{height} bmp ({file_size} bytes, {row_size} bytes per row)"
    );

    let mut bytes = Vec::with_capacity(file_size as usize);

    // File header
    bytes.extend_from_slice(&BMP_MAGIC);
    bytes.extend_from_slice(&file_size.to_le_bytes());
    bytes.extend_from_slice(&0_u32.to_le_bytes()); // Reserved
    bytes.extend_from_slice(&image_data_offset.to_le_bytes());

    // Info header
    bytes.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    bytes.extend_from_slice(&width.to_le_bytes());
    // A positive height means that rows are stored bottom to top
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&1_u16.to_le_bytes()); // Planes
    bytes.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    bytes.extend_from_slice(&0_u32.to_le_bytes()); // No compression
    bytes.extend_from_slice(&image_size.to_le_bytes());
    bytes.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    bytes.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    bytes.extend_from_slice(&0_u32.to_le_bytes()); // Colors in the palette
    bytes.extend_from_slice(&0_u32.to_le_bytes()); // Important colors

    // Pixel data
    let padding = row_size - texture.width() * 3;
    for row in texture.rows().rev() {
        for pixel in row {
            bytes.extend_from_slice(&[pixel.blue(), pixel.green(), pixel.red()]);
        }
        bytes.extend(std::iter::repeat(0).take(padding));
    }

    debug_assert_eq!(bytes.len(), file_size as usize);

    Ok(bytes)
}
