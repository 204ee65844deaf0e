use std::{fmt, str::FromStr};

use error_derive::Error;

/// Pixel format (u32):
///
/// 00000000RRRRRRRRGGGGGGGGBBBBBBBB
///
/// 0: Bit is 0
/// R: Red channel
/// G: Green channel
/// B: Blue channel
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[msg = "expected exactly six hexadecimal digits"]
    InvalidLength,

    #[msg = "invalid hexadecimal digit"]
    InvalidDigit,
}

impl Color {
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[inline]
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self((red as u32) << 16 | (green as u32) << 8 | (blue as u32))
    }

    #[inline]
    #[must_use]
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    #[must_use]
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Mix `self` with `other`, where an `opacity` of `1` yields `self` and `0` yields `other`
    #[must_use]
    pub fn interpolate(&self, other: Self, opacity: f32) -> Self {
        if opacity >= 1. {
            *self
        } else if opacity <= 0. {
            other
        } else {
            let mix = |a: u8, b: u8| {
                (a as f32)
                    .mul_add(opacity, b as f32 * (1. - opacity))
                    .round() as u8
            };

            Self::rgb(
                mix(self.red(), other.red()),
                mix(self.green(), other.green()),
                mix(self.blue(), other.blue()),
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color in `#rrggbb` notation. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength);
        }

        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit);
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ParseColorError::InvalidDigit)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red(), self.green(), self.blue())
    }
}
