//! Positioned, coloured grid cells.

use std::fmt;

use serde::{Serialize, Serializer};

/// A composed colour.
///
/// Components are usually in 0..=254, but custom channel values are passed
/// through unclamped, so any `i64` may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl Rgb {
    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }

    /// Components clamped to a displayable byte, for raster output.
    pub fn to_bytes(self) -> [u8; 3] {
        [clamp_byte(self.r), clamp_byte(self.g), clamp_byte(self.b)]
    }
}

fn clamp_byte(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One grid cell: its top-left corner and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub colour: Rgb,
}

impl Pixel {
    pub const fn new(x: u32, y: u32, colour: Rgb) -> Self {
        Self { x, y, colour }
    }
}
