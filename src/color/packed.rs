//! Packed `0x00RRGGBB` pixel conversions
//!
//! Frame buffers store one `u32` per LED. The top byte carries no color
//! and is dropped on every repack.

use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// Bits 31-24 are ignored.
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0x00RRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}
