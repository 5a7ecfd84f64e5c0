use crate::{
    bounds::{BarWindow, bounded},
    color::{Rgb, rgb_from_u32, rgb_to_u32},
    math8::{qadd8, scale8_f32},
};

/// Additively draw a solid bar of `length` pixels starting at `start`
///
/// The color is attenuated by `intensity` (values above `1.0` count as
/// `1.0`) with truncation, then added to each pixel and saturated at 255.
///
/// The bar ends at `start + length` computed before `start` is clamped to
/// zero: `start = -3, length = 5` covers indices `0` and `1` only. The
/// window is also cut at the end of `leds`.
///
/// Does nothing when `leds` is empty, `length <= 0` or `intensity` is not
/// positive (NaN included).
pub fn draw_bar(leds: &mut [u32], start: i32, length: i32, color: Rgb, intensity: f32) {
    if leds.is_empty() || length <= 0 {
        return;
    }
    if intensity.is_nan() || intensity <= 0.0 {
        return;
    }
    let intensity = intensity.min(1.0);

    let window = BarWindow::resolve(start, length, leds.len());
    if window.is_empty() {
        return;
    }

    let addend = Rgb {
        r: scale8_f32(color.r, intensity),
        g: scale8_f32(color.g, intensity),
        b: scale8_f32(color.b, intensity),
    };

    for pixel in bounded(leds, window) {
        let current = rgb_from_u32(*pixel);
        *pixel = rgb_to_u32(Rgb {
            r: qadd8(current.r, addend.r),
            g: qadd8(current.g, addend.g),
            b: qadd8(current.b, addend.b),
        });
    }
}
