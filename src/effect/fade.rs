use crate::{
    color::{Rgb, rgb_from_u32, rgb_to_u32},
    math8::{clamp_unit, scale8_f32},
};

/// Scale the first `count` pixels toward black
///
/// Every channel becomes `floor(channel * factor)`. The factor is clamped
/// to `0.0..=1.0`, so `0.0` blanks the pixels and `1.0` keeps the colors
/// while still zeroing the unused top byte.
///
/// Does nothing when `leds` is empty or `count <= 0`. A NaN factor
/// survives the clamp and narrows every channel to zero. Only the pixels present in `leds` are touched, even if `count` is larger.
pub fn fade_strip(leds: &mut [u32], count: i32, factor: f32) {
    let Ok(count) = usize::try_from(count) else {
        return;
    };
    if count == 0 || leds.is_empty() {
        return;
    }
    let factor = clamp_unit(factor);

    for pixel in leds.iter_mut().take(count) {
        let color = rgb_from_u32(*pixel);
        *pixel = rgb_to_u32(Rgb {
            r: scale8_f32(color.r, factor),
            g: scale8_f32(color.g, factor),
            b: scale8_f32(color.b, factor),
        });
    }
}
