/// Clamp a factor to the unit range `0.0..=1.0`
///
/// NaN passes through unchanged; callers decide what it means.
#[inline]
pub fn clamp_unit(factor: f32) -> f32 {
    factor.clamp(0.0, 1.0)
}

/// Scale an 8-bit value by a floating point factor
///
/// The product is floored and narrowed, so `255 * 0.5` gives `127`.
/// Factors outside `0.0..=1.0` are not clamped here.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale8_f32(value: u8, factor: f32) -> u8 {
    libm::floorf(f32::from(value) * factor) as u8
}

/// Add two 8-bit values, saturating at 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}
