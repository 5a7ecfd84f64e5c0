//! Owned frame buffer for a fixed-length strip
//!
//! Wraps the free functions in [`crate::effect`] around a `[u32; N]`
//! so a render loop can fade, draw and push a frame without passing
//! lengths around.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    color::{Rgb, rgb_from_u32},
    effect::{draw_bar, fade_strip},
};

/// Per-frame decay used by [`Strip::fade_default`]
pub const DEFAULT_FADE_FACTOR: f32 = 0.80;

/// Packed frame buffer of `N` LEDs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip<const N: usize> {
    pixels: [u32; N],
}

impl<const N: usize> Default for Strip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Strip<N> {
    /// Create a strip with every LED off
    pub const fn new() -> Self {
        Self { pixels: [0; N] }
    }

    /// Create a strip from packed pixels
    pub const fn from_pixels(pixels: [u32; N]) -> Self {
        Self { pixels }
    }

    pub const fn len(&self) -> usize {
        self.pixels.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Packed pixels
    pub const fn pixels(&self) -> &[u32; N] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32; N] {
        &mut self.pixels
    }

    /// Unpacked color at `index`, or `None` past the end
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied().map(rgb_from_u32)
    }

    /// Iterate over unpacked colors
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.pixels.iter().copied().map(rgb_from_u32)
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Scale the whole strip toward black
    ///
    /// See [`fade_strip`] for the clamping rules.
    pub fn fade(&mut self, factor: f32) {
        #[cfg(feature = "esp32-log")]
        println!("[Strip.fade] fading {:?} leds by {:?}", N, factor);
        fade_strip(&mut self.pixels, count_of(N), factor);
    }

    /// Fade by [`DEFAULT_FADE_FACTOR`]
    pub fn fade_default(&mut self) {
        self.fade(DEFAULT_FADE_FACTOR);
    }

    /// Additively draw a bar
    ///
    /// See [`draw_bar`] for windowing and saturation.
    pub fn draw_bar(&mut self, start: i32, length: i32, color: Rgb, intensity: f32) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.draw_bar] start={:?} length={:?} color=({:?}, {:?}, {:?}) intensity={:?}",
            start, length, color.r, color.g, color.b, intensity
        );
        draw_bar(&mut self.pixels, start, length, color, intensity);
    }

    /// Unpack the frame and hand it to the driver
    pub fn show<D: OutputDriver>(&self, driver: &mut D) {
        let frame: [Rgb; N] = core::array::from_fn(|i| rgb_from_u32(self.pixels[i]));
        driver.write(&frame);
    }
}

/// Strip length as the signed count taken by [`fade_strip`]
pub(crate) fn count_of(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
