use crate::{
    color::Rgb,
    strip::{Strip, count_of},
};

/// Slow decay so the wash builds up over many frames
pub const AMBIENT_FADE_FACTOR: f32 = 0.95;
/// Per-frame weight of the wash color
pub const AMBIENT_INTENSITY: f32 = 0.2;

/// Blend a faint full-strip wash of `color` into the decayed frame
pub fn render_ambient<const N: usize>(strip: &mut Strip<N>, color: Rgb) {
    strip.fade(AMBIENT_FADE_FACTOR);
    strip.draw_bar(0, count_of(N), color, AMBIENT_INTENSITY);
}
