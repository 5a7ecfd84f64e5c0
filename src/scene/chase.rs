use crate::{color::Rgb, strip::Strip};

pub const CHASE_FADE_FACTOR: f32 = 0.85;
/// LEDs the head advances per frame
pub const CHASE_STEP: f32 = 1.5;
const CHASE_MIN_LENGTH: usize = 10;

/// Bar that runs around the strip, wrapping at the end
///
/// The tail dims to 70% of the head.
#[derive(Debug, Clone, Default)]
pub struct ChaseScene {
    position: f32,
}

impl ChaseScene {
    pub const fn new() -> Self {
        Self { position: 0.0 }
    }

    /// Head position in LEDs
    pub const fn position(&self) -> f32 {
        self.position
    }

    /// Advance one step and render
    ///
    /// `color_at` receives the phase of each bar pixel in `0.0..1.0`:
    /// the head position as a fraction of the strip plus the pixel's
    /// offset along the bar.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    pub fn render<const N: usize, F>(&mut self, strip: &mut Strip<N>, mut color_at: F)
    where
        F: FnMut(f32) -> Rgb,
    {
        strip.fade(CHASE_FADE_FACTOR);
        if N == 0 {
            return;
        }

        let len = N as f32;
        let bar_len = CHASE_MIN_LENGTH.max(N / 15);
        self.position = (self.position + CHASE_STEP) % len;
        let head = self.position as usize;

        for i in 0..bar_len {
            let index = (head + i) % N;
            let t = i as f32 / bar_len as f32;
            let phase = (self.position / len + t) % 1.0;
            strip.draw_bar(index as i32, 1, color_at(phase), 1.0 - 0.3 * t);
        }
    }
}
