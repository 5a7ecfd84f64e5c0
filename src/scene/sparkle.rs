//! Random single-pixel sparkles

use rand::{Rng, seq::SliceRandom};

use crate::{color::Rgb, strip::Strip};

pub const TREE_FADE_FACTOR: f32 = 0.90;
const TREE_SPARKLES: usize = 10;

/// Greens, reds and golds
pub const TREE_PALETTE: [Rgb; 6] = [
    Rgb { r: 0, g: 180, b: 0 },
    Rgb { r: 0, g: 255, b: 40 },
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 255, g: 50, b: 0 },
    Rgb {
        r: 255,
        g: 180,
        b: 0,
    },
    Rgb {
        r: 255,
        g: 255,
        b: 40,
    },
];

pub const SPARKLE_FADE_FACTOR: f32 = 0.88;
const SPARKLE_ATTEMPTS: usize = 15;

/// Cold white and icy blue
pub const SPARKLE_COLORS: [Rgb; 2] = [
    Rgb {
        r: 255,
        g: 255,
        b: 255,
    },
    Rgb {
        r: 120,
        g: 120,
        b: 255,
    },
];

/// Festive palette sparkles
pub fn render_tree<const N: usize, R: Rng + ?Sized>(strip: &mut Strip<N>, rng: &mut R) {
    strip.fade(TREE_FADE_FACTOR);
    if N == 0 {
        return;
    }

    for _ in 0..TREE_SPARKLES {
        let index = rng.gen_range(0..N);
        let color = TREE_PALETTE.choose(rng).copied().unwrap_or_default();
        sparkle(strip, index, color);
    }
}

/// Sparse white and blue sparkles, each attempt lights a pixel half the time
pub fn render_sparkle<const N: usize, R: Rng + ?Sized>(strip: &mut Strip<N>, rng: &mut R) {
    strip.fade(SPARKLE_FADE_FACTOR);
    if N == 0 {
        return;
    }

    for _ in 0..SPARKLE_ATTEMPTS {
        if !rng.gen_bool(0.5) {
            continue;
        }
        let index = rng.gen_range(0..N);
        let color = if rng.gen_bool(0.5) {
            SPARKLE_COLORS[0]
        } else {
            SPARKLE_COLORS[1]
        };
        sparkle(strip, index, color);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn sparkle<const N: usize>(strip: &mut Strip<N>, index: usize, color: Rgb) {
    strip.draw_bar(index as i32, 1, color, 1.0);
}
