//! Music visualiser frame
//!
//! The strip is split into twelve note sections followed by a kick zone
//! and a snare zone. Positions are laid out for a 300 LED strip; shorter
//! strips simply lose the bars past their end.

use crate::{color::Rgb, strip::Strip};

/// Decay applied before the bars are drawn
pub const MUSIC_FADE_FACTOR: f32 = crate::strip::DEFAULT_FADE_FACTOR;
/// LEDs per note section
pub const NOTE_SECTION: i32 = 20;
/// Level is multiplied by this before clamping to the bar intensity
const LEVEL_GAIN: f32 = 3.0;

pub const KICK_START: i32 = 240;
pub const KICK_LENGTH: i32 = 30;
pub const KICK_COLOR: Rgb = Rgb {
    r: 255,
    g: 80,
    b: 0,
};

pub const SNARE_START: i32 = 270;
pub const SNARE_LENGTH: i32 = 30;
pub const SNARE_COLOR: Rgb = Rgb {
    r: 200,
    g: 200,
    b: 255,
};

/// Kick and snare strengths at or below this are ignored
pub const TRIGGER_THRESHOLD: f32 = 0.1;

/// Detected note and the color chosen for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteBar {
    /// Note number, only its pitch class (`note % 12`) is used
    pub note: u8,
    pub color: Rgb,
}

/// Audio analysis for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MusicFrame {
    pub note: Option<NoteBar>,
    /// Input level, `0.0..`
    pub level: f32,
    /// Kick drum strength
    pub kick: f32,
    /// Snare strength
    pub snare: f32,
}

/// Render one music frame on top of the decayed previous one
pub fn render_music<const N: usize>(strip: &mut Strip<N>, frame: &MusicFrame) {
    strip.fade(MUSIC_FADE_FACTOR);

    if let Some(note) = frame.note {
        let base = i32::from(note.note % 12) * NOTE_SECTION;
        let intensity = (frame.level * LEVEL_GAIN).min(1.0);
        strip.draw_bar(base, NOTE_SECTION, note.color, intensity);
    }
    if frame.kick > TRIGGER_THRESHOLD {
        strip.draw_bar(KICK_START, KICK_LENGTH, KICK_COLOR, frame.kick);
    }
    if frame.snare > TRIGGER_THRESHOLD {
        strip.draw_bar(SNARE_START, SNARE_LENGTH, SNARE_COLOR, frame.snare);
    }
}
