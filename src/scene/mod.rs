//! Per-frame scenes
//!
//! Each scene decays the previous frame and layers bars on top of it.
//! Scenes never pick colors from a hue wheel: anything hue-driven comes
//! from the caller as ready [`Rgb`](crate::color::Rgb) values.

mod ambient;
mod chase;
mod music;
mod sparkle;

pub use ambient::{AMBIENT_FADE_FACTOR, AMBIENT_INTENSITY, render_ambient};
pub use chase::{CHASE_FADE_FACTOR, CHASE_STEP, ChaseScene};
pub use music::{
    KICK_COLOR, KICK_LENGTH, KICK_START, MUSIC_FADE_FACTOR, MusicFrame, NOTE_SECTION, NoteBar, SNARE_COLOR,
    SNARE_LENGTH, SNARE_START, TRIGGER_THRESHOLD, render_music,
};
pub use sparkle::{
    SPARKLE_COLORS, SPARKLE_FADE_FACTOR, TREE_FADE_FACTOR, TREE_PALETTE, render_sparkle,
    render_tree,
};

const MODE_NAME_MUSIC: &str = "music";
const MODE_NAME_AMBIENT: &str = "ambient";
const MODE_NAME_OFF: &str = "off";
const MODE_NAME_TREE: &str = "tree";
const MODE_NAME_CHASE: &str = "chase";
const MODE_NAME_SPARKLE: &str = "sparkle";

const MODE_ID_MUSIC: u8 = 0;
const MODE_ID_AMBIENT: u8 = 1;
const MODE_ID_OFF: u8 = 2;
const MODE_ID_TREE: u8 = 3;
const MODE_ID_CHASE: u8 = 4;
const MODE_ID_SPARKLE: u8 = 5;

/// Known scene modes that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Music = MODE_ID_MUSIC,
    Ambient = MODE_ID_AMBIENT,
    Off = MODE_ID_OFF,
    Tree = MODE_ID_TREE,
    Chase = MODE_ID_CHASE,
    Sparkle = MODE_ID_SPARKLE,
}

impl Mode {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            MODE_ID_MUSIC => Some(Self::Music),
            MODE_ID_AMBIENT => Some(Self::Ambient),
            MODE_ID_OFF => Some(Self::Off),
            MODE_ID_TREE => Some(Self::Tree),
            MODE_ID_CHASE => Some(Self::Chase),
            MODE_ID_SPARKLE => Some(Self::Sparkle),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub fn parse_from_str(name: &str) -> Option<Self> {
        match name {
            MODE_NAME_MUSIC => Some(Self::Music),
            MODE_NAME_AMBIENT => Some(Self::Ambient),
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_TREE => Some(Self::Tree),
            MODE_NAME_CHASE => Some(Self::Chase),
            MODE_NAME_SPARKLE => Some(Self::Sparkle),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Music => MODE_NAME_MUSIC,
            Self::Ambient => MODE_NAME_AMBIENT,
            Self::Off => MODE_NAME_OFF,
            Self::Tree => MODE_NAME_TREE,
            Self::Chase => MODE_NAME_CHASE,
            Self::Sparkle => MODE_NAME_SPARKLE,
        }
    }
}
