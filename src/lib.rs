#![no_std]

pub mod bounds;
pub mod color;
pub mod effect;
pub mod math8;
pub mod scene;
pub mod strip;

pub use bounds::BarWindow;
pub use effect::{draw_bar, fade_strip};
pub use scene::{ChaseScene, Mode, MusicFrame, NoteBar};
pub use strip::{DEFAULT_FADE_FACTOR, Strip};

pub use color::{Rgb, rgb_from_u32, rgb_to_u32};
pub use math8::{clamp_unit, qadd8, scale8_f32};

/// Abstract LED driver trait
///
/// Implement this trait to push frames to real hardware.
/// [`Strip::show`] is generic over it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
