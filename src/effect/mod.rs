//! Frame buffer effects
//!
//! Stateless operations over packed `0x00RRGGBB` pixels. Nothing here
//! reports errors: out-of-range input is clamped, and input that cannot
//! produce a change leaves the buffer untouched.

mod bar;
mod fade;

pub use bar::draw_bar;
pub use fade::fade_strip;
