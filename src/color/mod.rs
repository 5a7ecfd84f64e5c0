mod packed;

use smart_leds::RGB8;

pub use packed::{rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
