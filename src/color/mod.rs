mod utils;

use smart_leds::RGB8;

pub use utils::{BLACK, rgb_from_u32, scale_color, wheel};

pub type Rgb = RGB8;
