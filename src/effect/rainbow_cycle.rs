//! Rainbow cycling effect
//!
//! Spreads one full turn of the color wheel over the strip and rotates it
//! by one wheel position per step.

use embassy_time::Duration;

use super::Effect;
use crate::color::{Rgb, wheel};

/// Wheel positions visited by one run
const CYCLE_STEPS: usize = 255;

#[derive(Debug, Clone)]
pub struct RainbowCycleEffect {
    delay: Duration,
    offset: usize,
}

impl RainbowCycleEffect {
    pub const fn new(delay: Duration) -> Self {
        Self { delay, offset: 0 }
    }
}

impl Effect for RainbowCycleEffect {
    fn reset(&mut self, _pixel_count: usize) {
        self.offset = 0;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        let len = leds.len().max(1);
        for (i, led) in leds.iter_mut().enumerate() {
            let pos = (i * 256 / len + self.offset) & 0xFF;
            *led = wheel(pos as u8);
        }
        self.offset += 1;
        self.delay
    }

    fn is_complete(&self) -> bool {
        self.offset >= CYCLE_STEPS
    }
}
