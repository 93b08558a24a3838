//! Twinkle effect
//!
//! A quarter of the strip flashes random grey levels on a black background.

use embassy_time::Duration;

use super::Effect;
use crate::color::{BLACK, Rgb};
use crate::random;

const TWINKLE_STEPS: usize = 10;
const MIN_LEVEL: u8 = 100;

#[derive(Debug, Clone)]
pub struct TwinkleEffect {
    delay: Duration,
    steps: usize,
}

impl TwinkleEffect {
    pub const fn new(delay: Duration) -> Self {
        Self { delay, steps: 0 }
    }
}

impl Effect for TwinkleEffect {
    fn reset(&mut self, _pixel_count: usize) {
        self.steps = 0;
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        leds.fill(BLACK);
        for _ in 0..leds.len() / 4 {
            let level = random::range_u8(MIN_LEVEL, u8::MAX);
            let index = random::index(leds.len());
            leds[index] = Rgb {
                r: level,
                g: level,
                b: level,
            };
        }
        self.steps += 1;
        self.delay
    }

    fn is_complete(&self) -> bool {
        self.steps >= TWINKLE_STEPS
    }
}
