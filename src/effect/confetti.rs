//! Confetti effect
//!
//! Random wheel colors sprinkled over a fifth of the strip.

use embassy_time::Duration;

use super::Effect;
use crate::color::{BLACK, Rgb, wheel};
use crate::random;

const CONFETTI_STEPS: usize = 20;

#[derive(Debug, Clone)]
pub struct ConfettiEffect {
    delay: Duration,
    steps: usize,
}

impl ConfettiEffect {
    pub const fn new(delay: Duration) -> Self {
        Self { delay, steps: 0 }
    }
}

impl Effect for ConfettiEffect {
    fn reset(&mut self, _pixel_count: usize) {
        self.steps = 0;
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        leds.fill(BLACK);
        for _ in 0..leds.len() / 5 {
            let index = random::index(leds.len());
            leds[index] = wheel(random::range_u8(0, u8::MAX));
        }
        self.steps += 1;
        self.delay
    }

    fn is_complete(&self) -> bool {
        self.steps >= CONFETTI_STEPS
    }
}
