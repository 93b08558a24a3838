//! Bounce effect
//!
//! A single dot travels to the far end of the strip and back.

use embassy_time::Duration;

use super::Effect;
use crate::color::{BLACK, Rgb};

#[derive(Debug, Clone)]
pub struct BounceEffect {
    color: Rgb,
    delay: Duration,
    len: usize,
    step: usize,
}

impl BounceEffect {
    pub const fn new(color: Rgb, delay: Duration) -> Self {
        Self {
            color,
            delay,
            len: 0,
            step: 0,
        }
    }

    /// Dot position at step `step`: `0..len` forward, then `len-1..=0` back
    const fn position(&self, step: usize) -> usize {
        if step < self.len {
            step
        } else {
            2 * self.len - 1 - step
        }
    }
}

impl Effect for BounceEffect {
    fn reset(&mut self, pixel_count: usize) {
        self.len = pixel_count;
        self.step = 0;
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        leds.fill(BLACK);
        if let Some(led) = leds.get_mut(self.position(self.step)) {
            *led = self.color;
        }
        self.step += 1;
        self.delay
    }

    fn is_complete(&self) -> bool {
        self.step >= 2 * self.len
    }
}
