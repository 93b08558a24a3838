//! Single dot running from the first LED to the last

use embassy_time::Duration;

use super::Effect;
use crate::color::{BLACK, Rgb};

#[derive(Debug, Clone)]
pub struct ColorChaseEffect {
    color: Rgb,
    delay: Duration,
    len: usize,
    position: usize,
}

impl ColorChaseEffect {
    pub const fn new(color: Rgb, delay: Duration) -> Self {
        Self {
            color,
            delay,
            len: 0,
            position: 0,
        }
    }
}

impl Effect for ColorChaseEffect {
    fn reset(&mut self, pixel_count: usize) {
        self.len = pixel_count;
        self.position = 0;
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        leds.fill(BLACK);
        if let Some(led) = leds.get_mut(self.position) {
            *led = self.color;
        }
        self.position += 1;
        self.delay
    }

    fn is_complete(&self) -> bool {
        self.position >= self.len
    }
}
