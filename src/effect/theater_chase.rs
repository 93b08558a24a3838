//! Theater chase effect
//!
//! Every third pixel is lit; the lit set shifts by one on each step.

use embassy_time::Duration;

use super::Effect;
use crate::color::{BLACK, Rgb};

/// Spacing between lit pixels, also the number of steps in one run
const SPACING: usize = 3;

#[derive(Debug, Clone)]
pub struct TheaterChaseEffect {
    color: Rgb,
    delay: Duration,
    phase: usize,
}

impl TheaterChaseEffect {
    pub const fn new(color: Rgb, delay: Duration) -> Self {
        Self {
            color,
            delay,
            phase: 0,
        }
    }

    fn paint(leds: &mut [Rgb], phase: usize, color: Rgb) {
        for led in leds.iter_mut().skip(phase).step_by(SPACING) {
            *led = color;
        }
    }
}

impl Effect for TheaterChaseEffect {
    fn reset(&mut self, _pixel_count: usize) {
        self.phase = 0;
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        if let Some(previous) = self.phase.checked_sub(1) {
            Self::paint(leds, previous, BLACK);
        }
        Self::paint(leds, self.phase, self.color);
        self.phase += 1;
        self.delay
    }

    fn is_complete(&self) -> bool {
        self.phase >= SPACING
    }

    fn finish(&mut self, leds: &mut [Rgb]) {
        if let Some(last) = self.phase.checked_sub(1) {
            Self::paint(leds, last, BLACK);
        }
    }
}
