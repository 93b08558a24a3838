//! Fire flicker effect
//!
//! Every pixel gets an independent warm red/orange tone on each step.

use embassy_time::Duration;

use super::Effect;
use crate::color::Rgb;
use crate::random;

const FLICKER_STEPS: usize = 30;
const FLICKER_DELAY: Duration = Duration::from_millis(50);

const RED_RANGE: (u8, u8) = (180, 255);
const GREEN_RANGE: (u8, u8) = (30, 80);

#[derive(Debug, Clone, Default)]
pub struct FireFlickerEffect {
    steps: usize,
}

impl FireFlickerEffect {
    pub const fn new() -> Self {
        Self { steps: 0 }
    }
}

impl Effect for FireFlickerEffect {
    fn reset(&mut self, _pixel_count: usize) {
        self.steps = 0;
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        for led in leds.iter_mut() {
            *led = Rgb {
                r: random::range_u8(RED_RANGE.0, RED_RANGE.1),
                g: random::range_u8(GREEN_RANGE.0, GREEN_RANGE.1),
                b: 0,
            };
        }
        self.steps += 1;
        FLICKER_DELAY
    }

    fn is_complete(&self) -> bool {
        self.steps >= FLICKER_STEPS
    }
}
