//! Meteor rain effect
//!
//! A bright head enters at the far end of the strip and travels towards
//! the first LED, leaving a trail that decays on every step. The run lasts
//! a few extra steps so the trail can fade out.

use embassy_time::Duration;

use super::Effect;
use crate::color::{BLACK, Rgb, scale_color};

const METEOR_DELAY: Duration = Duration::from_millis(50);
/// Steps appended after the head left the strip
const TAIL_STEPS: usize = 5;
/// Per-step trail decay, about 0.6
const TRAIL_DECAY: u8 = 153;

#[derive(Debug, Clone, Default)]
pub struct MeteorRainEffect {
    len: usize,
    head: usize,
}

impl MeteorRainEffect {
    pub const fn new() -> Self {
        Self { len: 0, head: 0 }
    }

    /// Head color at pixel `index`: dimmer red/green towards the far end
    #[allow(clippy::cast_possible_truncation)]
    fn head_color(index: usize) -> Rgb {
        let fade = (255 / (index + 1)) as u8;
        Rgb {
            r: fade,
            g: fade,
            b: 255,
        }
    }
}

impl Effect for MeteorRainEffect {
    fn reset(&mut self, pixel_count: usize) {
        self.len = pixel_count;
        self.head = 0;
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        if self.head == 0 {
            leds.fill(BLACK);
        }

        let target = self.len.checked_sub(self.head);
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if Some(i) == target {
                Self::head_color(i)
            } else {
                scale_color(*led, TRAIL_DECAY)
            };
        }
        self.head += 1;
        METEOR_DELAY
    }

    fn is_complete(&self) -> bool {
        self.head >= self.len + TAIL_STEPS
    }
}
