//! Lightning effect
//!
//! A run is a few strikes. Each strike is a burst of short single-pixel
//! white flashes followed by a dark pause of random length.

use embassy_time::Duration;

use super::Effect;
use crate::color::{BLACK, Rgb};
use crate::random;

const STRIKES: u8 = 3;
const MAX_FLASHES: u8 = 3;
const FLASH_DURATION: Duration = Duration::from_millis(20);
const DARK_MIN_MS: u32 = 200;
const DARK_MAX_MS: u32 = 1000;

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Flashes left in the current strike, `None` before the strike began
    Flashing(Option<u8>),
    Dark,
}

#[derive(Debug, Clone)]
pub struct LightningEffect {
    strikes_done: u8,
    phase: Phase,
    lit: Option<usize>,
}

impl Default for LightningEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl LightningEffect {
    pub const fn new() -> Self {
        Self {
            strikes_done: 0,
            phase: Phase::Flashing(None),
            lit: None,
        }
    }

    fn clear_lit(&mut self, leds: &mut [Rgb]) {
        if let Some(led) = self.lit.take().and_then(|index| leds.get_mut(index)) {
            *led = BLACK;
        }
    }
}

impl Effect for LightningEffect {
    fn reset(&mut self, _pixel_count: usize) {
        *self = Self::new();
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        match self.phase {
            Phase::Flashing(remaining) => {
                let remaining = match remaining {
                    Some(remaining) => {
                        self.clear_lit(leds);
                        remaining
                    }
                    None => {
                        leds.fill(BLACK);
                        random::range_u8(1, MAX_FLASHES)
                    }
                };

                let index = random::index(leds.len());
                if let Some(led) = leds.get_mut(index) {
                    *led = WHITE;
                    self.lit = Some(index);
                }

                let remaining = remaining.saturating_sub(1);
                self.phase = if remaining == 0 {
                    Phase::Dark
                } else {
                    Phase::Flashing(Some(remaining))
                };
                FLASH_DURATION
            }
            Phase::Dark => {
                self.clear_lit(leds);
                self.strikes_done += 1;
                self.phase = Phase::Flashing(None);
                Duration::from_millis(u64::from(random::range_u32(DARK_MIN_MS, DARK_MAX_MS)))
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.strikes_done >= STRIKES
    }
}
