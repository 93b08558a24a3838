//! Pulse effect
//!
//! Fades the whole strip in and out once with a triangular envelope.

use embassy_time::Duration;

use super::Effect;
use crate::color::Rgb;

const DEFAULT_PULSE_STEPS: u16 = 50;

#[derive(Debug, Clone)]
pub struct PulseEffect {
    color: Rgb,
    delay: Duration,
    steps: u16,
    current: u16,
}

impl PulseEffect {
    pub const fn new(color: Rgb, delay: Duration) -> Self {
        Self {
            color,
            delay,
            steps: DEFAULT_PULSE_STEPS,
            current: 0,
        }
    }

    /// Set the number of steps of one pulse
    #[must_use]
    pub const fn with_steps(mut self, steps: u16) -> Self {
        self.steps = steps;
        self
    }

    /// Envelope value at step `i`: 0 at both ends, 1 in the middle
    fn envelope(&self, i: u16) -> f32 {
        let progress = f32::from(i) / f32::from(self.steps.max(1));
        1.0 - libm::fabsf(progress - 0.5) * 2.0
    }
}

impl Effect for PulseEffect {
    fn reset(&mut self, _pixel_count: usize) {
        self.current = 0;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        let scale = self.envelope(self.current).clamp(0.0, 1.0);
        let channel = |c: u8| (f32::from(c) * scale) as u8;
        let color = Rgb {
            r: channel(self.color.r),
            g: channel(self.color.g),
            b: channel(self.color.b),
        };
        leds.fill(color);
        self.current += 1;
        self.delay
    }

    fn is_complete(&self) -> bool {
        self.current >= self.steps
    }
}
