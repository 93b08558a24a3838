//! Startup configuration
//!
//! Everything is compiled in; boards override single fields of
//! [`SchedulerConfig::default`].

use embassy_time::Duration;

use crate::error::ConfigError;
use crate::input::ButtonMap;
use crate::math8::unit_to_u8;

pub const DEFAULT_PIXEL_COUNT: usize = 30;
pub const DEFAULT_BRIGHTNESS: f32 = 0.3;
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(50);
pub const DEFAULT_IDLE_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_STATUS_HOLD: Duration = Duration::from_millis(500);
pub const DEFAULT_FAULT_THRESHOLD: u32 = 8;

/// Configuration for the effect scheduler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulerConfig {
    /// Number of LEDs on the strip
    pub pixel_count: usize,
    /// Output brightness, 0.0-1.0, applied at flush
    pub brightness: f32,
    /// Pace of the effects without a fixed timing of their own
    pub step_delay: Duration,
    /// Hardware key index to button mapping, applied by
    /// [`Scheduler::with_keys`](crate::Scheduler::with_keys)
    pub button_map: ButtonMap,
    /// Sleep of an idle (paused or disabled) loop iteration
    pub idle_delay: Duration,
    /// How long transient status messages stay visible
    pub status_hold: Duration,
    /// Consecutive failed flushes before the output is disabled
    pub fault_threshold: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            pixel_count: DEFAULT_PIXEL_COUNT,
            brightness: DEFAULT_BRIGHTNESS,
            step_delay: DEFAULT_STEP_DELAY,
            button_map: ButtonMap::default(),
            idle_delay: DEFAULT_IDLE_DELAY,
            status_hold: DEFAULT_STATUS_HOLD,
            fault_threshold: DEFAULT_FAULT_THRESHOLD,
        }
    }
}

impl SchedulerConfig {
    /// Set the step delay from seconds
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_step_delay_secs(mut self, seconds: f32) -> Result<Self, ConfigError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ConfigError::StepDelay(seconds));
        }
        let micros = libm::roundf(seconds * 1_000_000.0) as u64;
        self.step_delay = Duration::from_micros(micros);
        Ok(self)
    }

    /// Check the configuration against a strip buffer of `max_leds` LEDs
    pub fn validate(&self, max_leds: usize) -> Result<(), ConfigError> {
        if self.pixel_count == 0 || self.pixel_count > max_leds {
            return Err(ConfigError::PixelCount {
                requested: self.pixel_count,
                max: max_leds,
            });
        }
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(ConfigError::Brightness(self.brightness));
        }
        if let Some(id) = self.button_map.duplicate() {
            return Err(ConfigError::DuplicateButton(id));
        }
        Ok(())
    }

    /// Brightness on the 0-255 scale used by the strip
    pub fn brightness_u8(&self) -> u8 {
        unit_to_u8(self.brightness)
    }
}
