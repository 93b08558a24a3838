//! Pixel buffer in front of the LED driver
//!
//! Effects only ever touch the logical pixels. Brightness is applied to a
//! separate output buffer at flush time, so effects that read back their
//! previous frame (trails, fades) see unscaled colors.

use smart_leds::brightness;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};

/// LED strip frame buffer with `MAX_LEDS` capacity
///
/// The active length is fixed at construction and never exceeds `MAX_LEDS`.
pub struct Strip<D: OutputDriver, const MAX_LEDS: usize> {
    driver: D,
    pixels: [Rgb; MAX_LEDS],
    output: [Rgb; MAX_LEDS],
    len: usize,
    brightness: u8,
    consecutive_failures: u32,
}

impl<D: OutputDriver, const MAX_LEDS: usize> Strip<D, MAX_LEDS> {
    /// Create a blank strip of `pixel_count` LEDs (clamped to `MAX_LEDS`)
    pub fn new(driver: D, pixel_count: usize, brightness: u8) -> Self {
        Self {
            driver,
            pixels: [BLACK; MAX_LEDS],
            output: [BLACK; MAX_LEDS],
            len: pixel_count.min(MAX_LEDS),
            brightness,
            consecutive_failures: 0,
        }
    }

    /// Number of LEDs on the strip
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the output brightness (0-255), used from the next flush on
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Set a single pixel, out of range indices are ignored
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels_mut().get_mut(index) {
            *pixel = color;
        }
    }

    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.pixels().get(index).copied()
    }

    /// Set every pixel to one color
    pub fn fill(&mut self, color: Rgb) {
        self.pixels_mut().fill(color);
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.len]
    }

    /// Push the frame to the hardware
    ///
    /// A failed write is not retried; the next flush sends a fresh frame.
    pub fn flush(&mut self) -> Result<(), D::Error> {
        let scaled = brightness(self.pixels[..self.len].iter().copied(), self.brightness);
        for (out, pixel) in self.output.iter_mut().zip(scaled) {
            *out = pixel;
        }

        match self.driver.write(&self.output[..self.len]) {
            Ok(()) => {
                self.consecutive_failures = 0;
                Ok(())
            }
            Err(err) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                Err(err)
            }
        }
    }

    /// Flushes that failed in a row since the last successful one
    pub const fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Forget previous failures, e.g. after the output was re-enabled
    pub fn clear_failures(&mut self) {
        self.consecutive_failures = 0;
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
