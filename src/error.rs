use core::fmt;

use crate::input::ButtonId;

/// Invalid startup configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Pixel count is zero or larger than the strip buffer
    PixelCount { requested: usize, max: usize },
    /// Brightness outside of 0.0-1.0
    Brightness(f32),
    /// Step delay is negative or not finite
    StepDelay(f32),
    /// The same button is wired to more than one key
    DuplicateButton(ButtonId),
}

/// Errors raised while building the scheduler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchedulerError {
    /// The effect library has no entries
    EmptyLibrary,
    /// The effect library capacity is exhausted
    LibraryFull,
    Config(ConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelCount { requested, max } => {
                write!(f, "pixel count {} outside of 1..={}", requested, max)
            }
            Self::Brightness(value) => write!(f, "brightness {} outside of 0.0..=1.0", value),
            Self::StepDelay(value) => write!(f, "invalid step delay {}s", value),
            Self::DuplicateButton(id) => {
                write!(f, "button {} is mapped to several keys", id.as_str())
            }
        }
    }
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLibrary => f.write_str("effect library is empty"),
            Self::LibraryFull => f.write_str("effect library is full"),
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
        }
    }
}

impl core::error::Error for ConfigError {}

impl core::error::Error for SchedulerError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for SchedulerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
