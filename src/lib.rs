#![no_std]

mod log;

pub mod channel;
pub mod checkpoint;
pub mod color;
pub mod config;
pub mod delay;
pub mod effect;
pub mod error;
pub mod input;
pub mod library;
pub mod math8;
pub mod random;
pub mod runner;
pub mod scheduler;
pub mod status;
pub mod strip;

pub use channel::{ButtonChannel, ButtonReceiver, ButtonSender, LatestButtonChannel};
pub use checkpoint::{CancellationSignal, Checkpoint, Mode, SchedulerState};
pub use config::SchedulerConfig;
pub use delay::{BlockingDelay, Delay};
pub use effect::{BUILTIN_EFFECT_COUNT, Effect, EffectId, EffectSlot};
pub use error::{ConfigError, SchedulerError};
pub use input::{
    ButtonEvent, ButtonId, ButtonMap, EventKind, InputSource, KeyEvent, KeySource, MappedInput,
};
pub use library::{BuiltinLibrary, EffectDescriptor, EffectLibrary};
pub use runner::{RunOutcome, RunReport, run_effect};
pub use scheduler::{BuiltinScheduler, Scheduler, TickReport};
pub use status::{NoDisplay, StatusDisplay};
pub use strip::Strip;

pub use color::Rgb;
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler is generic over this trait.
pub trait OutputDriver {
    /// Error reported when a frame could not be pushed
    type Error: core::fmt::Debug;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
