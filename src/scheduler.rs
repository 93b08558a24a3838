//! Effect scheduler - the main loop
//!
//! One loop iteration derives the [`Mode`] from the state flags, renders it,
//! and then handles the button that interrupted it (if any).
//!
//! ```ignore
//! let mut scheduler = Scheduler::with_builtin_effects(
//!     input, driver, display, BlockingDelay, &SchedulerConfig::default(),
//! )?;
//! scheduler.run();
//! ```

use crate::OutputDriver;
use crate::checkpoint::{CancellationSignal, Checkpoint, Mode, SchedulerState};
use crate::color::BLACK;
use crate::config::SchedulerConfig;
use crate::delay::Delay;
use crate::effect::{BUILTIN_EFFECT_COUNT, Effect, EffectSlot};
use crate::error::SchedulerError;
use crate::input::{ButtonId, InputSource, KeySource, MappedInput};
use crate::library::{BuiltinLibrary, EffectLibrary};
use crate::log::log;
use crate::runner::{RunOutcome, run_effect};
use crate::status::{self, StatusDisplay};
use crate::strip::Strip;

/// Result of one loop iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Mode rendered during the iteration
    pub mode: Mode,
    /// Outcome of the effect run, `None` unless the mode was active
    pub outcome: Option<RunOutcome>,
    /// Button handled after the dispatch
    pub handled: Option<ButtonId>,
}

/// Owns the state, the effect catalog and every peripheral
pub struct Scheduler<E, I, D, S, W, const CAP: usize, const MAX_LEDS: usize>
where
    D: OutputDriver,
{
    library: EffectLibrary<E, CAP>,
    input: I,
    strip: Strip<D, MAX_LEDS>,
    status: S,
    delay: W,
    state: SchedulerState,
    config: SchedulerConfig,
    /// Pause was just requested, show the effect name once
    announce_pause: bool,
}

/// Scheduler over the built-in effect catalog
pub type BuiltinScheduler<I, D, S, W, const MAX_LEDS: usize> =
    Scheduler<EffectSlot, I, D, S, W, BUILTIN_EFFECT_COUNT, MAX_LEDS>;

impl<E, I, D, S, W, const CAP: usize, const MAX_LEDS: usize>
    Scheduler<E, I, D, S, W, CAP, MAX_LEDS>
where
    E: Effect,
    I: InputSource,
    D: OutputDriver,
    S: StatusDisplay,
    W: Delay,
{
    /// Validate the configuration and library and show the boot status
    pub fn new(
        library: EffectLibrary<E, CAP>,
        input: I,
        driver: D,
        mut display: S,
        delay: W,
        config: &SchedulerConfig,
    ) -> Result<Self, SchedulerError> {
        config.validate(MAX_LEDS)?;
        if library.is_empty() {
            return Err(SchedulerError::EmptyLibrary);
        }

        display.set_status(status::STATUS_BOOTING);

        Ok(Self {
            library,
            input,
            strip: Strip::new(driver, config.pixel_count, config.brightness_u8()),
            status: display,
            delay,
            state: SchedulerState::new(),
            config: *config,
            announce_pause: false,
        })
    }

    /// Run the main loop forever
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Execute one loop iteration
    pub fn tick(&mut self) -> TickReport {
        let mode = self.state.mode();
        let outcome = match mode {
            Mode::Disabled => {
                self.render_idle(status::STATUS_OFF);
                None
            }
            Mode::Paused => {
                self.render_idle(status::STATUS_PAUSED);
                None
            }
            Mode::Active => Some(self.run_current()),
        };

        let handled = self.handle_interrupt();
        self.check_output_health();

        TickReport {
            mode,
            outcome,
            handled,
        }
    }

    /// Run the current effect until it completes or a checkpoint aborts it
    fn run_current(&mut self) -> RunOutcome {
        let index = self.state.current_index();
        let Some(entry) = self.library.get_mut(index) else {
            // Unreachable while the index invariant holds
            return RunOutcome::Aborted;
        };

        self.status.set_status(entry.name());
        log!("[Scheduler] launching effect: {}", entry.name());

        let mut checkpoint = Checkpoint::new(&mut self.input, &mut self.state);
        let report = run_effect(
            entry.effect_mut(),
            &mut self.strip,
            &mut self.delay,
            &mut checkpoint,
        );
        report.outcome
    }

    /// Blank output for the paused and disabled modes, then poll once
    fn render_idle(&mut self, text: &str) {
        self.strip.fill(BLACK);
        if let Err(err) = self.strip.flush() {
            log!("[Scheduler] blank flush failed: {:?}", err);
        }
        self.status.set_status(text);

        if self.announce_pause {
            self.announce_pause = false;
            if let Some(name) = self.current_name() {
                self.status.set_status(name);
                self.delay.delay(self.config.status_hold);
                self.status.set_status(text);
            }
        }

        self.delay.delay(self.config.idle_delay);

        // Only the recorded interrupt matters here, the abort flag does not
        let _ = Checkpoint::new(&mut self.input, &mut self.state).check_interrupt();
    }

    /// Apply the button that interrupted this iteration
    fn handle_interrupt(&mut self) -> Option<ButtonId> {
        let button = self.state.take_interrupt()?;
        log!("[Scheduler] processing button: {}", button.as_str());

        match button {
            ButtonId::Advance => {
                self.state.advance(self.library.len());
                if let Some(name) = self.current_name() {
                    self.status.set_status(&status::coming_up(name));
                    self.delay.delay(self.config.status_hold);
                }
            }
            ButtonId::Disable => {
                self.state.set_led_enabled(false);
                log!("[Scheduler] LEDs turned off");
            }
            ButtonId::Enable => {
                self.state.set_led_enabled(true);
                self.strip.clear_failures();
                log!("[Scheduler] LEDs turned on");
            }
            ButtonId::TogglePause => {
                // The checkpoint already flipped `running`
                if self.state.is_running() {
                    if let Some(name) = self.current_name() {
                        self.status.set_status(name);
                    }
                } else {
                    self.announce_pause = self.state.is_led_enabled();
                }
            }
        }

        Some(button)
    }

    /// Degrade to disabled once the driver keeps rejecting frames
    fn check_output_health(&mut self) {
        if self.state.is_led_enabled()
            && self.strip.consecutive_failures() >= self.config.fault_threshold.max(1)
        {
            log!(
                "[Scheduler] output fault after {} failed flushes, disabling",
                self.strip.consecutive_failures()
            );
            self.state.set_led_enabled(false);
        }
    }

    fn current_name(&self) -> Option<&'static str> {
        self.library.name(self.state.current_index())
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn library(&self) -> &EffectLibrary<E, CAP> {
        &self.library
    }

    pub fn strip(&self) -> &Strip<D, MAX_LEDS> {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut Strip<D, MAX_LEDS> {
        &mut self.strip
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn delay(&self) -> &W {
        &self.delay
    }
}

impl<E, K, D, S, W, const CAP: usize, const MAX_LEDS: usize>
    Scheduler<E, MappedInput<K>, D, S, W, CAP, MAX_LEDS>
where
    E: Effect,
    K: KeySource,
    D: OutputDriver,
    S: StatusDisplay,
    W: Delay,
{
    /// Scheduler reading raw keys, classified through `config.button_map`
    pub fn with_keys(
        library: EffectLibrary<E, CAP>,
        keys: K,
        driver: D,
        display: S,
        delay: W,
        config: &SchedulerConfig,
    ) -> Result<Self, SchedulerError> {
        let input = MappedInput::new(keys, config.button_map);
        Self::new(library, input, driver, display, delay, config)
    }
}

impl<I, D, S, W, const MAX_LEDS: usize> BuiltinScheduler<I, D, S, W, MAX_LEDS>
where
    I: InputSource,
    D: OutputDriver,
    S: StatusDisplay,
    W: Delay,
{
    /// Scheduler cycling through every built-in effect
    pub fn with_builtin_effects(
        input: I,
        driver: D,
        display: S,
        delay: W,
        config: &SchedulerConfig,
    ) -> Result<Self, SchedulerError> {
        let library = BuiltinLibrary::builtin(config.step_delay);
        Self::new(library, input, driver, display, delay, config)
    }
}
