//! Scheduler state and the cooperative interrupt checkpoint

use crate::input::{ButtonId, InputSource};
use crate::log::log;

/// Rendering mode derived from the scheduler flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Running an effect
    Active,
    /// Output on, animation halted
    Paused,
    /// Output off; takes precedence over pause
    Disabled,
}

/// State shared by the scheduler and the checkpoint
///
/// `current_index` only moves forward through [`SchedulerState::advance`],
/// which keeps it inside the library bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchedulerState {
    current_index: usize,
    running: bool,
    led_enabled: bool,
    last_interrupt: Option<ButtonId>,
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulerState {
    /// First effect, running, output enabled
    pub const fn new() -> Self {
        Self {
            current_index: 0,
            running: true,
            led_enabled: true,
            last_interrupt: None,
        }
    }

    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn is_led_enabled(&self) -> bool {
        self.led_enabled
    }

    pub const fn last_interrupt(&self) -> Option<ButtonId> {
        self.last_interrupt
    }

    pub const fn mode(&self) -> Mode {
        if !self.led_enabled {
            Mode::Disabled
        } else if !self.running {
            Mode::Paused
        } else {
            Mode::Active
        }
    }

    /// Move to the next effect of a library with `len` entries
    pub fn advance(&mut self, len: usize) {
        self.current_index = (self.current_index + 1) % len.max(1);
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    pub fn set_led_enabled(&mut self, enabled: bool) {
        self.led_enabled = enabled;
    }

    pub fn record_interrupt(&mut self, button: ButtonId) {
        self.last_interrupt = Some(button);
    }

    /// Consume the pending interrupt
    pub fn take_interrupt(&mut self) -> Option<ButtonId> {
        self.last_interrupt.take()
    }
}

/// Cancellation token queried by the effect runner between steps
pub trait CancellationSignal {
    /// `true` if the running effect must stop now
    fn check_interrupt(&mut self) -> bool;
}

impl<T: CancellationSignal + ?Sized> CancellationSignal for &mut T {
    fn check_interrupt(&mut self) -> bool {
        (**self).check_interrupt()
    }
}

/// Checkpoint polling the buttons on behalf of a running effect
///
/// Each call polls at most one event and never blocks.
pub struct Checkpoint<'a, I> {
    input: &'a mut I,
    state: &'a mut SchedulerState,
}

impl<'a, I: InputSource> Checkpoint<'a, I> {
    pub fn new(input: &'a mut I, state: &'a mut SchedulerState) -> Self {
        Self { input, state }
    }
}

impl<I: InputSource> CancellationSignal for Checkpoint<'_, I> {
    fn check_interrupt(&mut self) -> bool {
        if let Some(event) = self.input.poll_event() {
            if event.is_pressed() {
                log!("[Checkpoint] interrupt detected: {}", event.id.as_str());
                self.state.record_interrupt(event.id);
                if event.id == ButtonId::TogglePause {
                    self.state.toggle_running();
                    log!("[Checkpoint] running: {}", self.state.is_running());
                }
                return true;
            }
        }

        !self.state.is_running()
    }
}
