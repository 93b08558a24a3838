//! Shared test infrastructure for the scheduler integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;

use myrtio_effect_cycler::{
    ButtonEvent, ButtonId, CancellationSignal, Delay, Duration, Effect, EffectLibrary,
    InputSource, KeyEvent, KeySource, OutputDriver, Rgb, Scheduler, SchedulerConfig,
    StatusDisplay,
};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const FAKE_COLOR: Rgb = Rgb {
    r: 10,
    g: 20,
    b: 30,
};
pub const FAKE_STEP: Duration = Duration::from_millis(10);

pub const TEST_LIBRARY_CAP: usize = 8;
pub const TEST_MAX_LEDS: usize = 16;
pub const TEST_PIXELS: usize = 8;

// ============================================================================
// Input
// ============================================================================

/// Input replaying one scripted poll result per call, `None` once drained
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<ButtonEvent>>,
    pub polls: usize,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_script<I: IntoIterator<Item = Option<ButtonEvent>>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
            polls: 0,
        }
    }

    /// Queue a press for the next poll
    pub fn press(&mut self, id: ButtonId) {
        self.script.push_back(Some(ButtonEvent::pressed(id)));
    }

    /// Queue `count` empty polls
    pub fn idle(&mut self, count: usize) {
        for _ in 0..count {
            self.script.push_back(None);
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<ButtonEvent> {
        self.polls += 1;
        self.script.pop_front().flatten()
    }
}

pub fn pressed(id: ButtonId) -> Option<ButtonEvent> {
    Some(ButtonEvent::pressed(id))
}

pub fn released(id: ButtonId) -> Option<ButtonEvent> {
    Some(ButtonEvent::released(id))
}

/// Raw key scanner replaying scripted key transitions
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new<I: IntoIterator<Item = KeyEvent>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Option<KeyEvent> {
        self.keys.pop_front()
    }
}

// ============================================================================
// Output
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteError;

/// LED driver recording every accepted frame
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
    pub attempts: usize,
    /// Number of upcoming writes to reject
    pub fail_next: usize,
    pub always_fail: bool,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            always_fail: true,
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl OutputDriver for RecordingDriver {
    type Error = WriteError;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.attempts += 1;
        if self.always_fail {
            return Err(WriteError);
        }
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(WriteError);
        }
        self.frames.push(colors.to_vec());
        Ok(())
    }
}

/// Status display keeping the full history of texts
#[derive(Debug, Default)]
pub struct RecordingStatus {
    pub history: Vec<String>,
}

impl RecordingStatus {
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl StatusDisplay for RecordingStatus {
    fn set_status(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}

/// Delay that only records the requested durations
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub delays: Vec<Duration>,
}

impl Delay for RecordingDelay {
    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }
}

// ============================================================================
// Effects and signals
// ============================================================================

/// Fake effect with a fixed step count that counts its invocations
#[derive(Debug, Clone)]
pub struct CountingEffect {
    steps: usize,
    done: usize,
    pub resets: usize,
    pub step_calls: usize,
}

impl CountingEffect {
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            done: 0,
            resets: 0,
            step_calls: 0,
        }
    }
}

impl Effect for CountingEffect {
    fn reset(&mut self, _pixel_count: usize) {
        self.done = 0;
        self.resets += 1;
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        leds.fill(FAKE_COLOR);
        self.done += 1;
        self.step_calls += 1;
        FAKE_STEP
    }

    fn is_complete(&self) -> bool {
        self.done >= self.steps
    }
}

/// Signal that fires on its `n`-th query (1-based), never if `n == 0`
#[derive(Debug, Default)]
pub struct AbortAfter {
    pub n: usize,
    pub calls: usize,
}

impl AbortAfter {
    pub fn new(n: usize) -> Self {
        Self { n, calls: 0 }
    }
}

impl CancellationSignal for AbortAfter {
    fn check_interrupt(&mut self) -> bool {
        self.calls += 1;
        self.n != 0 && self.calls >= self.n
    }
}

// ============================================================================
// Scheduler fixtures
// ============================================================================

pub type TestScheduler = Scheduler<
    CountingEffect,
    ScriptedInput,
    RecordingDriver,
    RecordingStatus,
    RecordingDelay,
    TEST_LIBRARY_CAP,
    TEST_MAX_LEDS,
>;

pub fn test_config() -> SchedulerConfig {
    SchedulerConfig {
        pixel_count: TEST_PIXELS,
        brightness: 1.0,
        ..SchedulerConfig::default()
    }
}

pub fn counting_library(
    names: &[&'static str],
    steps: usize,
) -> EffectLibrary<CountingEffect, TEST_LIBRARY_CAP> {
    EffectLibrary::from_entries(names.iter().map(|name| (*name, CountingEffect::new(steps))))
        .unwrap()
}

pub fn scheduler_with(
    names: &[&'static str],
    steps: usize,
    input: ScriptedInput,
    driver: RecordingDriver,
    config: &SchedulerConfig,
) -> TestScheduler {
    TestScheduler::new(
        counting_library(names, steps),
        input,
        driver,
        RecordingStatus::default(),
        RecordingDelay::default(),
        config,
    )
    .unwrap()
}

pub fn scheduler(names: &[&'static str], steps: usize, input: ScriptedInput) -> TestScheduler {
    scheduler_with(names, steps, input, RecordingDriver::new(), &test_config())
}

pub fn step_calls(scheduler: &TestScheduler, index: usize) -> usize {
    scheduler.library().get(index).unwrap().effect().step_calls
}

pub fn resets(scheduler: &TestScheduler, index: usize) -> usize {
    scheduler.library().get(index).unwrap().effect().resets
}

pub fn is_blank(frame: &[Rgb]) -> bool {
    frame.iter().all(|pixel| *pixel == BLACK)
}
