//! Drives a single effect run

use crate::OutputDriver;
use crate::checkpoint::CancellationSignal;
use crate::delay::Delay;
use crate::effect::Effect;
use crate::log::log;
use crate::strip::Strip;

/// How an effect run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every step was rendered
    Completed,
    /// The cancellation signal fired after a step
    Aborted,
}

/// Summary of an effect run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Rendered steps, each flushed exactly once
    pub steps: u32,
    /// Flushes the driver rejected
    pub failed_flushes: u32,
}

/// Run `effect` from its first step until it completes or is cancelled
///
/// Every step renders, flushes once, holds for the duration the effect
/// asked for and then queries `signal`. A rejected flush is logged and the
/// animation goes on with the next step. A run that renders nothing queries
/// `signal` once, so input is never starved.
pub fn run_effect<E, D, W, S, const MAX_LEDS: usize>(
    effect: &mut E,
    strip: &mut Strip<D, MAX_LEDS>,
    delay: &mut W,
    signal: &mut S,
) -> RunReport
where
    E: Effect + ?Sized,
    D: OutputDriver,
    W: Delay + ?Sized,
    S: CancellationSignal + ?Sized,
{
    let mut report = RunReport {
        outcome: RunOutcome::Completed,
        steps: 0,
        failed_flushes: 0,
    };

    effect.reset(strip.len());
    while !effect.is_complete() {
        let hold = effect.step(strip.pixels_mut());
        report.steps += 1;

        if let Err(err) = strip.flush() {
            report.failed_flushes += 1;
            log!("[run_effect] flush failed: {:?}", err);
        }

        delay.delay(hold);

        if signal.check_interrupt() {
            report.outcome = RunOutcome::Aborted;
            break;
        }
    }

    // An effect without steps still gives the buttons one look
    if report.steps == 0 && signal.check_interrupt() {
        report.outcome = RunOutcome::Aborted;
    }

    effect.finish(strip.pixels_mut());
    report
}
