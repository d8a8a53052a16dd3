//! Structured tabulation events, decoupled from how (or whether) they get
//! rendered anywhere.
//!
//! Grounded on the teacher's `print_round_stats`, which formatted round
//! start/tally/elimination/winner detail straight to `log::info!`. That
//! function is restructured here into a trait with one method per event;
//! `LoggingObserver` reproduces the teacher's original log output so
//! existing behavior is the default, while a caller that wants no output
//! (or wants to capture events for a test or a UI) can supply its own
//! implementation instead. The core engine never formats a message itself.

use crate::decimal::Decimal;

/// One structured event emitted by the engine as tabulation proceeds.
#[derive(Debug, Clone)]
pub enum TabulationEvent<'a> {
    RoundStart {
        round: u32,
    },
    Tally {
        round: u32,
        candidate: &'a str,
        value: Decimal,
    },
    ThresholdSet {
        round: u32,
        threshold: Decimal,
    },
    Winner {
        round: u32,
        candidate: &'a str,
    },
    Eliminated {
        round: u32,
        candidate: &'a str,
    },
    Transfer {
        round: u32,
        from: &'a str,
        to: &'a str,
        value: Decimal,
    },
    Exhausted {
        round: u32,
        count: Decimal,
        reason: &'a str,
    },
    TieBreakResolved {
        round: u32,
        explanation: &'a str,
    },
}

/// Receives structured tabulation events. All methods default to a no-op so
/// an implementation only needs to override what it cares about.
pub trait TabulationObserver {
    fn on_event(&mut self, _event: &TabulationEvent) {}
}

/// Restores the teacher's original behavior: every event is logged through
/// the `log` facade at the same level `print_round_stats` used.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl TabulationObserver for LoggingObserver {
    fn on_event(&mut self, event: &TabulationEvent) {
        match *event {
            TabulationEvent::RoundStart { round } => {
                log::info!("round {}: starting", round);
            }
            TabulationEvent::Tally {
                round,
                candidate,
                value,
            } => {
                log::info!("round {}: {} has {} votes", round, candidate, value);
            }
            TabulationEvent::ThresholdSet { round, threshold } => {
                log::info!("round {}: winning threshold is {}", round, threshold);
            }
            TabulationEvent::Winner { round, candidate } => {
                log::info!("round {}: {} elected", round, candidate);
            }
            TabulationEvent::Eliminated { round, candidate } => {
                log::info!("round {}: {} eliminated", round, candidate);
            }
            TabulationEvent::Transfer {
                round,
                from,
                to,
                value,
            } => {
                log::debug!("round {}: {} transfers {} to {}", round, from, value, to);
            }
            TabulationEvent::Exhausted {
                round,
                count,
                reason,
            } => {
                log::debug!("round {}: {} ballots exhausted ({})", round, count, reason);
            }
            TabulationEvent::TieBreakResolved { round, explanation } => {
                log::info!("round {}: tie-break: {}", round, explanation);
            }
        }
    }
}

/// Observes nothing. Useful for benchmarks and tests that don't want the
/// `log` overhead or output noise.
#[derive(Debug, Default)]
pub struct SilentObserver;

impl TabulationObserver for SilentObserver {}

/// Cooperative cancellation, checked once per round by the engine.
/// `VotingErrors::Cancelled` is returned (no partial results) the first time
/// this signals `true`.
pub trait CancellationSignal {
    fn is_cancelled(&self) -> bool;
}

impl CancellationSignal for () {
    fn is_cancelled(&self) -> bool {
        false
    }
}
