//! Simulation observer trait for progress reporting and data collection.

use wl_core::Tick;
use wl_process::PeriodRecord;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_period_end(&mut self, record: &PeriodRecord, _waits: &[u64]) {
///         println!("week {}: {} waiting", record.period.0 + 1, record.queue_length);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called when the clock reaches a tick with pending events, before any
    /// process runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every process due at `tick` has run.
    ///
    /// `resumed` is the number of process resumptions executed this tick.
    fn on_tick_end(&mut self, _tick: Tick, _resumed: usize) {}

    /// Called once per completed service round.
    ///
    /// `waits` holds the waiting times recorded during that round, in
    /// dequeue order.
    fn on_period_end(&mut self, _record: &PeriodRecord, _waits: &[u64]) {}

    /// Called once after the run reaches its end tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
