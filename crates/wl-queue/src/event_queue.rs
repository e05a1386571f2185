//! `EventQueue` — pending process resumptions keyed by tick.
//!
//! The scheduler asks for the earliest tick with pending work, drains every
//! process due at that tick, and lets each one schedule its next resumption.
//!
//! Within a tick, processes come out in the order they were pushed.  At tick
//! 0 that is registration order; afterwards it is the order in which the
//! processes ran at their previous tick.  With fixed one-period offsets the
//! arrival-then-service order set at tick 0 therefore repeats every period.

use std::collections::BTreeMap;

use wl_core::{ProcessId, Tick};

/// A priority queue mapping simulation ticks → processes due at that tick.
#[derive(Debug, Default)]
pub struct EventQueue {
    inner: BTreeMap<Tick, Vec<ProcessId>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `process` to resume at `tick`, after anything already due then.
    pub fn push(&mut self, tick: Tick, process: ProcessId) {
        self.inner.entry(tick).or_default().push(process);
        self.total += 1;
    }

    /// Remove and return all processes scheduled for exactly `tick`, in push
    /// order.  Returns `None` if nothing is due then.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<ProcessId>> {
        let due = self.inner.remove(&tick)?;
        self.total -= due.len();
        Some(due)
    }

    /// The earliest tick with at least one pending resumption.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
