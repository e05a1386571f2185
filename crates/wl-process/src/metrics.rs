//! Per-run metrics: period records and waiting-time samples.

use wl_core::{PeriodIndex, Tick};

use crate::{ProcessError, ProcessResult};

/// Queue state at the end of one period's service round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodRecord {
    pub period:       PeriodIndex,
    /// Tick of the service round (period start).
    pub tick:         Tick,
    /// Entities still waiting after the round.
    pub queue_length: u64,
    /// Entities served in the round.
    pub served:       u64,
}

/// Append-only store of period records and per-entity waits.
///
/// Records are kept in period order; waits in dequeue order.  Nothing is
/// ever removed or rewritten.
#[derive(Clone, Debug, Default)]
pub struct MetricsCollector {
    initial_backlog: u64,
    periods:         Vec<PeriodRecord>,
    waits:           Vec<u64>,
}

impl MetricsCollector {
    /// `initial_backlog` is reported as the final queue length until the
    /// first period record exists.
    pub fn new(initial_backlog: u64) -> Self {
        Self {
            initial_backlog,
            periods: Vec::new(),
            waits:   Vec::new(),
        }
    }

    // ── Recording ────────────────────────────────────────────────────────

    /// Record one served entity's waiting time.
    #[inline]
    pub fn record_wait(&mut self, wait: u64) {
        self.waits.push(wait);
    }

    /// Append the record for the period whose service round ran at `tick`.
    ///
    /// Period indices are assigned sequentially from 0.  Fails once the index
    /// would no longer fit a `PeriodIndex`.
    pub fn record_period(
        &mut self,
        tick:         Tick,
        queue_length: u64,
        served:       u64,
    ) -> ProcessResult<PeriodRecord> {
        let record = PeriodRecord {
            period: period_index(self.periods.len())?,
            tick,
            queue_length,
            served,
        };
        self.periods.push(record);
        Ok(record)
    }

    // ── Raw data ─────────────────────────────────────────────────────────

    pub fn periods(&self) -> &[PeriodRecord] {
        &self.periods
    }

    pub fn wait_times(&self) -> &[u64] {
        &self.waits
    }

    // ── Aggregates ───────────────────────────────────────────────────────

    /// Mean of all recorded waits; `0.0` if nothing was served.
    pub fn mean_wait_time(&self) -> f64 {
        if self.waits.is_empty() {
            return 0.0;
        }
        self.waits.iter().sum::<u64>() as f64 / self.waits.len() as f64
    }

    /// Queue length after the last period, or the initial backlog if no
    /// period has completed.
    pub fn final_queue_length(&self) -> u64 {
        self.periods
            .last()
            .map_or(self.initial_backlog, |r| r.queue_length)
    }

    /// Sum of `served` over all periods.
    pub fn total_served(&self) -> u64 {
        self.periods.iter().map(|r| r.served).sum()
    }
}

/// Index of the `n`-th period record.
pub(crate) fn period_index(n: usize) -> ProcessResult<PeriodIndex> {
    u32::try_from(n)
        .map(PeriodIndex)
        .map_err(|_| ProcessError::PeriodOverflow(n))
}
