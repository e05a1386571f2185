//! Plain data row types written by output backends.

use wl_process::PeriodRecord;

/// One period's queue state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRow {
    pub period:            u32,
    pub tick:              u64,
    pub queue_length:      u64,
    pub served:            u64,
    /// Served over all periods up to and including this one.
    pub cumulative_served: u64,
}

impl PeriodRow {
    pub fn from_record(record: &PeriodRecord, cumulative_served: u64) -> Self {
        Self {
            period:       record.period.0,
            tick:         record.tick.0,
            queue_length: record.queue_length,
            served:       record.served,
            cumulative_served,
        }
    }
}

/// One served entity's wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitRow {
    /// Zero-based position in dequeue order.
    pub order:      u64,
    pub wait_ticks: u64,
}
