//! The `OutputWriter` trait implemented by all backend writers.

use wl_sim::ScenarioResult;

use crate::{OutputResult, PeriodRow, WaitRow};

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Write one period row.
    fn write_period(&mut self, row: &PeriodRow) -> OutputResult<()>;

    /// Write a batch of wait rows.
    fn write_waits(&mut self, rows: &[WaitRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Export a finished scenario through `writer`, then finish it.
pub fn write_result<W: OutputWriter>(writer: &mut W, result: &ScenarioResult) -> OutputResult<()> {
    for (record, cumulative) in result.periods.iter().zip(result.cumulative_served()) {
        writer.write_period(&PeriodRow::from_record(record, cumulative))?;
    }
    let waits: Vec<WaitRow> = result
        .all_wait_times
        .iter()
        .enumerate()
        .map(|(i, &wait_ticks)| WaitRow { order: i as u64, wait_ticks })
        .collect();
    writer.write_waits(&waits)?;
    writer.finish()
}
