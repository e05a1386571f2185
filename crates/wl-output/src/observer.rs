//! `ScenarioOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use wl_core::Tick;
use wl_process::PeriodRecord;
use wl_sim::SimObserver;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, PeriodRow, WaitRow};

/// A [`SimObserver`] that streams period rows and waits to any
/// [`OutputWriter`] backend while the run executes.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ScenarioOutputObserver<W: OutputWriter> {
    writer:            W,
    cumulative_served: u64,
    waits_written:     u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> ScenarioOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cumulative_served: 0,
            waits_written:     0,
            last_error:        None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for ScenarioOutputObserver<W> {
    fn on_period_end(&mut self, record: &PeriodRecord, waits: &[u64]) {
        self.cumulative_served += record.served;
        let row = PeriodRow::from_record(record, self.cumulative_served);
        let result = self.writer.write_period(&row);
        self.store_err(result);

        if !waits.is_empty() {
            let start = self.waits_written;
            let rows: Vec<WaitRow> = waits
                .iter()
                .enumerate()
                .map(|(i, &wait_ticks)| WaitRow { order: start + i as u64, wait_ticks })
                .collect();
            self.waits_written += rows.len() as u64;
            let result = self.writer.write_waits(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
