//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `<stem>_periods.csv`
//! - `<stem>_waits.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PeriodRow, WaitRow};

/// Writes scenario output to two CSV files.
pub struct CsvWriter {
    periods:  Writer<File>,
    waits:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path, stem: &str) -> OutputResult<Self> {
        let mut periods = Writer::from_path(dir.join(format!("{stem}_periods.csv")))?;
        periods.write_record(["period", "tick", "queue_length", "served", "cumulative_served"])?;

        let mut waits = Writer::from_path(dir.join(format!("{stem}_waits.csv")))?;
        waits.write_record(["order", "wait_ticks"])?;

        Ok(Self {
            periods,
            waits,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_period(&mut self, row: &PeriodRow) -> OutputResult<()> {
        self.periods.write_record(&[
            row.period.to_string(),
            row.tick.to_string(),
            row.queue_length.to_string(),
            row.served.to_string(),
            row.cumulative_served.to_string(),
        ])?;
        Ok(())
    }

    fn write_waits(&mut self, rows: &[WaitRow]) -> OutputResult<()> {
        for row in rows {
            self.waits
                .write_record(&[row.order.to_string(), row.wait_ticks.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.periods.flush()?;
        self.waits.flush()?;
        Ok(())
    }
}

/// Turn a scenario label into a safe file-name stem.
///
/// ASCII alphanumerics are kept (lower-cased); every other run of characters
/// becomes a single `_`.  An empty result falls back to `"scenario"`.
pub fn file_stem(label: &str) -> String {
    let mut stem = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    while stem.ends_with('_') {
        stem.pop();
    }
    if stem.is_empty() {
        stem.push_str("scenario");
    }
    stem
}
