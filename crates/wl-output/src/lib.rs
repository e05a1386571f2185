//! `wl-output` — scenario output writers for the rust_wl simulator.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `<stem>_periods.csv`, `<stem>_waits.csv`        |
//!
//! Writers implement [`OutputWriter`].  They are fed either live, by
//! [`ScenarioOutputObserver`] (a `wl_sim::SimObserver`), or after the fact
//! from a finished `ScenarioResult` via [`write_result`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use wl_output::{CsvWriter, ScenarioOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"), "baseline")?;
//! let mut obs = ScenarioOutputObserver::new(writer);
//! let result = wl_sim::run_scenario_with(&config, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::{CsvWriter, file_stem};
pub use error::{OutputError, OutputResult};
pub use observer::ScenarioOutputObserver;
pub use row::{PeriodRow, WaitRow};
pub use writer::{OutputWriter, write_result};
