//! `wl-process` — the two simulated processes and the metrics they produce.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`process`] | `Process` trait, `Resume`, `ProcessContext<'a>`            |
//! | [`arrival`] | `ArrivalProcess` — backlog at tick 0, then periodic batches|
//! | [`service`] | `ServiceProcess` — drains up to capacity each period       |
//! | [`metrics`] | `MetricsCollector`, `PeriodRecord`                         |
//! | [`error`]   | `ProcessError`, `ProcessResult<T>`                         |
//!
//! # Design notes
//!
//! A process is a timeline that the scheduler in wl-sim resumes at the ticks
//! it asks for.  Each resumption gets a [`ProcessContext`] lending it the
//! run's waiting list, entity allocator and metrics collector.  Only one
//! process holds the context at a time, so no locking is needed.

pub mod arrival;
pub mod error;
pub mod metrics;
pub mod process;
pub mod service;

#[cfg(test)]
mod tests;

pub use arrival::ArrivalProcess;
pub use error::{ProcessError, ProcessResult};
pub use metrics::{MetricsCollector, PeriodRecord};
pub use process::{Process, ProcessContext, Resume};
pub use service::ServiceProcess;
