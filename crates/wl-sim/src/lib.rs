//! `wl-sim` — scheduler and scenario runner for the rust_wl simulator.
//!
//! # Event loop
//!
//! ```text
//! build:  validate config; seed backlog (Process::start); schedule every
//!         process at tick 0 in registration order (arrivals, service)
//! loop:   now = earliest pending tick; stop if now >= horizon end
//!   ① Advance the clock to `now`.
//!   ② Resume every process due at `now`, in schedule order.  Each returns
//!      Resume::After(d) → rescheduled at now + d, or Resume::Done.
//!   ③ Report new period records to the observer.
//! ```
//!
//! Because both processes suspend for exactly one period and arrivals were
//! scheduled first at tick 0, each period's arrivals are always enqueued
//! before that period's service round.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`compare`] runs both scenarios on Rayon's thread pool. |
//! | `serde`    | `Serialize`/`Deserialize` on results and comparisons.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wl_core::ScenarioConfig;
//! use wl_sim::compare;
//!
//! let baseline = ScenarioConfig::new("Baseline", 15, 150, 12, 26);
//! let intervention = baseline.with_capacity(14, "Intervention");
//! let cmp = compare(&baseline, &intervention)?;
//! println!("wait reduced by {:.1}%", cmp.wait_reduction_pct());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scenario;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scenario::{
    CapacityOutlook, ScenarioComparison, ScenarioResult, ScenarioRunner, compare, run_scenario,
    run_scenario_with,
};
pub use sim::{MAX_RESUMES_PER_TICK, Sim};
