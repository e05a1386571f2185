//! `wl-core` — foundational types for the `rust_wl` waiting-list simulator.
//!
//! This crate is a dependency of every other `wl-*` crate.  It has no `wl-*`
//! dependencies and only a few external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ids`]      | `EntityId`, `PeriodIndex`, `ProcessId`, `EntityAllocator` |
//! | [`entity`]   | `Entity` (id + arrival tick)                              |
//! | [`time`]     | `Tick`, `SimClock`, `PERIOD_LENGTH_TICKS`                 |
//! | [`config`]   | `ScenarioConfig`, `ArrivalPattern`                        |
//! | [`rng`]      | `ArrivalRng` (seeded Poisson batch sizes)                 |
//! | [`error`]    | `WlError`, `WlResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod entity;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ArrivalPattern, ScenarioConfig};
pub use entity::Entity;
pub use error::{WlError, WlResult};
pub use ids::{EntityAllocator, EntityId, PeriodIndex, ProcessId};
pub use rng::ArrivalRng;
pub use time::{PERIOD_LENGTH_TICKS, SimClock, Tick};
