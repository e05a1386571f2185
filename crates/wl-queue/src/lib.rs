//! `wl-queue` — the shared waiting list and the scheduler's event index.
//!
//! # Crate layout
//!
//! | Module            | Contents                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`waiting_list`]  | `WaitingList` (FIFO of `EntityId` + arrival-time map) |
//! | [`event_queue`]   | `EventQueue` (`BTreeMap<Tick, Vec<ProcessId>>`)       |
//! | [`error`]         | `QueueError`, `QueueResult<T>`                        |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the arrival-time map.     |

pub mod error;
pub mod event_queue;
pub mod waiting_list;

#[cfg(test)]
mod tests;

pub use error::{QueueError, QueueResult};
pub use event_queue::EventQueue;
pub use waiting_list::WaitingList;
