//! The queued unit of work.

use crate::{EntityId, Tick};

/// An entity waiting for service.
///
/// Both fields are fixed at creation.  The waiting list owns the entity's
/// arrival record while it waits; the service process receives the `Entity`
/// by value at dequeue time and drops it once the wait has been recorded.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id:      EntityId,
    pub arrival: Tick,
}

impl Entity {
    #[inline]
    pub fn new(id: EntityId, arrival: Tick) -> Self {
        Self { id, arrival }
    }

    /// Ticks waited if served at `now`.  Saturates at zero.
    #[inline]
    pub fn wait_until(&self, now: Tick) -> u64 {
        now.0.saturating_sub(self.arrival.0)
    }
}
