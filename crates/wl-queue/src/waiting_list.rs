//! `WaitingList` — the FIFO queue shared by the arrival and service processes.
//!
//! Two structures kept in lock-step:
//!
//! - `order`: a `VecDeque<EntityId>` giving service order (insertion order).
//! - `arrivals`: `EntityId → Tick`, used to compute the wait on dequeue.
//!
//! Every id in `order` has exactly one entry in `arrivals` and vice versa.
//! `push_back` and `pop_front` are the only mutators, so the two can never
//! drift apart.

use std::collections::VecDeque;

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;
#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use wl_core::{Entity, EntityId, Tick};

use crate::{QueueError, QueueResult};

/// Unbounded FIFO waiting list with an arrival-time index.
#[derive(Debug, Default)]
pub struct WaitingList {
    order:    VecDeque<EntityId>,
    arrivals: HashMap<EntityId, Tick>,
}

impl WaitingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entity` to the back of the queue.
    ///
    /// Fails without modifying the queue if the id is already waiting.
    pub fn push_back(&mut self, entity: Entity) -> QueueResult<()> {
        if self.arrivals.contains_key(&entity.id) {
            return Err(QueueError::DuplicateEntity(entity.id));
        }
        self.arrivals.insert(entity.id, entity.arrival);
        self.order.push_back(entity.id);
        Ok(())
    }

    /// Remove and return the head entity, or `None` if the queue is empty.
    ///
    /// The entity's arrival record is removed in the same step.
    pub fn pop_front(&mut self) -> QueueResult<Option<Entity>> {
        let Some(id) = self.order.pop_front() else {
            return Ok(None);
        };
        let arrival = self
            .arrivals
            .remove(&id)
            .ok_or(QueueError::MissingArrival(id))?;
        Ok(Some(Entity::new(id, arrival)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
