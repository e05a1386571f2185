//! Unit tests for wl-queue.

use wl_core::{Entity, EntityId, Tick};

fn entity(id: u64, arrival: u64) -> Entity {
    Entity::new(EntityId(id), Tick(arrival))
}

// ── WaitingList ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod waiting_list {
    use super::*;
    use crate::{QueueError, WaitingList};

    fn drain(q: &mut WaitingList) -> Vec<Entity> {
        std::iter::from_fn(|| q.pop_front().unwrap()).collect()
    }

    #[test]
    fn starts_empty() {
        let mut q = WaitingList::new();
        assert!(q.is_empty());
        assert!(q.pop_front().unwrap().is_none());
    }

    #[test]
    fn fifo_order() {
        let mut q = WaitingList::new();
        for id in [3, 1, 2] {
            q.push_back(entity(id, 0)).unwrap();
        }
        assert_eq!(q.len(), 3);
        assert_eq!(drain(&mut q), vec![entity(3, 0), entity(1, 0), entity(2, 0)]);
        assert_eq!(q.pop_front().unwrap(), None);
    }

    #[test]
    fn pop_returns_recorded_arrival() {
        let mut q = WaitingList::new();
        q.push_back(entity(1, 0)).unwrap();
        q.push_back(entity(2, 14)).unwrap();

        q.pop_front().unwrap();
        let second = q.pop_front().unwrap().unwrap();
        assert_eq!(second.arrival, Tick(14));
        assert_eq!(second.wait_until(Tick(21)), 7);
    }

    #[test]
    fn duplicate_rejected_without_side_effects() {
        let mut q = WaitingList::new();
        q.push_back(entity(1, 0)).unwrap();
        let err = q.push_back(entity(1, 7)).unwrap_err();
        assert!(matches!(err, QueueError::DuplicateEntity(EntityId(1))));
        assert_eq!(drain(&mut q), vec![entity(1, 0)]);
    }

    #[test]
    fn id_can_requeue_after_service() {
        let mut q = WaitingList::new();
        q.push_back(entity(1, 0)).unwrap();
        q.pop_front().unwrap();
        assert!(q.push_back(entity(1, 7)).is_ok());
        assert_eq!(drain(&mut q), vec![entity(1, 7)]);
    }
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_queue {
    use wl_core::ProcessId;

    use super::*;
    use crate::EventQueue;

    #[test]
    fn empty_queue() {
        let q = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.next_tick(), None);
    }

    #[test]
    fn next_tick_is_earliest() {
        let mut q = EventQueue::new();
        q.push(Tick(14), ProcessId(0));
        q.push(Tick(7), ProcessId(1));
        assert_eq!(q.next_tick(), Some(Tick(7)));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn drain_preserves_push_order() {
        let mut q = EventQueue::new();
        q.push(Tick(0), ProcessId(0));
        q.push(Tick(0), ProcessId(1));
        q.push(Tick(0), ProcessId(2));
        assert_eq!(
            q.drain_tick(Tick(0)),
            Some(vec![ProcessId(0), ProcessId(1), ProcessId(2)])
        );
        assert!(q.is_empty());
    }

    #[test]
    fn drain_missing_tick_is_none() {
        let mut q = EventQueue::new();
        q.push(Tick(7), ProcessId(0));
        assert_eq!(q.drain_tick(Tick(0)), None);
        assert_eq!(q.len(), 1);
    }
}
