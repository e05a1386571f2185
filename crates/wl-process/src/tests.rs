//! Unit tests for wl-process.

use wl_core::{Entity, EntityAllocator, Tick};
use wl_queue::WaitingList;

use crate::{MetricsCollector, ProcessContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Owned per-run state, lent out as a `ProcessContext` on demand.
struct Harness {
    queue:     WaitingList,
    allocator: EntityAllocator,
    metrics:   MetricsCollector,
}

impl Harness {
    fn new(backlog: u64) -> Self {
        Self {
            queue:     WaitingList::new(),
            allocator: EntityAllocator::new(),
            metrics:   MetricsCollector::new(backlog),
        }
    }

    fn ctx(&mut self, now: u64) -> ProcessContext<'_> {
        ProcessContext::new(Tick(now), &mut self.queue, &mut self.allocator, &mut self.metrics)
    }

    /// Empty the waiting list, returning entities in service order.
    fn drain(&mut self) -> Vec<Entity> {
        std::iter::from_fn(|| self.queue.pop_front().unwrap()).collect()
    }
}

// ── ArrivalProcess ────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_tests {
    use wl_core::{ArrivalPattern, EntityId, ScenarioConfig};

    use super::*;
    use crate::{ArrivalProcess, Process, Resume};

    #[test]
    fn start_seeds_backlog_at_tick_zero() {
        let mut h = Harness::new(5);
        let mut p = ArrivalProcess::fixed(5, 3);
        p.start(&mut h.ctx(0)).unwrap();
        assert_eq!(h.queue.len(), 5);
        assert!(h.drain().iter().all(|e| e.arrival == Tick(0)));
    }

    #[test]
    fn resume_adds_batch_and_suspends_one_period() {
        let mut h = Harness::new(0);
        let mut p = ArrivalProcess::fixed(0, 4);
        let next = p.resume(&mut h.ctx(7)).unwrap();
        assert_eq!(next, Resume::After(7));
        assert_eq!(h.queue.len(), 4);
        assert!(h.drain().iter().all(|e| e.arrival == Tick(7)));
    }

    #[test]
    fn ids_keep_increasing_across_batches() {
        let mut h = Harness::new(2);
        let mut p = ArrivalProcess::fixed(2, 2);
        p.start(&mut h.ctx(0)).unwrap();
        p.resume(&mut h.ctx(0)).unwrap();
        p.resume(&mut h.ctx(7)).unwrap();
        let ids: Vec<EntityId> = h.drain().iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=6).map(EntityId).collect::<Vec<_>>());
    }

    #[test]
    fn zero_arrivals_still_reschedules() {
        let mut h = Harness::new(0);
        let mut p = ArrivalProcess::fixed(0, 0);
        assert_eq!(p.resume(&mut h.ctx(0)).unwrap(), Resume::After(7));
        assert!(h.queue.is_empty());
    }

    #[test]
    fn poisson_batches_are_reproducible() {
        let cfg = ScenarioConfig::new("p", 12, 0, 0, 4)
            .with_arrivals(ArrivalPattern::Poisson { seed: 3 });

        let lengths = |cfg: &ScenarioConfig| {
            let mut h = Harness::new(0);
            let mut p = ArrivalProcess::from_config(cfg).unwrap();
            (0..4)
                .map(|k| {
                    p.resume(&mut h.ctx(k * 7)).unwrap();
                    h.queue.len()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(lengths(&cfg), lengths(&cfg));
    }
}

// ── ServiceProcess ────────────────────────────────────────────────────────────

#[cfg(test)]
mod service_tests {
    use wl_core::{EntityId, PeriodIndex};

    use super::*;
    use crate::{Process, Resume, ServiceProcess};

    fn fill(h: &mut Harness, n: u64, arrival: u64) {
        for _ in 0..n {
            let id = h.allocator.next_id();
            h.queue.push_back(Entity::new(id, Tick(arrival))).unwrap();
        }
    }

    #[test]
    fn serves_up_to_capacity_fifo() {
        let mut h = Harness::new(0);
        fill(&mut h, 5, 0);
        let mut s = ServiceProcess::new(3);
        assert_eq!(s.resume(&mut h.ctx(14)).unwrap(), Resume::After(7));

        assert_eq!(h.metrics.wait_times(), &[14, 14, 14]);
        let rec = h.metrics.periods()[0];
        assert_eq!(rec.period, PeriodIndex(0));
        assert_eq!(rec.queue_length, 2);
        assert_eq!(rec.served, 3);

        let remaining: Vec<EntityId> = h.drain().iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![EntityId(4), EntityId(5)]);
    }

    #[test]
    fn stops_early_on_empty_queue() {
        let mut h = Harness::new(0);
        fill(&mut h, 2, 0);
        let mut s = ServiceProcess::new(10);
        s.resume(&mut h.ctx(0)).unwrap();
        assert_eq!(h.metrics.periods()[0].served, 2);
        assert_eq!(h.metrics.wait_times().len(), 2);
    }

    #[test]
    fn zero_capacity_still_records_period() {
        let mut h = Harness::new(0);
        fill(&mut h, 4, 0);
        let mut s = ServiceProcess::new(0);
        s.resume(&mut h.ctx(0)).unwrap();
        let rec = h.metrics.periods()[0];
        assert_eq!(rec.served, 0);
        assert_eq!(rec.queue_length, 4);
    }

    #[test]
    fn empty_queue_records_zero() {
        let mut h = Harness::new(0);
        let mut s = ServiceProcess::new(5);
        s.resume(&mut h.ctx(0)).unwrap();
        assert_eq!(h.metrics.periods().len(), 1);
        assert_eq!(h.metrics.total_served(), 0);
        assert!(h.metrics.wait_times().is_empty());
    }

    #[test]
    fn unused_capacity_does_not_carry_over() {
        let mut h = Harness::new(0);
        let mut s = ServiceProcess::new(3);
        fill(&mut h, 1, 0);
        s.resume(&mut h.ctx(0)).unwrap(); // serves 1, 2 slots unused
        fill(&mut h, 6, 7);
        s.resume(&mut h.ctx(7)).unwrap();
        assert_eq!(h.metrics.periods()[1].served, 3);
        assert_eq!(h.metrics.periods()[1].queue_length, 3);
    }
}

// ── MetricsCollector ──────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics_tests {
    use wl_core::PeriodIndex;

    use super::*;
    use crate::ProcessError;
    use crate::metrics::period_index;

    #[test]
    fn empty_collector_defaults() {
        let m = MetricsCollector::new(42);
        assert_eq!(m.mean_wait_time(), 0.0);
        assert_eq!(m.final_queue_length(), 42);
        assert_eq!(m.total_served(), 0);
        assert!(m.periods().is_empty());
    }

    #[test]
    fn aggregates() {
        let mut m = MetricsCollector::new(0);
        for w in [0, 7, 14] {
            m.record_wait(w);
        }
        m.record_period(Tick(0), 5, 2).unwrap();
        m.record_period(Tick(7), 3, 1).unwrap();
        assert_eq!(m.mean_wait_time(), 7.0);
        assert_eq!(m.final_queue_length(), 3);
        assert_eq!(m.total_served(), 3);
    }

    #[test]
    fn period_indices_are_sequential() {
        let mut m = MetricsCollector::new(0);
        for k in 0..4u64 {
            let rec = m.record_period(Tick(k * 7), 0, 0).unwrap();
            assert_eq!(rec.period.0 as u64, k);
        }
    }

    #[test]
    fn period_index_rejects_values_past_u32() {
        assert_eq!(period_index(u32::MAX as usize).unwrap(), PeriodIndex(u32::MAX));

        #[cfg(target_pointer_width = "64")]
        {
            let n = u32::MAX as usize + 1;
            assert!(matches!(period_index(n), Err(ProcessError::PeriodOverflow(m)) if m == n));
        }
    }
}
