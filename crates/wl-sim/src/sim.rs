//! The `Sim` struct and its event loop.

use log::{debug, trace};

use wl_core::{EntityAllocator, ProcessId, ScenarioConfig, SimClock, Tick};
use wl_process::{MetricsCollector, Process, ProcessContext, Resume};
use wl_queue::{EventQueue, WaitingList};

use crate::{SimError, SimObserver, SimResult};

/// Resumptions allowed per registered process within a single tick.
pub const MAX_RESUMES_PER_TICK: usize = 1_000;

/// One scenario run: all per-run state plus the registered processes.
///
/// Nothing here is global.  Two `Sim`s never share a queue, allocator or
/// metrics store, so separate runs cannot contaminate each other and may run
/// on separate threads.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Scenario parameters (horizon, capacities, label, …).
    pub config: ScenarioConfig,

    /// Global clock; jumps to the next pending event tick.
    pub clock: SimClock,

    /// Shared FIFO waiting list.
    pub queue: WaitingList,

    /// Entity id source for this run.
    pub allocator: EntityAllocator,

    /// Period records and waiting times.
    pub metrics: MetricsCollector,

    /// Pending process resumptions.
    pub events: EventQueue,

    /// Registered processes, indexed by `ProcessId`.
    pub(crate) processes: Vec<Box<dyn Process>>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.end_tick()`.
    ///
    /// The final period's service round (at `end_tick - PERIOD_LENGTH_TICKS`)
    /// is included; nothing at or after `end_tick` runs.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        self.run_until(end, observer)?;
        self.clock.advance_to(end);
        debug!("scenario '{}' finished at {}", self.config.label, self.clock);
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Process every event scheduled strictly before `end`.
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_until<O: SimObserver>(&mut self, end: Tick, observer: &mut O) -> SimResult<()> {
        while let Some(now) = self.events.next_tick() {
            if now >= end {
                break;
            }
            self.clock.advance_to(now);
            observer.on_tick_start(now);

            let periods_before = self.metrics.periods().len();
            let waits_before = self.metrics.wait_times().len();
            let resumed = self.process_tick(now)?;

            let mut waits = &self.metrics.wait_times()[waits_before..];
            for record in &self.metrics.periods()[periods_before..] {
                observer.on_period_end(record, waits);
                waits = &[];
            }
            observer.on_tick_end(now, resumed);
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Resume every process due at `now`, including any rescheduled for the
    /// same tick while this runs.  Returns the number of resumptions.
    ///
    /// Fails with [`SimError::Stalled`] once the tick has used up
    /// [`MAX_RESUMES_PER_TICK`] resumptions per registered process.
    fn process_tick(&mut self, now: Tick) -> SimResult<usize> {
        let limit = self.processes.len() * MAX_RESUMES_PER_TICK;
        let mut resumed = 0;
        while let Some(due) = self.events.drain_tick(now) {
            for pid in due {
                if resumed == limit {
                    return Err(SimError::Stalled { tick: now, resumes: resumed });
                }
                let process = &mut self.processes[pid.index()];
                let name = process.name();
                let mut ctx = ProcessContext::new(
                    now,
                    &mut self.queue,
                    &mut self.allocator,
                    &mut self.metrics,
                );
                let next = process
                    .resume(&mut ctx)
                    .map_err(|source| SimError::Process { process: name, source })?;
                resumed += 1;

                match next {
                    Resume::After(delay) => {
                        trace!("{now}: {name} suspends for {delay} ticks");
                        self.events.push(now + delay, pid);
                    }
                    Resume::Done => trace!("{now}: {name} finished"),
                }
            }
        }
        Ok(resumed)
    }
}

/// Register `processes` at tick 0: run each `start` hook, then schedule the
/// first resumption, both in registration order.
pub(crate) fn start_processes(
    processes: &mut [Box<dyn Process>],
    queue:     &mut WaitingList,
    allocator: &mut EntityAllocator,
    metrics:   &mut MetricsCollector,
    events:    &mut EventQueue,
) -> SimResult<()> {
    for (i, process) in processes.iter_mut().enumerate() {
        let name = process.name();
        let mut ctx = ProcessContext::new(Tick::ZERO, queue, allocator, metrics);
        process
            .start(&mut ctx)
            .map_err(|source| SimError::Process { process: name, source })?;
        let pid = u32::try_from(i)
            .map_err(|_| SimError::Config(format!("too many processes registered ({i})")))?;
        events.push(Tick::ZERO, ProcessId(pid));
    }
    Ok(())
}
