//! Fluent builder for constructing a [`Sim`].

use wl_core::{EntityAllocator, ScenarioConfig};
use wl_process::{ArrivalProcess, MetricsCollector, Process, ServiceProcess};
use wl_queue::{EventQueue, WaitingList};

use crate::sim::start_processes;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                          |
/// |--------------------|--------------------------------------------------|
/// | `.processes(v)`    | `ArrivalProcess` then `ServiceProcess` from config |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    ScenarioConfig,
    processes: Option<Vec<Box<dyn Process>>>,
}

impl SimBuilder {
    pub fn new(config: ScenarioConfig) -> Self {
        Self {
            config,
            processes: None,
        }
    }

    /// Replace the standard arrival/service pair with custom processes.
    ///
    /// Registration order is the same-tick execution order.
    pub fn processes(mut self, processes: Vec<Box<dyn Process>>) -> Self {
        self.processes = Some(processes);
        self
    }

    /// Validate the configuration, create fresh per-run state, seed the
    /// backlog, and return a ready-to-run [`Sim`].
    ///
    /// A zero horizon is rejected here, before anything runs.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut processes = match self.processes {
            Some(p) => p,
            None => vec![
                Box::new(ArrivalProcess::from_config(&self.config).map_err(|source| {
                    SimError::Process { process: "arrivals", source }
                })?) as Box<dyn Process>,
                Box::new(ServiceProcess::new(self.config.capacity_per_period)),
            ],
        };
        if processes.is_empty() {
            return Err(SimError::Config(format!(
                "scenario '{}': no processes registered",
                self.config.label
            )));
        }

        // ── Fresh per-run state ───────────────────────────────────────────
        let mut queue = WaitingList::new();
        let mut allocator = EntityAllocator::new();
        let mut metrics = MetricsCollector::new(self.config.initial_backlog as u64);
        let mut events = EventQueue::new();

        start_processes(&mut processes, &mut queue, &mut allocator, &mut metrics, &mut events)?;

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            queue,
            allocator,
            metrics,
            events,
            processes,
        })
    }
}
