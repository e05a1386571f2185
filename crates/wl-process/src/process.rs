//! The `Process` trait — one cooperative timeline in a scenario run.

use wl_core::{EntityAllocator, Tick};
use wl_queue::WaitingList;

use crate::{MetricsCollector, ProcessResult};

/// What a process wants after a resumption.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resume {
    /// Resume again this many ticks from now.  `After(0)` re-runs the process
    /// later in the same tick, after everything already due.
    ///
    /// A tick that keeps rescheduling itself through `After(0)` is cut off
    /// by the scheduler with `SimError::Stalled`.
    After(u64),

    /// The process has finished and is never resumed again.
    Done,
}

/// Mutable per-run state lent to a process for the duration of one call.
///
/// `Sim` builds this from disjoint `&mut` borrows of its own fields, so only
/// one process at a time can touch the queue.
pub struct ProcessContext<'a> {
    /// Current simulation tick.
    pub now: Tick,

    /// The shared FIFO waiting list.
    pub queue: &'a mut WaitingList,

    /// Source of fresh entity ids for this run.
    pub allocator: &'a mut EntityAllocator,

    /// Append-only metrics store for this run.
    pub metrics: &'a mut MetricsCollector,
}

impl<'a> ProcessContext<'a> {
    #[inline]
    pub fn new(
        now:       Tick,
        queue:     &'a mut WaitingList,
        allocator: &'a mut EntityAllocator,
        metrics:   &'a mut MetricsCollector,
    ) -> Self {
        Self { now, queue, allocator, metrics }
    }
}

/// A simulated process driven by the scheduler.
///
/// # Lifecycle
///
/// 1. [`start`][Self::start] runs once while the simulation is being built,
///    at tick 0 and before any scheduled event.
/// 2. [`resume`][Self::resume] runs at tick 0 and then whenever the previous
///    call's [`Resume::After`] delay elapses, until it returns
///    [`Resume::Done`] or the run reaches its horizon.
///
/// # Example
///
/// ```rust,ignore
/// struct Heartbeat;
///
/// impl Process for Heartbeat {
///     fn name(&self) -> &'static str { "heartbeat" }
///
///     fn resume(&mut self, ctx: &mut ProcessContext<'_>) -> ProcessResult<Resume> {
///         log::debug!("{}: queue length {}", ctx.now, ctx.queue.len());
///         Ok(Resume::After(PERIOD_LENGTH_TICKS))
///     }
/// }
/// ```
pub trait Process: Send + 'static {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// One-off setup before the first event.  Default: nothing.
    fn start(&mut self, _ctx: &mut ProcessContext<'_>) -> ProcessResult<()> {
        Ok(())
    }

    /// Run until the next suspension point.
    fn resume(&mut self, ctx: &mut ProcessContext<'_>) -> ProcessResult<Resume>;
}
