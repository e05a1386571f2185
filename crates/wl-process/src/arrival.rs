//! `ArrivalProcess` — seeds the backlog, then adds a batch every period.

use log::{debug, trace};

use wl_core::{ArrivalPattern, ArrivalRng, Entity, PERIOD_LENGTH_TICKS, ScenarioConfig};

use crate::{Process, ProcessContext, ProcessResult, Resume};

/// How many entities arrive each period.
enum BatchSize {
    Fixed(u32),
    Poisson(ArrivalRng),
}

impl BatchSize {
    fn next(&mut self) -> u32 {
        match self {
            BatchSize::Fixed(n) => *n,
            BatchSize::Poisson(rng) => rng.next_batch(),
        }
    }
}

/// Generates the initial backlog and the periodic arrival batches.
///
/// - `start` (tick 0, before any event): `initial_backlog` entities arriving
///   at tick 0.
/// - `resume` at every period boundary: one batch arriving at the current
///   tick, then suspend for one period.
///
/// A batch size of 0 is legal; the process still wakes every period.
pub struct ArrivalProcess {
    initial_backlog: u32,
    batch:           BatchSize,
}

impl ArrivalProcess {
    /// Exactly `arrivals_per_period` entities every period.
    pub fn fixed(initial_backlog: u32, arrivals_per_period: u32) -> Self {
        Self {
            initial_backlog,
            batch: BatchSize::Fixed(arrivals_per_period),
        }
    }

    /// Build from a scenario, honouring its [`ArrivalPattern`].
    pub fn from_config(config: &ScenarioConfig) -> ProcessResult<Self> {
        match config.arrivals {
            ArrivalPattern::Fixed => Ok(Self::fixed(config.initial_backlog, config.arrivals_per_period)),
            ArrivalPattern::Poisson { seed } => Ok(Self {
                initial_backlog: config.initial_backlog,
                batch: BatchSize::Poisson(ArrivalRng::new(seed, config.arrivals_per_period)?),
            }),
        }
    }

    /// Enqueue `count` new entities arriving now.
    fn enqueue(ctx: &mut ProcessContext<'_>, count: u32) -> ProcessResult<()> {
        for _ in 0..count {
            let id = ctx.allocator.next_id();
            ctx.queue.push_back(Entity::new(id, ctx.now))?;
        }
        Ok(())
    }
}

impl Process for ArrivalProcess {
    fn name(&self) -> &'static str {
        "arrivals"
    }

    fn start(&mut self, ctx: &mut ProcessContext<'_>) -> ProcessResult<()> {
        Self::enqueue(ctx, self.initial_backlog)?;
        debug!("{}: initial backlog of {} entities", ctx.now, self.initial_backlog);
        Ok(())
    }

    fn resume(&mut self, ctx: &mut ProcessContext<'_>) -> ProcessResult<Resume> {
        let count = self.batch.next();
        Self::enqueue(ctx, count)?;
        trace!("{}: {} arrivals, queue length {}", ctx.now, count, ctx.queue.len());
        Ok(Resume::After(PERIOD_LENGTH_TICKS))
    }
}
