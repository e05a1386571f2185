//! `ServiceProcess` — serves up to a fixed capacity from the queue head.

use log::debug;

use wl_core::PERIOD_LENGTH_TICKS;

use crate::{Process, ProcessContext, ProcessResult, Resume};

/// Drains up to `capacity_per_period` entities per period, FIFO.
///
/// Each served entity's wait (`now - arrival`) is recorded, and one
/// [`PeriodRecord`][crate::PeriodRecord] is emitted per round, even when
/// nothing could be served.  Unused capacity is lost; it never carries over
/// to a later period.
pub struct ServiceProcess {
    capacity_per_period: u32,
}

impl ServiceProcess {
    pub fn new(capacity_per_period: u32) -> Self {
        Self { capacity_per_period }
    }
}

impl Process for ServiceProcess {
    fn name(&self) -> &'static str {
        "service"
    }

    fn resume(&mut self, ctx: &mut ProcessContext<'_>) -> ProcessResult<Resume> {
        let mut served = 0u64;
        for _ in 0..self.capacity_per_period {
            let Some(entity) = ctx.queue.pop_front()? else {
                break;
            };
            ctx.metrics.record_wait(entity.wait_until(ctx.now));
            served += 1;
        }

        let record = ctx
            .metrics
            .record_period(ctx.now, ctx.queue.len() as u64, served)?;
        debug!(
            "{}: period {} served {}/{}, queue length {}",
            ctx.now, record.period.0, served, self.capacity_per_period, record.queue_length
        );
        Ok(Resume::After(PERIOD_LENGTH_TICKS))
    }
}
