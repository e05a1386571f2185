use thiserror::Error;

use wl_core::WlError;
use wl_queue::QueueError;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("waiting list error: {0}")]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Core(#[from] WlError),

    #[error("period record {0} is beyond the representable period range")]
    PeriodOverflow(usize),
}

pub type ProcessResult<T> = Result<T, ProcessError>;
