use thiserror::Error;

use wl_core::EntityId;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("{0} is already waiting")]
    DuplicateEntity(EntityId),

    #[error("{0} is queued without an arrival record")]
    MissingArrival(EntityId),
}

pub type QueueResult<T> = Result<T, QueueError>;
