use thiserror::Error;

use wl_core::{Tick, WlError};
use wl_process::ProcessError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] WlError),

    #[error("process '{process}' failed: {source}")]
    Process {
        process: &'static str,
        #[source]
        source:  ProcessError,
    },

    #[error("{tick}: {resumes} resumptions without the clock advancing")]
    Stalled { tick: Tick, resumes: usize },
}

pub type SimResult<T> = Result<T, SimError>;
