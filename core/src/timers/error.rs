//! Error types for timer operations

use thiserror::Error;

/// Errors when talking to a spawned timer task
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("timer task has stopped")]
    Closed,

    #[error("timer task failed")]
    TaskFailed(#[from] tokio::task::JoinError),
}
