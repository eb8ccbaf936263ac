use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("request batch parse error: {0}")]
    Parse(String),

    #[error("line {line}: {source}")]
    InvalidRequest {
        line:   u64,
        #[source]
        source: LiftError,
    },

    #[error("unknown traversal policy {0:?} (expected \"full-sweep\" or \"sparse-stop\")")]
    UnknownPolicy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
