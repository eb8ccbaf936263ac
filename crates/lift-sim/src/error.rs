use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[source] LiftError),

    #[error("request batch rejected: {0}")]
    InvalidBatch(#[source] LiftError),

    #[error("request batch was never published")]
    BatchAbandoned,

    #[error("simulation side stopped before the batch was published")]
    ReceiverGone,
}

pub type SimResult<T> = Result<T, SimError>;
