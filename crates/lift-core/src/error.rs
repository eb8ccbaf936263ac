//! Core error type.
//!
//! Everything the request validator can reject lands here.  Sub-crates keep
//! their own error enums and wrap `LiftError` as one variant via `#[from]`.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("floor {floor} is outside the building (valid floors: 1..={max_floor})")]
    FloorOutOfRange { floor: i64, max_floor: u8 },

    #[error("starting and destination floors cannot both be {0}")]
    SameFloor(Floor),

    #[error("batch already holds the maximum of {0} requests")]
    TooManyRequests(usize),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
