//! `lift-core` — foundational types for the single-car lift simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`floor`]       | `Floor` (1-based floor number)                        |
//! | [`direction`]   | `Direction` (`Up` / `Down`)                           |
//! | [`config`]      | `BuildingConfig` and the request validator            |
//! | [`request`]     | `Request`, `RequestBatch`                             |
//! | [`rng`]         | `BatchRng` — seeded random request batches            |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (TOML config) |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod request;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BuildingConfig;
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use request::{Request, RequestBatch};
pub use rng::BatchRng;
