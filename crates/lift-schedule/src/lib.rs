//! `lift-schedule` — request classification and per-direction stop planning.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`classifier`] | `classify`, `Classified` (ascending + descending groups)  |
//! | [`group`]      | `DirectionGroup` (`BTreeMap<Floor, u32>` demand)          |
//! | [`policy`]     | `TraversalPolicy`, `Precedence`, `StopPlan`               |
//! | [`loader`]     | `load_batch_csv`, `load_batch_reader`                     |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Pipeline (summary)
//!
//! ```text
//! batch      = validated RequestBatch
//! classified = classify(&batch)                  // Up / Down groups
//! plan       = policy.plan(&group, car_floor, &config)
//! ```
//!
//! Planning is pure: it reads a group and the car's position and returns the
//! floors to service.  Moving the car and applying capacity is `lift-sim`'s
//! job.

pub mod classifier;
pub mod error;
pub mod group;
pub mod loader;
pub mod policy;


pub use classifier::{Classified, classify};
pub use error::{ScheduleError, ScheduleResult};
pub use group::DirectionGroup;
pub use loader::{load_batch_csv, load_batch_reader};
pub use policy::{Precedence, StopPlan, TraversalPolicy};
