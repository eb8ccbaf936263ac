//! `lift-sim` — dispatcher and run loop for the single-car lift simulation.
//!
//! # Run state machine
//!
//! ```text
//! run():
//!   ① Idle        — car reset to floor 1, empty; on_run_start.
//!   ② Ascending   — plan the Up group, dispatch it (alight/board per stop).
//!   ③ Descending  — plan the Down group from the car's floor, dispatch it.
//!   ④ Returning   — move down to floor 1 if the car is elsewhere.
//!   ⑤ Idle        — on_run_end with the RunSummary.
//! ```
//!
//! Every step is synchronous and deterministic.  Events reach the
//! [`SimObserver`] as soon as they happen; nothing is buffered.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, RequestBatch};
//! use lift_sim::{SimBuilder, TraceRecorder};
//!
//! let mut sim = SimBuilder::new(BuildingConfig::default(), batch).build()?;
//! let mut recorder = TraceRecorder::new();
//! let summary = sim.run(&mut recorder);
//! ```

pub mod builder;
pub mod car;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handoff;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use car::CarState;
pub use dispatcher::{DispatchStats, Dispatcher};
pub use error::{SimError, SimResult};
pub use event::{Phase, TraceEvent};
pub use handoff::{BatchPublisher, BatchReceiver, batch_channel};
pub use observer::{NoopObserver, RecordedEvent, SimObserver, TraceRecorder};
pub use sim::{RunSummary, Sim};
