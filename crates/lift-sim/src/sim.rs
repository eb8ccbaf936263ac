//! The `Sim` struct and its run state machine.

use lift_core::{BuildingConfig, RequestBatch};
use lift_schedule::{TraversalPolicy, classify};

use crate::{CarState, DispatchStats, Dispatcher, Phase, SimObserver};

// ── RunSummary ────────────────────────────────────────────────────────────────

/// What one run did, reported to [`SimObserver::on_run_end`] and returned
/// from [`Sim::run`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunSummary {
    /// Requests in the batch.
    pub requests:  usize,
    pub policy:    TraversalPolicy,
    pub stats:     DispatchStats,
    /// Car state after the run: always idle at the ground floor.
    pub final_car: CarState,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Sim` owns a validated batch and drives the per-run state machine:
///
/// 1. **Idle**: the car is reset to the ground floor, empty.
/// 2. **Ascending**: the ascending group is planned by the traversal policy
///    and dispatched.
/// 3. **Descending**: entered unconditionally once ascending is done; the
///    descending group is planned from wherever the car stopped.
/// 4. **ReturningToGround**: the car moves down to floor 1 if it is not
///    already there.
/// 5. Back to **Idle**.
///
/// An empty group makes its phase a no-op pass.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Building bounds (floors, capacity).
    pub config: BuildingConfig,

    /// How each direction group is walked.
    pub policy: TraversalPolicy,

    /// The car.  Reset at the start of every run.
    pub car: CarState,

    pub(crate) batch: RequestBatch,
    pub(crate) phase: Phase,
}

impl Sim {
    /// The batch this simulation services.  Never modified by a run.
    pub fn batch(&self) -> &RequestBatch {
        &self.batch
    }

    /// Current state-machine phase; `Idle` outside of [`run`][Self::run].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run the whole batch to completion.
    ///
    /// Deterministic: the same batch, config, and policy always produce the
    /// same callbacks in the same order, so `run` may be called repeatedly.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        self.car = CarState::at_ground();
        self.phase = Phase::Idle;
        tracing::info!(
            requests = self.batch.len(),
            policy = %self.policy,
            "simulation started"
        );
        observer.on_run_start(&self.car);

        let classified = classify(&self.batch);
        let mut stats = DispatchStats::default();

        // ── Ascending, then descending ────────────────────────────────────
        for group in classified.in_order() {
            self.phase = Phase::for_direction(group.direction());
            let plan = self.policy.plan(group, self.car.floor, &self.config);
            if plan.is_empty() {
                tracing::debug!(phase = %self.phase, "no requests, skipping phase");
                continue;
            }
            tracing::debug!(phase = %self.phase, floor = %self.car.floor, "entering phase");
            observer.on_phase(self.phase, &self.car);
            stats += Dispatcher::new(&self.config, &mut self.car).service(group, &plan, observer);
        }

        // ── Return to ground ──────────────────────────────────────────────
        self.phase = Phase::ReturningToGround;
        if !self.car.floor.is_ground() {
            tracing::debug!(floor = %self.car.floor, "returning to ground floor");
            observer.on_phase(self.phase, &self.car);
            stats += Dispatcher::new(&self.config, &mut self.car).return_to_ground(observer);
        }

        self.phase = Phase::Idle;
        debug_assert!(self.car.is_empty(), "passengers left aboard: {}", self.car.passengers);

        let summary = RunSummary {
            requests:  self.batch.len(),
            policy:    self.policy,
            stats,
            final_car: self.car,
        };
        tracing::info!(
            boarded = stats.boarded,
            alighted = stats.alighted,
            dropped = stats.dropped,
            moves = stats.moves,
            "simulation complete, car idle at ground floor"
        );
        observer.on_run_end(&summary);
        summary
    }
}
