//! Capacity-aware dispatcher: walk a `StopPlan`, moving the car floor by
//! floor and applying boarding and alighting under the capacity ceiling.
//!
//! # Capacity rules
//!
//! ```text
//! alight = min(alighting[floor], passengers)              shortfall → truncated
//! board  = min(boarding[floor],  capacity - passengers)   overflow  → dropped
//! ```
//!
//! Dropped and truncated passengers produce no event, no carry-over, and no
//! error.  They are counted in [`DispatchStats`] and logged at `debug`.

use std::ops::AddAssign;

use lift_core::{BuildingConfig, Floor};
use lift_schedule::{DirectionGroup, Precedence, StopPlan};

use crate::{CarState, SimObserver, TraceEvent};

// ── DispatchStats ─────────────────────────────────────────────────────────────

/// Totals accumulated while dispatching.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct DispatchStats {
    pub boarded:   u32,
    pub alighted:  u32,
    /// Boarding demand turned away because the car was full.
    pub dropped:   u32,
    /// Alighting demand with nobody left aboard to satisfy it.
    pub truncated: u32,
    /// Single-floor moves made.
    pub moves:     u32,
}

impl AddAssign for DispatchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.boarded   += rhs.boarded;
        self.alighted  += rhs.alighted;
        self.dropped   += rhs.dropped;
        self.truncated += rhs.truncated;
        self.moves     += rhs.moves;
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// Drives one [`CarState`] through stop plans.
///
/// Borrowing the car mutably for the dispatcher's lifetime keeps every
/// mutation of the run state in this one type.
pub struct Dispatcher<'a> {
    config: &'a BuildingConfig,
    car:    &'a mut CarState,
    stats:  DispatchStats,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a BuildingConfig, car: &'a mut CarState) -> Self {
        Self { config, car, stats: DispatchStats::default() }
    }

    /// Service every stop of `plan` for `group`, in order.
    ///
    /// Total over its input: never fails, whatever the demand or occupancy.
    pub fn service<O: SimObserver>(
        mut self,
        group:    &DirectionGroup,
        plan:     &StopPlan,
        observer: &mut O,
    ) -> DispatchStats {
        for &floor in plan.stops() {
            self.travel_to(floor, observer);
            match plan.precedence {
                Precedence::AlightFirst => {
                    self.alight(group.alighting_at(floor), observer);
                    self.board(group.boarding_at(floor), observer);
                }
                Precedence::BoardFirst => {
                    self.board(group.boarding_at(floor), observer);
                    self.alight(group.alighting_at(floor), observer);
                }
            }
        }
        self.stats
    }

    /// Move the car to the ground floor without servicing anything.
    pub fn return_to_ground<O: SimObserver>(mut self, observer: &mut O) -> DispatchStats {
        self.travel_to(Floor::GROUND, observer);
        self.stats
    }

    // ── Steps ─────────────────────────────────────────────────────────────

    /// One `Move` event per floor crossed, including pass-through floors.
    fn travel_to<O: SimObserver>(&mut self, target: Floor, observer: &mut O) {
        while self.car.floor != target {
            let from = self.car.floor;
            let to = from.step_toward(target);
            self.car.floor = to;
            self.stats.moves += 1;
            tracing::trace!(%from, %to, "move");
            observer.on_event(&TraceEvent::Move { from, to }, self.car);
        }
    }

    fn alight<O: SimObserver>(&mut self, demand: u32, observer: &mut O) {
        if demand == 0 {
            return;
        }
        let floor = self.car.floor;
        let count = demand.min(self.car.passengers);
        let shortfall = demand - count;
        if shortfall > 0 {
            self.stats.truncated += shortfall;
            tracing::debug!(%floor, shortfall, "alighting demand exceeds occupancy");
        }
        if count > 0 {
            self.car.passengers -= count;
            self.stats.alighted += count;
            observer.on_event(&TraceEvent::Alight { floor, count }, self.car);
        }
    }

    fn board<O: SimObserver>(&mut self, demand: u32, observer: &mut O) {
        if demand == 0 {
            return;
        }
        let floor = self.car.floor;
        let count = demand.min(self.car.free_seats(self.config.max_capacity));
        let overflow = demand - count;
        if overflow > 0 {
            self.stats.dropped += overflow;
            tracing::debug!(%floor, overflow, "car full, passengers left behind");
        }
        if count > 0 {
            self.car.passengers += count;
            self.stats.boarded += count;
            observer.on_event(&TraceEvent::Board { floor, count }, self.car);
        }
    }
}
