//! Direction scheduler: turn one `DirectionGroup` into an ordered `StopPlan`.
//!
//! # Policies
//!
//! | Policy       | Stops visited                                   | At each stop        |
//! |--------------|-------------------------------------------------|---------------------|
//! | `FullSweep`  | every floor from the entry floor to the extreme | alight, then board  |
//! | `SparseStop` | only floors with boarding or alighting demand   | board, then alight  |
//!
//! `FullSweep` is the default.  The *extreme* floor is the top floor for an
//! ascending group and the ground floor for a descending one.  The *entry*
//! floor is where servicing begins: for `FullSweep` the car's current floor,
//! widened to include the group's first boarding floor if the car is past
//! it; for `SparseStop` the first demand floor.
//!
//! A plan only lists floors that are serviced.  Floors crossed on the way to
//! a stop (including the repositioning trip to the first stop) are
//! pass-through floors: the dispatcher emits a move for each of them but no
//! boarding or alighting.

use std::str::FromStr;

use lift_core::{BuildingConfig, Direction, Floor};

use crate::{DirectionGroup, ScheduleError};

// ── Precedence ────────────────────────────────────────────────────────────────

/// Order of the two actions performed at a serviced floor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Precedence {
    AlightFirst,
    BoardFirst,
}

// ── TraversalPolicy ───────────────────────────────────────────────────────────

/// How the car walks the floors of one direction group.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TraversalPolicy {
    /// Stop at every floor up to the top (ascending) or down to the ground
    /// (descending).
    #[default]
    FullSweep,
    /// Stop only where passengers board or alight.
    SparseStop,
}

impl TraversalPolicy {
    /// Action order used at every stop under this policy.
    pub fn precedence(self) -> Precedence {
        match self {
            TraversalPolicy::FullSweep  => Precedence::AlightFirst,
            TraversalPolicy::SparseStop => Precedence::BoardFirst,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TraversalPolicy::FullSweep  => "full-sweep",
            TraversalPolicy::SparseStop => "sparse-stop",
        }
    }

    /// Compute the stops for `group` with the car currently at `current`.
    ///
    /// An empty group always yields an empty plan, so processing it is a
    /// no-op pass.
    pub fn plan(self, group: &DirectionGroup, current: Floor, config: &BuildingConfig) -> StopPlan {
        let direction = group.direction();
        let stops = match group.entry_floor() {
            None => Vec::new(),
            Some(entry) => match self {
                TraversalPolicy::SparseStop => group.demand_floors(),
                TraversalPolicy::FullSweep  => match direction {
                    Direction::Up => {
                        let start = current.min(entry);
                        (start.0..=config.max_floor).map(Floor).collect()
                    }
                    Direction::Down => {
                        let start = current.max(entry);
                        (Floor::GROUND.0..=start.0).rev().map(Floor).collect()
                    }
                },
            },
        };

        tracing::debug!(
            policy = self.as_str(),
            %direction,
            from = %current,
            stops = stops.len(),
            "planned direction group"
        );

        StopPlan { direction, precedence: self.precedence(), stops }
    }
}

impl std::fmt::Display for TraversalPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalPolicy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full-sweep" | "full" | "sweep"   => Ok(TraversalPolicy::FullSweep),
            "sparse-stop" | "sparse" | "stop" => Ok(TraversalPolicy::SparseStop),
            other => Err(ScheduleError::UnknownPolicy(other.to_owned())),
        }
    }
}

// ── StopPlan ──────────────────────────────────────────────────────────────────

/// Ordered floors to service for one direction group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopPlan {
    pub direction:  Direction,
    pub precedence: Precedence,
    stops:          Vec<Floor>,
}

impl StopPlan {
    /// A plan with explicit stops, bypassing the policies.
    ///
    /// Mostly useful for driving the dispatcher directly in tests.
    pub fn new(direction: Direction, precedence: Precedence, stops: Vec<Floor>) -> Self {
        Self { direction, precedence, stops }
    }

    pub fn stops(&self) -> &[Floor] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }
}
