//! Trace events and run phases — the output contract of the simulation.

use lift_core::{Direction, Floor};

/// One step of the simulated trace.
///
/// Events are delivered to the observer in emission order and are never
/// reordered downstream.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TraceEvent {
    /// The car moved one floor, from `from` to the adjacent floor `to`.
    Move { from: Floor, to: Floor },

    /// `count > 0` passengers entered the car at `floor`.
    Board { floor: Floor, count: u32 },

    /// `count > 0` passengers left the car at `floor`.
    Alight { floor: Floor, count: u32 },
}

impl TraceEvent {
    /// The floor the car is at once the event has happened.
    pub fn floor(&self) -> Floor {
        match *self {
            TraceEvent::Move { to, .. }       => to,
            TraceEvent::Board { floor, .. }   => floor,
            TraceEvent::Alight { floor, .. }  => floor,
        }
    }

    /// Passenger count carried by a `Board`/`Alight` event; 0 for `Move`.
    pub fn count(&self) -> u32 {
        match *self {
            TraceEvent::Move { .. }           => 0,
            TraceEvent::Board { count, .. }   => count,
            TraceEvent::Alight { count, .. }  => count,
        }
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, TraceEvent::Move { .. })
    }
}

/// State of the per-run state machine.
///
/// ```text
/// Idle → Ascending → Descending → ReturningToGround → Idle
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Phase {
    Idle,
    Ascending,
    Descending,
    ReturningToGround,
}

impl Phase {
    /// The processing phase for a direction group.
    pub fn for_direction(direction: Direction) -> Phase {
        match direction {
            Direction::Up   => Phase::Ascending,
            Direction::Down => Phase::Descending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle              => "idle",
            Phase::Ascending         => "ascending",
            Phase::Descending        => "descending",
            Phase::ReturningToGround => "returning",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
