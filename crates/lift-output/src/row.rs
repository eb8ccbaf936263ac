//! Plain row type written by trace backends.

use lift_core::Floor;
use lift_sim::{CarState, Phase, TraceEvent};

/// What a [`TraceRow`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Run started; car idle at the ground floor.
    Start,
    /// A phase with work to do began.
    Phase,
    Move,
    Board,
    Alight,
    /// Run finished; car idle at the ground floor again.
    Idle,
}

impl RowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RowKind::Start  => "start",
            RowKind::Phase  => "phase",
            RowKind::Move   => "move",
            RowKind::Board  => "board",
            RowKind::Alight => "alight",
            RowKind::Idle   => "idle",
        }
    }
}

/// One line of the trace, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow {
    /// 0-based position in the run's output.
    pub seq:        u64,
    pub phase:      Phase,
    pub kind:       RowKind,
    /// Car floor for markers, stop floor for board/alight, origin for moves.
    pub floor:      Floor,
    /// Destination of a move; `None` for every other kind.
    pub to_floor:   Option<Floor>,
    /// Passengers boarding or alighting; 0 for other kinds.
    pub count:      u32,
    /// Occupancy after the row's effect was applied.
    pub passengers: u32,
}

impl TraceRow {
    /// A start, phase, or idle marker row.
    pub fn marker(seq: u64, phase: Phase, kind: RowKind, car: &CarState) -> Self {
        Self {
            seq,
            phase,
            kind,
            floor:      car.floor,
            to_floor:   None,
            count:      0,
            passengers: car.passengers,
        }
    }

    /// A row for a simulation event, with the car state after it.
    pub fn event(seq: u64, phase: Phase, event: &TraceEvent, car: &CarState) -> Self {
        let (kind, floor, to_floor) = match *event {
            TraceEvent::Move { from, to }      => (RowKind::Move, from, Some(to)),
            TraceEvent::Board { floor, .. }    => (RowKind::Board, floor, None),
            TraceEvent::Alight { floor, .. }   => (RowKind::Alight, floor, None),
        };
        Self {
            seq,
            phase,
            kind,
            floor,
            to_floor,
            count:      event.count(),
            passengers: car.passengers,
        }
    }
}
