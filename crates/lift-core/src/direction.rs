//! Travel direction of a request or a direction group.

use crate::Floor;

/// Which way a request travels.
///
/// Direction is always derived from a request's floors, never stored on it:
/// a request is ascending iff its destination lies above its source.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Destination above source.
    Up,
    /// Destination below source.
    Down,
}

impl Direction {
    /// Direction of a trip from `source` to `destination`.
    ///
    /// Anything that is not strictly ascending counts as `Down`; validated
    /// requests never have `source == destination`.
    #[inline]
    pub fn of(source: Floor, destination: Floor) -> Direction {
        if destination > source {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    #[inline]
    pub fn is_up(self) -> bool {
        matches!(self, Direction::Up)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
