//! Strongly typed floor number.
//!
//! Floors are 1-based: `Floor(1)` is the ground floor where every run starts
//! and ends.  The upper bound is not part of the type; it comes from the
//! active [`BuildingConfig`][crate::BuildingConfig].  `Floor` is
//! `Copy + Ord + Hash` so it works directly as a `BTreeMap` key.

use std::fmt;

/// A floor of the building, numbered from 1.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u8);

impl Floor {
    /// The ground floor.  Runs start and finish here.
    pub const GROUND: Floor = Floor(1);

    /// The raw floor number.
    #[inline(always)]
    pub fn number(self) -> u8 {
        self.0
    }

    /// The floor directly above.
    #[inline]
    pub fn above(self) -> Floor {
        Floor(self.0.saturating_add(1))
    }

    /// The floor directly below, never going under the ground floor.
    #[inline]
    pub fn below(self) -> Floor {
        Floor(self.0.saturating_sub(1).max(Self::GROUND.0))
    }

    /// One floor closer to `target`; `self` if already there.
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        match self.cmp(&target) {
            std::cmp::Ordering::Less    => self.above(),
            std::cmp::Ordering::Greater => self.below(),
            std::cmp::Ordering::Equal   => self,
        }
    }

    /// Number of single-floor moves between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u8 {
        self.0.abs_diff(other.0)
    }

    #[inline]
    pub fn is_ground(self) -> bool {
        self == Self::GROUND
    }
}

impl Default for Floor {
    /// The ground floor.
    #[inline(always)]
    fn default() -> Self {
        Self::GROUND
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Floor {
    type Error = std::num::TryFromIntError;
    fn try_from(n: i64) -> Result<Floor, Self::Error> {
        u8::try_from(n).map(Floor)
    }
}
