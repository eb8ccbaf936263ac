//! Mutable state of the car during one run.

use lift_core::Floor;

/// Where the car is and how many passengers it carries.
///
/// Created fresh at the start of every run (ground floor, empty) and only
/// mutated by the dispatcher.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CarState {
    pub floor:      Floor,
    /// Always within `0..=max_capacity`.
    pub passengers: u32,
}

impl CarState {
    /// An empty car at the ground floor.
    pub const fn at_ground() -> Self {
        Self { floor: Floor::GROUND, passengers: 0 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers == 0
    }

    /// Seats still free for a car of `capacity`.
    #[inline]
    pub fn free_seats(&self, capacity: u32) -> u32 {
        capacity.saturating_sub(self.passengers)
    }
}

impl Default for CarState {
    fn default() -> Self {
        Self::at_ground()
    }
}
