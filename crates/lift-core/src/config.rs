//! Building configuration and request validation.
//!
//! # Defaults
//!
//! | Field          | Default | Meaning                                   |
//! |----------------|---------|-------------------------------------------|
//! | `max_floor`    | 9       | Highest floor; floors are `1..=max_floor` |
//! | `max_requests` | 3       | Largest batch the input layer collects    |
//! | `max_capacity` | 3       | Passengers the car can hold at once       |
//!
//! All three are runtime values so tests and the CLI can run alternative
//! buildings without recompiling.

use crate::{Floor, LiftError, LiftResult, Request};

pub const DEFAULT_MAX_FLOOR:    u8    = 9;
pub const DEFAULT_MAX_REQUESTS: usize = 3;
pub const DEFAULT_MAX_CAPACITY: u32   = 3;

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Bounds of one simulated building.
///
/// Typically built from `Default` and optionally overridden by a TOML file
/// loaded by the application crate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildingConfig {
    /// Highest floor number.  Must be at least 2.
    pub max_floor: u8,

    /// Maximum number of requests accepted into one batch.
    pub max_requests: usize,

    /// Maximum number of passengers in the car.
    pub max_capacity: u32,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            max_floor:    DEFAULT_MAX_FLOOR,
            max_requests: DEFAULT_MAX_REQUESTS,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl BuildingConfig {
    /// Check that the bounds describe a usable building.
    pub fn validate(&self) -> LiftResult<()> {
        if self.max_floor < 2 || self.max_floor == u8::MAX {
            return Err(LiftError::Config(format!(
                "max_floor must be in 2..=254, got {}",
                self.max_floor
            )));
        }
        if self.max_requests == 0 {
            return Err(LiftError::Config("max_requests must be at least 1".into()));
        }
        if self.max_capacity == 0 {
            return Err(LiftError::Config("max_capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// The highest floor of the building.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.max_floor)
    }

    /// `true` if `floor` lies in `1..=max_floor`.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        (Floor::GROUND..=self.top_floor()).contains(&floor)
    }

    /// Every floor of the building, ground first.
    pub fn floors(&self) -> impl DoubleEndedIterator<Item = Floor> {
        (Floor::GROUND.0..=self.max_floor).map(Floor)
    }

    // ── Request validator ─────────────────────────────────────────────────

    /// Turn a raw floor number into a [`Floor`] of this building.
    pub fn validate_floor(&self, n: i64) -> LiftResult<Floor> {
        Floor::try_from(n)
            .ok()
            .filter(|f| self.contains(*f))
            .ok_or(LiftError::FloorOutOfRange { floor: n, max_floor: self.max_floor })
    }

    /// Parse user input (e.g. a line typed at a prompt) as a floor.
    pub fn parse_floor(&self, s: &str) -> LiftResult<Floor> {
        let s = s.trim();
        let n = s
            .parse::<i64>()
            .map_err(|_| LiftError::Parse(format!("{s:?} is not a floor number")))?;
        self.validate_floor(n)
    }

    /// Build a validated request: both floors in range and distinct.
    pub fn request(&self, source: Floor, destination: Floor) -> LiftResult<Request> {
        for floor in [source, destination] {
            if !self.contains(floor) {
                return Err(LiftError::FloorOutOfRange {
                    floor:     floor.0 as i64,
                    max_floor: self.max_floor,
                });
            }
        }
        if source == destination {
            return Err(LiftError::SameFloor(source));
        }
        Ok(Request::new(source, destination))
    }
}
