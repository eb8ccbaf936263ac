//! `DirectionGroup` — the requests sharing one travel direction, aggregated
//! into per-floor boarding and alighting demand.
//!
//! # Demand model
//!
//! ```text
//! boarding[f]  = number of requests in the group with source      == f
//! alighting[f] = number of requests in the group with destination == f
//! ```
//!
//! Both maps are `BTreeMap<Floor, u32>` so iteration is already in floor
//! order; the direction decides whether it is walked forwards or backwards.
//! Aggregating by floor is what makes the visiting order total: two requests
//! from the same floor collapse into one entry instead of tying.

use std::collections::BTreeMap;

use lift_core::{Direction, Floor, Request};

/// Requests of one direction plus their aggregated per-floor demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionGroup {
    direction: Direction,
    /// Members in the order they appeared in the batch.
    requests:  Vec<Request>,
    boarding:  BTreeMap<Floor, u32>,
    alighting: BTreeMap<Floor, u32>,
}

impl DirectionGroup {
    /// An empty group for `direction`.
    pub fn empty(direction: Direction) -> Self {
        Self {
            direction,
            requests:  Vec::new(),
            boarding:  BTreeMap::new(),
            alighting: BTreeMap::new(),
        }
    }

    /// Build a group from `requests`, all of which must travel in `direction`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if a request travels the other way.
    pub fn from_requests<I>(direction: Direction, requests: I) -> Self
    where
        I: IntoIterator<Item = Request>,
    {
        let mut group = Self::empty(direction);
        for r in requests {
            group.push(r);
        }
        group
    }

    /// Add one request and update both demand maps.
    pub fn push(&mut self, request: Request) {
        debug_assert_eq!(
            request.direction(),
            self.direction,
            "request {request} does not belong to the {} group",
            self.direction
        );
        *self.boarding.entry(request.source).or_default() += 1;
        *self.alighting.entry(request.destination).or_default() += 1;
        self.requests.push(request);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    // ── Demand lookups ────────────────────────────────────────────────────

    /// Passengers waiting to board at `floor` (0 if none).
    #[inline]
    pub fn boarding_at(&self, floor: Floor) -> u32 {
        self.boarding.get(&floor).copied().unwrap_or(0)
    }

    /// Passengers wanting to leave at `floor` (0 if none).
    #[inline]
    pub fn alighting_at(&self, floor: Floor) -> u32 {
        self.alighting.get(&floor).copied().unwrap_or(0)
    }

    pub fn boarding(&self) -> &BTreeMap<Floor, u32> {
        &self.boarding
    }

    pub fn alighting(&self) -> &BTreeMap<Floor, u32> {
        &self.alighting
    }

    /// The boarding floor the car must reach before servicing this group:
    /// the lowest source for an ascending group, the highest for a
    /// descending one.  `None` for an empty group.
    pub fn entry_floor(&self) -> Option<Floor> {
        match self.direction {
            Direction::Up   => self.boarding.keys().next().copied(),
            Direction::Down => self.boarding.keys().next_back().copied(),
        }
    }

    /// Every floor with boarding or alighting demand, ordered in the group's
    /// direction of travel (increasing for `Up`, decreasing for `Down`).
    pub fn demand_floors(&self) -> Vec<Floor> {
        let mut floors: Vec<Floor> = self
            .boarding
            .keys()
            .chain(self.alighting.keys())
            .copied()
            .collect();
        floors.sort_unstable();
        floors.dedup();
        if !self.direction.is_up() {
            floors.reverse();
        }
        floors
    }
}
