//! Request classifier: split a batch into its ascending and descending groups.

use lift_core::{Direction, RequestBatch};

use crate::DirectionGroup;

/// A batch partitioned by direction of travel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    /// Requests whose destination lies above their source.
    pub ascending:  DirectionGroup,
    /// Everything else.
    pub descending: DirectionGroup,
}

impl Classified {
    /// The two groups in processing order: ascending first.
    pub fn in_order(&self) -> [&DirectionGroup; 2] {
        [&self.ascending, &self.descending]
    }
}

/// Partition `batch` by derived direction.
///
/// Never fails; either group may come back empty.  The batch itself is left
/// untouched and each group keeps the batch's relative order.
pub fn classify(batch: &RequestBatch) -> Classified {
    let mut ascending  = DirectionGroup::empty(Direction::Up);
    let mut descending = DirectionGroup::empty(Direction::Down);

    for &request in batch {
        match request.direction() {
            Direction::Up   => ascending.push(request),
            Direction::Down => descending.push(request),
        }
    }

    tracing::debug!(
        ascending = ascending.len(),
        descending = descending.len(),
        "classified request batch"
    );

    Classified { ascending, descending }
}
