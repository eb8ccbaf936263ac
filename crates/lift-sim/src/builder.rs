//! Fluent builder for constructing a [`Sim`].

use lift_core::{BuildingConfig, RequestBatch};
use lift_schedule::TraversalPolicy;

use crate::{CarState, Phase, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`BuildingConfig`] — floors, batch size, capacity
/// - [`RequestBatch`] — the requests to service
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                        |
/// |---------------|--------------------------------|
/// | `.policy(p)`  | `TraversalPolicy::FullSweep`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(BuildingConfig::default(), batch)
///     .policy(TraversalPolicy::SparseStop)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: BuildingConfig,
    batch:  RequestBatch,
    policy: Option<TraversalPolicy>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: BuildingConfig, batch: RequestBatch) -> Self {
        Self { config, batch, policy: None }
    }

    /// Choose the traversal policy.
    pub fn policy(mut self, policy: TraversalPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Validate the config and every request of the batch, and return a
    /// ready-to-run [`Sim`].
    ///
    /// This is the gate in front of the core: a `Sim` never holds a batch
    /// that is too large or has out-of-range or same-floor requests.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate().map_err(SimError::Config)?;
        self.batch.validate(&self.config).map_err(SimError::InvalidBatch)?;

        Ok(Sim {
            config: self.config,
            policy: self.policy.unwrap_or_default(),
            car:    CarState::at_ground(),
            batch:  self.batch,
            phase:  Phase::Idle,
        })
    }
}
