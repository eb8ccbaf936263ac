//! One-shot handoff of a finalized batch from the input side to the
//! simulation side.
//!
//! The input layer keeps the [`BatchPublisher`] while it collects requests;
//! `publish` consumes it, so a batch can be finalized at most once.  The
//! simulation side blocks in [`BatchReceiver::wait`] until that happens.
//! After the handoff the batch has a single owner and needs no further
//! synchronization.

use crossbeam_channel::{Receiver, Sender, bounded};

use lift_core::{BuildingConfig, RequestBatch};
use lift_schedule::TraversalPolicy;

use crate::{RunSummary, SimBuilder, SimError, SimObserver, SimResult};

/// Create a connected publisher/receiver pair.
pub fn batch_channel() -> (BatchPublisher, BatchReceiver) {
    let (tx, rx) = bounded(1);
    (BatchPublisher { tx }, BatchReceiver { rx })
}

/// Input side of the handoff.
pub struct BatchPublisher {
    tx: Sender<RequestBatch>,
}

impl BatchPublisher {
    /// Signal that the batch is final and hand it over.
    ///
    /// Fails only if the receiver has already been dropped.  Dropping a
    /// publisher without calling this makes the receiver's `wait` fail with
    /// [`SimError::BatchAbandoned`].
    pub fn publish(self, batch: RequestBatch) -> SimResult<()> {
        tracing::debug!(requests = batch.len(), "request batch finalized");
        self.tx.send(batch).map_err(|_| SimError::ReceiverGone)
    }
}

/// Simulation side of the handoff.
pub struct BatchReceiver {
    rx: Receiver<RequestBatch>,
}

impl BatchReceiver {
    /// Block until the batch is published.
    pub fn wait(self) -> SimResult<RequestBatch> {
        self.rx.recv().map_err(|_| SimError::BatchAbandoned)
    }

    /// Wait for the batch, then build and run a simulation over it.
    pub fn run_when_ready<O: SimObserver>(
        self,
        config:   BuildingConfig,
        policy:   TraversalPolicy,
        observer: &mut O,
    ) -> SimResult<RunSummary> {
        let batch = self.wait()?;
        let mut sim = SimBuilder::new(config, batch).policy(policy).build()?;
        Ok(sim.run(observer))
    }
}
