//! `TraceOutputObserver<W>`: bridges `SimObserver` to a `TraceWriter`.

use lift_sim::{CarState, Phase, RunSummary, SimObserver, TraceEvent};

use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult, RowKind, TraceRow};

/// A [`SimObserver`] that turns every callback into a [`TraceRow`] and hands
/// it to a [`TraceWriter`] backend (text, CSV, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceOutputObserver<W: TraceWriter> {
    writer:     W,
    seq:        u64,
    phase:      Phase,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            seq:        0,
            phase:      Phase::Idle,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        seq
    }

    fn write(&mut self, row: TraceRow) {
        // Stop writing after the first failure.
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_row(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "trace output failed");
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for TraceOutputObserver<W> {
    fn on_run_start(&mut self, car: &CarState) {
        self.seq = 0;
        self.phase = Phase::Idle;
        let seq = self.next_seq();
        self.write(TraceRow::marker(seq, self.phase, RowKind::Start, car));
    }

    fn on_phase(&mut self, phase: Phase, car: &CarState) {
        self.phase = phase;
        let seq = self.next_seq();
        self.write(TraceRow::marker(seq, phase, RowKind::Phase, car));
    }

    fn on_event(&mut self, event: &TraceEvent, car: &CarState) {
        let seq = self.next_seq();
        self.write(TraceRow::event(seq, self.phase, event, car));
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.phase = Phase::Idle;
        let seq = self.next_seq();
        self.write(TraceRow::marker(seq, Phase::Idle, RowKind::Idle, &summary.final_car));
        let result = self.writer.finish();
        self.store_err(result);
    }
}
