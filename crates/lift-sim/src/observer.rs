//! Simulation observer trait for trace rendering and data collection.

use crate::{CarState, Phase, RunSummary, TraceEvent};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the trace is
/// produced.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — floor printer
///
/// ```rust,ignore
/// struct FloorPrinter;
///
/// impl SimObserver for FloorPrinter {
///     fn on_event(&mut self, event: &TraceEvent, car: &CarState) {
///         println!("{:?} [passengers: {}]", event, car.passengers);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before anything moves, with the car idle at the ground.
    fn on_run_start(&mut self, _car: &CarState) {}

    /// Called when a phase with work to do begins.
    ///
    /// Phases that would do nothing (an empty direction group, or returning
    /// to ground while already there) are not reported.
    fn on_phase(&mut self, _phase: Phase, _car: &CarState) {}

    /// Called for every trace event, after the car state has been updated.
    fn on_event(&mut self, _event: &TraceEvent, _car: &CarState) {}

    /// Called once after the car is idle at the ground floor again.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Forward every callback to both observers, left first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_run_start(&mut self, car: &CarState) {
        self.0.on_run_start(car);
        self.1.on_run_start(car);
    }

    fn on_phase(&mut self, phase: Phase, car: &CarState) {
        self.0.on_phase(phase, car);
        self.1.on_phase(phase, car);
    }

    fn on_event(&mut self, event: &TraceEvent, car: &CarState) {
        self.0.on_event(event, car);
        self.1.on_event(event, car);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.0.on_run_end(summary);
        self.1.on_run_end(summary);
    }
}

/// An absent observer ignores every callback.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_run_start(&mut self, car: &CarState) {
        if let Some(o) = self {
            o.on_run_start(car);
        }
    }

    fn on_phase(&mut self, phase: Phase, car: &CarState) {
        if let Some(o) = self {
            o.on_phase(phase, car);
        }
    }

    fn on_event(&mut self, event: &TraceEvent, car: &CarState) {
        if let Some(o) = self {
            o.on_event(event, car);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        if let Some(o) = self {
            o.on_run_end(summary);
        }
    }
}

// ── TraceRecorder ─────────────────────────────────────────────────────────────

/// One recorded event with the phase it belongs to and the car afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RecordedEvent {
    pub phase: Phase,
    pub event: TraceEvent,
    pub car:   CarState,
}

/// A [`SimObserver`] that keeps the whole trace in memory.
#[derive(Default, Debug)]
pub struct TraceRecorder {
    pub started: bool,
    pub phases:  Vec<Phase>,
    pub entries: Vec<RecordedEvent>,
    pub summary: Option<RunSummary>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bare events, in emission order.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.entries.iter().map(|e| e.event).collect()
    }

    /// Events other than moves.
    pub fn stops(&self) -> Vec<TraceEvent> {
        self.entries
            .iter()
            .map(|e| e.event)
            .filter(|e| !e.is_move())
            .collect()
    }

    fn current_phase(&self) -> Phase {
        self.phases.last().copied().unwrap_or(Phase::Idle)
    }
}

impl SimObserver for TraceRecorder {
    fn on_run_start(&mut self, _car: &CarState) {
        self.started = true;
    }

    fn on_phase(&mut self, phase: Phase, _car: &CarState) {
        self.phases.push(phase);
    }

    fn on_event(&mut self, event: &TraceEvent, car: &CarState) {
        self.entries.push(RecordedEvent {
            phase: self.current_phase(),
            event: *event,
            car:   *car,
        });
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.summary = Some(*summary);
    }
}
