//! Integration tests for lift-sim.

use lift_core::{BatchRng, BuildingConfig, Direction, Floor, Request, RequestBatch};
use lift_schedule::{DirectionGroup, Precedence, StopPlan, TraversalPolicy};

use crate::{
    CarState, Dispatcher, NoopObserver, Phase, SimBuilder, SimObserver, TraceEvent, TraceRecorder,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn batch(pairs: &[(u8, u8)]) -> RequestBatch {
    pairs
        .iter()
        .map(|&(s, d)| Request::new(Floor(s), Floor(d)))
        .collect()
}

fn mv(from: u8, to: u8) -> TraceEvent {
    TraceEvent::Move { from: Floor(from), to: Floor(to) }
}

fn board(floor: u8, count: u32) -> TraceEvent {
    TraceEvent::Board { floor: Floor(floor), count }
}

fn alight(floor: u8, count: u32) -> TraceEvent {
    TraceEvent::Alight { floor: Floor(floor), count }
}

/// Moves walking from `from` to `to` one floor at a time.
fn walk(from: u8, to: u8) -> Vec<TraceEvent> {
    let mut out = Vec::new();
    let mut f = Floor(from);
    while f != Floor(to) {
        let next = f.step_toward(Floor(to));
        out.push(TraceEvent::Move { from: f, to: next });
        f = next;
    }
    out
}

fn record(config: BuildingConfig, pairs: &[(u8, u8)], policy: TraversalPolicy) -> TraceRecorder {
    let mut sim = SimBuilder::new(config, batch(pairs))
        .policy(policy)
        .build()
        .unwrap();
    let mut rec = TraceRecorder::new();
    sim.run(&mut rec);
    rec
}

fn sum_counts(events: &[TraceEvent], pick: fn(&TraceEvent) -> bool) -> u32 {
    events.iter().filter(|e| pick(e)).map(TraceEvent::count).sum()
}

fn is_board(e: &TraceEvent) -> bool {
    matches!(e, TraceEvent::Board { .. })
}

fn is_alight(e: &TraceEvent) -> bool {
    matches!(e, TraceEvent::Alight { .. })
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_default_policy() {
        let sim = SimBuilder::new(BuildingConfig::default(), batch(&[(1, 4)]))
            .build()
            .unwrap();
        assert_eq!(sim.policy, TraversalPolicy::FullSweep);
        assert_eq!(sim.car, CarState::at_ground());
        assert_eq!(sim.phase(), Phase::Idle);
        assert_eq!(sim.batch().len(), 1);
    }

    #[test]
    fn oversized_batch_rejected() {
        let result = SimBuilder::new(
            BuildingConfig::default(),
            batch(&[(1, 2), (2, 3), (3, 4), (4, 5)]),
        )
        .build();
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_request_rejected() {
        let result = SimBuilder::new(BuildingConfig::default(), batch(&[(1, 10)])).build();
        assert!(result.is_err());
    }

    #[test]
    fn same_floor_request_rejected() {
        let result = SimBuilder::new(BuildingConfig::default(), batch(&[(3, 3)])).build();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_config_rejected() {
        let config = BuildingConfig { max_capacity: 0, ..Default::default() };
        let result = SimBuilder::new(config, RequestBatch::new()).build();
        assert!(matches!(result, Err(crate::SimError::Config(_))));
    }
}

// ── Runs ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runs {
    use super::*;

    #[test]
    fn two_ascending_requests_share_drop_floor() {
        let rec = record(BuildingConfig::default(), &[(1, 4), (2, 4)], TraversalPolicy::FullSweep);
        assert_eq!(rec.stops(), vec![board(1, 1), board(2, 1), alight(4, 2)]);

        // The sweep runs to the top floor, then returns to ground.
        let mut expected = vec![board(1, 1), mv(1, 2), board(2, 1)];
        expected.extend(walk(2, 4));
        expected.push(alight(4, 2));
        expected.extend(walk(4, 9));
        expected.extend(walk(9, 1));
        assert_eq!(rec.events(), expected);
        assert_eq!(rec.phases, vec![Phase::Ascending, Phase::ReturningToGround]);
    }

    #[test]
    fn sparse_stop_skips_floors_without_demand() {
        let rec = record(BuildingConfig::default(), &[(1, 4), (2, 4)], TraversalPolicy::SparseStop);
        let mut expected = vec![board(1, 1), mv(1, 2), board(2, 1)];
        expected.extend(walk(2, 4));
        expected.push(alight(4, 2));
        expected.extend(walk(4, 1));
        assert_eq!(rec.events(), expected);
        // Peak load is 2, under the capacity of 3.
        assert!(rec.entries.iter().all(|e| e.car.passengers <= 2));
    }

    #[test]
    fn boarding_overflow_is_silently_dropped() {
        let config = BuildingConfig { max_requests: 4, ..Default::default() };
        let rec = record(config, &[(1, 5), (1, 6), (1, 7), (1, 9)], TraversalPolicy::FullSweep);

        assert_eq!(rec.stops(), vec![board(1, 3), alight(5, 1), alight(6, 1), alight(7, 1)]);

        let summary = rec.summary.unwrap();
        assert_eq!(summary.stats.boarded, 3);
        assert_eq!(summary.stats.alighted, 3);
        assert_eq!(summary.stats.dropped, 1);
        // The dropped passenger's floor-9 exit has nobody to satisfy it.
        assert_eq!(summary.stats.truncated, 1);
        assert!(!rec.events().contains(&alight(9, 1)));
    }

    #[test]
    fn single_descending_request() {
        let rec = record(BuildingConfig::default(), &[(5, 2)], TraversalPolicy::FullSweep);
        let mut expected = walk(1, 5);
        expected.push(board(5, 1));
        expected.extend(walk(5, 2));
        expected.push(alight(2, 1));
        expected.extend(walk(2, 1));
        assert_eq!(rec.events(), expected);
        assert_eq!(rec.summary.unwrap().final_car, CarState::at_ground());
        // The descending sweep already ends at ground, no return phase.
        assert_eq!(rec.phases, vec![Phase::Descending]);
    }

    #[test]
    fn single_descending_request_same_under_both_policies() {
        let full = record(BuildingConfig::default(), &[(5, 2)], TraversalPolicy::FullSweep);
        let sparse = record(BuildingConfig::default(), &[(5, 2)], TraversalPolicy::SparseStop);
        assert_eq!(full.events(), sparse.events());
    }

    #[test]
    fn ascending_processed_before_descending() {
        for policy in [TraversalPolicy::FullSweep, TraversalPolicy::SparseStop] {
            // Descending request listed first.
            let rec = record(BuildingConfig::default(), &[(5, 2), (1, 4)], policy);
            let phases: Vec<Phase> = rec.entries.iter().map(|e| e.phase).collect();
            assert!(phases.is_sorted(), "{policy}: phases interleaved: {phases:?}");

            let events = rec.events();
            let pos = |e: TraceEvent| events.iter().position(|x| *x == e).unwrap();
            assert!(pos(alight(4, 1)) < pos(board(5, 1)), "{policy}");
            assert_eq!(rec.stops(), vec![board(1, 1), alight(4, 1), board(5, 1), alight(2, 1)]);
        }
    }

    #[test]
    fn shared_source_floor_boards_together() {
        let rec = record(BuildingConfig::default(), &[(3, 6), (3, 8), (3, 9)], TraversalPolicy::FullSweep);
        assert_eq!(
            rec.stops(),
            vec![board(3, 3), alight(6, 1), alight(8, 1), alight(9, 1)]
        );
    }

    #[test]
    fn sparse_stop_boards_before_alighting_at_shared_floor() {
        // Floor 4 is both a destination (1 -> 4) and a source (4 -> 6).
        let rec = record(BuildingConfig::default(), &[(1, 4), (4, 6)], TraversalPolicy::SparseStop);
        assert_eq!(rec.stops(), vec![board(1, 1), board(4, 1), alight(4, 1), alight(6, 1)]);

        let full = record(BuildingConfig::default(), &[(1, 4), (4, 6)], TraversalPolicy::FullSweep);
        assert_eq!(full.stops(), vec![board(1, 1), alight(4, 1), board(4, 1), alight(6, 1)]);
    }

    #[test]
    fn board_first_can_turn_passengers_away() {
        let config = BuildingConfig { max_capacity: 1, ..Default::default() };
        let rec = record(config.clone(), &[(1, 4), (4, 6)], TraversalPolicy::SparseStop);
        assert_eq!(rec.stops(), vec![board(1, 1), alight(4, 1)]);
        assert_eq!(rec.summary.unwrap().stats.dropped, 1);

        // Alighting first frees the seat.
        let rec = record(config, &[(1, 4), (4, 6)], TraversalPolicy::FullSweep);
        assert_eq!(rec.summary.unwrap().stats.dropped, 0);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    const POLICIES: [TraversalPolicy; 2] = [TraversalPolicy::FullSweep, TraversalPolicy::SparseStop];

    #[test]
    fn repeated_runs_are_identical() {
        let mut sim = SimBuilder::new(BuildingConfig::default(), batch(&[(5, 2), (1, 4), (3, 9)]))
            .build()
            .unwrap();
        let mut first = TraceRecorder::new();
        let mut second = TraceRecorder::new();
        let a = sim.run(&mut first);
        let b = sim.run(&mut second);
        assert_eq!(first.entries, second.entries);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_batch_emits_no_events() {
        for policy in POLICIES {
            let rec = record(BuildingConfig::default(), &[], policy);
            assert!(rec.started);
            assert!(rec.phases.is_empty());
            assert!(rec.entries.is_empty());
            let summary = rec.summary.unwrap();
            assert_eq!(summary.final_car, CarState::at_ground());
            assert_eq!(summary.stats.moves, 0);
        }
    }

    #[test]
    fn everyone_boarded_alights_without_overflow() {
        let config = BuildingConfig::default();
        for policy in POLICIES {
            let rec = record(config.clone(), &[(2, 7), (3, 5), (8, 1)], policy);
            let events = rec.events();
            assert_eq!(sum_counts(&events, is_board), 3);
            assert_eq!(sum_counts(&events, is_alight), 3);
        }
    }

    /// Run many random batches and check capacity, floor range, and move
    /// continuity on every trace, plus the empty-car terminal state.
    #[test]
    fn randomized_invariants_hold() {
        let configs = [
            BuildingConfig { max_requests: 6, ..Default::default() },
            BuildingConfig { max_floor: 3, max_requests: 5, max_capacity: 1 },
            BuildingConfig { max_floor: 20, max_requests: 8, max_capacity: 2 },
        ];
        let mut rng = BatchRng::new(2024);

        for config in &configs {
            for i in 0..200 {
                let count = i % (config.max_requests + 1);
                let b = rng.batch(config, count);
                for policy in POLICIES {
                    let mut sim = SimBuilder::new(config.clone(), b.clone())
                        .policy(policy)
                        .build()
                        .unwrap();
                    let mut rec = TraceRecorder::new();
                    let summary = sim.run(&mut rec);

                    let mut floor = Floor::GROUND;
                    for entry in &rec.entries {
                        // Never over capacity.
                        assert!(entry.car.passengers <= config.max_capacity);
                        // Inside the building.
                        assert!(config.contains(entry.event.floor()));
                        if let TraceEvent::Move { from, to } = entry.event {
                            assert_eq!(from, floor, "discontinuous move in {b:?}");
                            assert_eq!(from.distance(to), 1);
                            assert!(config.contains(from));
                        }
                        floor = entry.car.floor;
                    }
                    // Idle and empty at ground.
                    assert_eq!(summary.final_car, CarState::at_ground(), "{policy} {b:?}");
                    assert_eq!(summary.stats.boarded, summary.stats.alighted);
                    if config.max_capacity as usize >= b.len() {
                        assert_eq!(summary.stats.boarded as usize, b.len());
                        assert_eq!(summary.stats.dropped, 0);
                    }
                }
            }
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    /// Observer that counts callbacks.
    #[derive(Default)]
    struct Counter {
        starts: usize,
        phases: usize,
        events: usize,
        ends:   usize,
    }

    impl SimObserver for Counter {
        fn on_run_start(&mut self, _c: &CarState) { self.starts += 1; }
        fn on_phase(&mut self, _p: Phase, _c: &CarState) { self.phases += 1; }
        fn on_event(&mut self, _e: &TraceEvent, _c: &CarState) { self.events += 1; }
        fn on_run_end(&mut self, _s: &crate::RunSummary) { self.ends += 1; }
    }

    #[test]
    fn callbacks_called_expected_number_of_times() {
        let mut sim = SimBuilder::new(BuildingConfig::default(), batch(&[(5, 2), (1, 4)]))
            .build()
            .unwrap();
        let mut obs = Counter::default();
        let summary = sim.run(&mut obs);
        assert_eq!(obs.starts, 1);
        assert_eq!(obs.ends, 1);
        // Ascending + descending; the descending sweep ends at ground.
        assert_eq!(obs.phases, 2);
        let expected_events = summary.stats.moves + 4;
        assert_eq!(obs.events as u32, expected_events);
    }

    #[test]
    fn tuple_observer_fans_out() {
        let mut sim = SimBuilder::new(BuildingConfig::default(), batch(&[(2, 3)]))
            .build()
            .unwrap();
        let mut pair = (TraceRecorder::new(), Counter::default());
        sim.run(&mut pair);
        assert_eq!(pair.0.entries.len(), pair.1.events);
        assert_eq!(pair.1.ends, 1);
    }

    #[test]
    fn optional_observer_forwards_when_present() {
        let mut sim = SimBuilder::new(BuildingConfig::default(), batch(&[(2, 3)]))
            .build()
            .unwrap();
        let mut present = Some(Counter::default());
        sim.run(&mut present);
        assert_eq!(present.map(|c| c.ends), Some(1));

        let mut absent: Option<Counter> = None;
        sim.run(&mut absent);
        assert!(absent.is_none());
    }

    #[test]
    fn noop_observer_runs() {
        let mut sim = SimBuilder::new(BuildingConfig::default(), batch(&[(9, 1)]))
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver);
        assert_eq!(summary.stats.moves, 16);
        assert_eq!(sim.phase(), Phase::Idle);
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatcher_tests {
    use super::*;

    #[test]
    fn alighting_truncated_to_occupancy() {
        let config = BuildingConfig::default();
        let group = DirectionGroup::from_requests(
            Direction::Up,
            [Request::new(Floor(1), Floor(4)), Request::new(Floor(2), Floor(4))],
        );
        let plan = StopPlan::new(Direction::Up, Precedence::AlightFirst, vec![Floor(4)]);
        let mut car = CarState { floor: Floor(4), passengers: 1 };
        let mut rec = TraceRecorder::new();

        let stats = Dispatcher::new(&config, &mut car).service(&group, &plan, &mut rec);
        assert_eq!(rec.events(), vec![alight(4, 1)]);
        assert_eq!(stats.truncated, 1);
        assert_eq!(car.passengers, 0);
    }

    #[test]
    fn full_car_boards_nobody() {
        let config = BuildingConfig::default();
        let group = DirectionGroup::from_requests(Direction::Up, [Request::new(Floor(1), Floor(5))]);
        let plan = StopPlan::new(Direction::Up, Precedence::AlightFirst, vec![Floor(1)]);
        let mut car = CarState { floor: Floor(1), passengers: 3 };
        let mut rec = TraceRecorder::new();

        let stats = Dispatcher::new(&config, &mut car).service(&group, &plan, &mut rec);
        assert!(rec.entries.is_empty());
        assert_eq!(stats.dropped, 1);
        assert_eq!(car.passengers, 3);
    }

    #[test]
    fn travel_emits_pass_through_moves() {
        let config = BuildingConfig::default();
        let group = DirectionGroup::from_requests(Direction::Down, [Request::new(Floor(6), Floor(3))]);
        let plan = StopPlan::new(Direction::Down, Precedence::BoardFirst, vec![Floor(6), Floor(3)]);
        let mut car = CarState::at_ground();
        let mut rec = TraceRecorder::new();

        let stats = Dispatcher::new(&config, &mut car).service(&group, &plan, &mut rec);
        let mut expected = walk(1, 6);
        expected.push(board(6, 1));
        expected.extend(walk(6, 3));
        expected.push(alight(3, 1));
        assert_eq!(rec.events(), expected);
        assert_eq!(stats.moves, 8);
        assert_eq!(car.floor, Floor(3));
    }

    #[test]
    fn return_to_ground_only_moves() {
        let config = BuildingConfig::default();
        let mut car = CarState { floor: Floor(3), passengers: 0 };
        let mut rec = TraceRecorder::new();
        let stats = Dispatcher::new(&config, &mut car).return_to_ground(&mut rec);
        assert_eq!(rec.events(), vec![mv(3, 2), mv(2, 1)]);
        assert_eq!(stats.moves, 2);
        assert!(car.floor.is_ground());
    }
}

// ── Handoff ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod handoff_tests {
    use std::thread;

    use super::*;
    use crate::{SimError, batch_channel};

    #[test]
    fn simulation_waits_for_published_batch() {
        let (publisher, receiver) = batch_channel();

        let worker = thread::spawn(move || {
            let mut rec = TraceRecorder::new();
            receiver
                .run_when_ready(BuildingConfig::default(), TraversalPolicy::FullSweep, &mut rec)
                .map(|summary| (summary, rec))
        });

        publisher.publish(batch(&[(1, 4), (2, 4)])).unwrap();
        let (summary, rec) = worker.join().unwrap().unwrap();
        assert_eq!(summary.requests, 2);
        assert_eq!(rec.stops(), vec![board(1, 1), board(2, 1), alight(4, 2)]);
    }

    #[test]
    fn dropped_publisher_abandons_batch() {
        let (publisher, receiver) = batch_channel();
        drop(publisher);
        assert!(matches!(receiver.wait(), Err(SimError::BatchAbandoned)));
    }

    #[test]
    fn publish_after_receiver_dropped_fails() {
        let (publisher, receiver) = batch_channel();
        drop(receiver);
        assert!(matches!(
            publisher.publish(RequestBatch::new()),
            Err(SimError::ReceiverGone)
        ));
    }

    #[test]
    fn invalid_batch_surfaces_after_handoff() {
        let (publisher, receiver) = batch_channel();
        publisher.publish(batch(&[(4, 4)])).unwrap();
        let result = receiver.run_when_ready(
            BuildingConfig::default(),
            TraversalPolicy::default(),
            &mut NoopObserver,
        );
        assert!(matches!(result, Err(SimError::InvalidBatch(_))));
    }
}
