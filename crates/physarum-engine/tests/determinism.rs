//! Seeded runs replay exactly; stage failures stop the run.

use std::sync::atomic::Ordering;

use physarum_core::{StepError, TickId};
use physarum_engine::{RunState, SimConfig, SimulationController, StepOutcome};
use physarum_propagator::{Pipeline, Propagator};
use physarum_test_utils::{CountingPropagator, FailingPropagator, FillPropagator};

fn config(seed: u64) -> SimConfig {
    let mut c = SimConfig::default();
    c.seed = seed;
    c.world.width = 300.0;
    c.world.height = 200.0;
    c.spawn.max_agents = 800;
    c
}

fn running(seed: u64) -> SimulationController {
    let mut sim = SimulationController::new(config(seed)).unwrap();
    sim.set_source(150.0, 100.0).unwrap();
    sim.add_food_source(250.0, 50.0, "food").unwrap();
    sim.add_food_source(40.0, 160.0, "food").unwrap();
    sim.start().unwrap();
    sim
}

#[test]
fn same_seed_gives_identical_digests() {
    let mut a = running(11);
    let mut b = running(11);
    for _ in 0..25 {
        a.step().unwrap();
        b.step().unwrap();
        assert_eq!(a.field().digest(), b.field().digest());
    }
    assert_eq!(a.paths(), b.paths());
    assert_eq!(a.agents().as_slice(), b.agents().as_slice());
}

#[test]
fn different_seeds_diverge() {
    let mut a = running(1);
    let mut b = running(2);
    for _ in 0..5 {
        a.step().unwrap();
        b.step().unwrap();
    }
    assert_ne!(a.field().digest(), b.field().digest());
}

#[test]
fn reseed_matches_fresh_controller() {
    let mut a = running(3);
    a.reset();
    a.reseed(9);
    a.start().unwrap();
    let mut b = running(9);
    for _ in 0..10 {
        a.step().unwrap();
        b.step().unwrap();
    }
    assert_eq!(a.field().digest(), b.field().digest());
    assert_eq!(a.config().seed, 9);
}

#[test]
fn stage_failure_stops_without_advancing() {
    let failing = FailingPropagator::new("flaky", 2);
    let calls = failing.calls();
    let stages: Vec<Box<dyn Propagator>> = vec![
        Box::new(CountingPropagator::new("count")),
        Box::new(failing),
    ];
    let pipeline = Pipeline::new(stages).unwrap();
    let mut sim = SimulationController::with_pipeline(config(0), pipeline).unwrap();
    sim.set_source(150.0, 100.0).unwrap();
    sim.add_food_source(250.0, 50.0, "food").unwrap();
    sim.start().unwrap();

    assert_eq!(sim.step().unwrap(), StepOutcome::Advanced(TickId(1)));
    assert_eq!(sim.step().unwrap(), StepOutcome::Advanced(TickId(2)));
    match sim.step() {
        Err(StepError::PropagatorFailed { name, .. }) => assert_eq!(name, "flaky"),
        other => panic!("expected stage failure, got {other:?}"),
    }
    assert_eq!(sim.iteration(), TickId(2));
    assert_eq!(sim.run_state(), RunState::Idle);
    assert_eq!(sim.step().unwrap(), StepOutcome::Skipped);
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[test]
fn custom_pipeline_writes_are_visible() {
    let stages: Vec<Box<dyn Propagator>> = vec![Box::new(FillPropagator::new("fill", 0.5))];
    let pipeline = Pipeline::new(stages).unwrap();
    let mut sim = SimulationController::with_pipeline(config(0), pipeline).unwrap();
    sim.set_source(150.0, 100.0).unwrap();
    sim.add_food_source(250.0, 50.0, "food").unwrap();
    sim.start().unwrap();
    sim.step().unwrap();
    assert!(sim.field().values().iter().all(|&v| v == 0.5));
    assert_eq!(sim.last_metrics().propagator_us.len(), 1);
}
