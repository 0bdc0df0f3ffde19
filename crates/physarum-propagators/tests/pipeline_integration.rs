//! The five stages run together as the standard tick.

use physarum_agents::{AgentStore, SpawnPolicy};
use physarum_core::{FoodSource, Point};
use physarum_propagator::{Pipeline, Propagator};
use physarum_propagators::{
    DiffuseDecay, PathExtraction, ReflectiveMovement, SensorSteering, TrailDeposition,
};
use physarum_test_utils::{seeded_rng, unit_geometry, StepHarness};

fn standard_pipeline() -> Pipeline {
    let stages: Vec<Box<dyn Propagator>> = vec![
        Box::new(SensorSteering::builder().build().unwrap()),
        Box::new(ReflectiveMovement::default()),
        Box::new(TrailDeposition::default()),
        Box::new(DiffuseDecay::default()),
        Box::new(PathExtraction::default()),
    ];
    Pipeline::new(stages).unwrap()
}

fn populated_harness(seed: u64) -> StepHarness {
    let geometry = unit_geometry(120, 90);
    let mut h = StepHarness::new(physarum_field::TrailField::new(geometry));
    h.food = vec![
        FoodSource::new(90.0, 30.0, "food"),
        FoodSource::new(30.0, 70.0, "food"),
    ];
    let mut agents = AgentStore::new();
    let policy = SpawnPolicy {
        max_agents: 1500,
        ..SpawnPolicy::default()
    };
    agents.spawn(
        Some(Point::new(60.0, 45.0)),
        h.food.len(),
        &policy,
        geometry.bounds(),
        &mut seeded_rng(seed),
    );
    h.agents = agents;
    h.rng = seeded_rng(seed);
    h
}

#[test]
fn stage_order_is_standard() {
    let names: Vec<_> = standard_pipeline().names().map(str::to_owned).collect();
    assert_eq!(
        names,
        [
            "SensorSteering",
            "ReflectiveMovement",
            "TrailDeposition",
            "DiffuseDecay",
            "PathExtraction",
        ]
    );
}

#[test]
fn invariants_hold_over_many_ticks() {
    let pipeline = standard_pipeline();
    let mut h = populated_harness(42);
    let bounds = h.field.geometry().bounds();
    for _ in 0..60 {
        let timings = h.run_pipeline(&pipeline).unwrap();
        assert_eq!(timings.len(), 5);
        assert!(h.agents.iter().all(|a| bounds.contains(a.position)));
        assert!(h.field.values().iter().all(|v| (0.0..=1.0).contains(v)));
        for edge in &h.paths {
            assert!(edge.strength > 0.2 && edge.strength <= 1.0);
        }
    }
    assert_eq!(h.agents.len(), 1500);
}

#[test]
fn dense_swarm_produces_paths() {
    let pipeline = standard_pipeline();
    let mut h = populated_harness(7);
    for _ in 0..30 {
        h.run_pipeline(&pipeline).unwrap();
    }
    // 1500 agents around a single point saturate the neighbourhood.
    assert!(!h.paths.is_empty());
    assert!(h.field.max() > 0.2);
}

#[test]
fn same_seed_is_bit_identical() {
    let pipeline = standard_pipeline();
    let mut a = populated_harness(3);
    let mut b = populated_harness(3);
    for _ in 0..20 {
        a.run_pipeline(&pipeline).unwrap();
        b.run_pipeline(&pipeline).unwrap();
        assert_eq!(a.field.digest(), b.field.digest());
    }
    assert_eq!(a.paths, b.paths);
}

#[test]
fn different_seeds_diverge() {
    let pipeline = standard_pipeline();
    let mut a = populated_harness(1);
    let mut b = populated_harness(2);
    for _ in 0..5 {
        a.run_pipeline(&pipeline).unwrap();
        b.run_pipeline(&pipeline).unwrap();
    }
    assert_ne!(a.field.digest(), b.field.digest());
}
