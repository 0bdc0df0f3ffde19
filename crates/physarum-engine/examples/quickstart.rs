//! Physarum quickstart: grow a network between a source and three food
//! sources.
//!
//! Demonstrates:
//!   1. Loading a config from TOML
//!   2. Placing the source and food
//!   3. Starting, stepping and reading statistics
//!   4. Live tuning and a stop/start cycle
//!   5. Exporting a snapshot as JSON
//!
//! Run with:
//!   RUST_LOG=info cargo run --example quickstart

use physarum_engine::{SimConfig, SimulationController};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
seed = 42

[world]
width = 400.0
height = 300.0
cell_size = 3.0

[spawn]
max_agents = 3000
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 1. Config.
    let config = SimConfig::from_toml_str(CONFIG)?;
    let mut sim = SimulationController::new(config)?;
    let geometry = sim.field().geometry();
    println!(
        "Grid: {}x{} cells of {} units",
        geometry.cols(),
        geometry.rows(),
        geometry.cell_size()
    );

    // 2. Map.
    sim.set_source(200.0, 150.0)?;
    sim.add_food_source(80.0, 60.0, "food")?;
    sim.add_food_source(330.0, 90.0, "food")?;
    sim.add_food_source(260.0, 250.0, "food")?;

    // 3. Run.
    let agents = sim.start()?;
    println!("Started with {agents} agents\n");
    for _ in 0..200 {
        sim.step()?;
        let tick = sim.iteration().0;
        if tick % 40 == 0 {
            let stats = sim.stats();
            println!(
                "  tick {:>3}: edges={:>5}, length={:>9.1}, efficiency={:>5.1}%, time={}us",
                tick,
                sim.paths().len(),
                stats.path_length,
                stats.efficiency,
                sim.last_metrics().total_us,
            );
        }
    }

    // 4. Faster decay, then pause and resume with a fresh population.
    sim.set_decay_rate(0.93)?;
    sim.stop();
    sim.start()?;
    for _ in 0..50 {
        sim.step()?;
    }
    println!(
        "\nAfter tuning: tick {}, {} edges, parameter version {}",
        sim.iteration(),
        sim.paths().len(),
        sim.parameter_version()
    );

    // 5. Export.
    let owned = sim.snapshot().to_owned();
    let json = serde_json::to_string(&owned.stats)?;
    println!("Stats JSON: {json}");
    println!("Field digest: {:#018x}", owned.field_digest);

    sim.reset();
    println!("Reset, tick: {}", sim.iteration());
    Ok(())
}
