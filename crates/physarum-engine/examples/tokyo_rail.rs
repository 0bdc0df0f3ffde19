//! Grow a network over sixteen Tokyo stations and compare it with the
//! simplified rail map.
//!
//! Prints progress every hundred ticks and writes the final snapshot as
//! JSON to the path given on the command line, if any.
//!
//! Run with:
//!   cargo run --example tokyo_rail -- tokyo.json

use std::fs::File;
use std::io::BufWriter;

use physarum_engine::{Preset, SimulationController, PROGRESS_HORIZON};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let preset = Preset::tokyo_rail();
    let mut sim = SimulationController::new(preset.config().clone())?;
    preset.apply(&mut sim)?;
    println!(
        "{}: {} stations, reference network {:.1} units",
        preset.name(),
        preset.stations().len(),
        preset.reference_length()
    );

    sim.start()?;
    while sim.iteration().0 < PROGRESS_HORIZON {
        sim.step()?;
        if sim.iteration().0 % 100 == 0 {
            let stats = sim.stats();
            println!(
                "  tick {:>4}: length={:>9.1}, similarity={:>5.1}%, progress={:>5.1}%",
                stats.iterations,
                stats.path_length,
                preset.similarity(&stats),
                preset.progress(&stats, PROGRESS_HORIZON),
            );
        }
    }
    sim.stop();

    if let Some(path) = std::env::args().nth(1) {
        let owned = sim.snapshot().to_owned();
        serde_json::to_writer(BufWriter::new(File::create(&path)?), &owned)?;
        info!(path = %path, edges = owned.paths.len(), "snapshot written");
    }
    Ok(())
}
