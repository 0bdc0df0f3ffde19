//! The per-tick stages of the Physarum simulation.
//!
//! # Pipeline order (each tick)
//!
//! 1. [`SensorSteering`]: three sensors per agent, turn toward the strongest
//! 2. [`ReflectiveMovement`]: advance along the heading, bounce off edges
//! 3. [`TrailDeposition`]: each agent adds to the cell it stands in
//! 4. [`DiffuseDecay`]: 3x3 blur then multiplicative fade
//! 5. [`PathExtraction`]: threshold the field into right/down edges
//!
//! [`FoodAttraction`] is not a stage; steering adds it to every sensor
//! reading.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod attraction;
pub mod deposition;
pub mod diffuse_decay;
pub mod movement;
pub mod path_extraction;
pub mod steering;

pub use attraction::FoodAttraction;
pub use deposition::TrailDeposition;
pub use diffuse_decay::DiffuseDecay;
pub use movement::ReflectiveMovement;
pub use path_extraction::{extract_paths, PathExtraction};
pub use steering::{classify, SensorSteering, Turn};
