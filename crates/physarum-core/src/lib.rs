//! Core types and errors for the Physarum network simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: tick and
//! parameter identifiers, continuous world coordinates, the map elements a
//! collaborator places (source point and food sources), the derived
//! [`PathEdge`], the live-tunable [`Tunables`], and the error enums.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;
pub mod map;
pub mod params;
pub mod path;

pub use error::{PlacementError, PropagatorError, StartError, StepError};
pub use geometry::{Bounds, Point};
pub use id::{ParameterVersion, TickId};
pub use map::{FoodCategory, FoodSource, MapLayout, SourcePoint};
pub use params::Tunables;
pub use path::PathEdge;
