//! Agents for the Physarum simulation.
//!
//! An [`Agent`] is a point with a heading and a speed multiplier. The
//! [`AgentStore`] owns the whole population and replaces it in bulk on
//! every spawn; a [`SpawnPolicy`] decides how many agents a map gets and
//! how they are scattered around the source point.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod spawn;
pub mod store;

pub use agent::Agent;
pub use spawn::SpawnPolicy;
pub use store::AgentStore;
