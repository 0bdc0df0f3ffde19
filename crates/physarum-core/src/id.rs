//! Strongly-typed counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation completes one step. Survives a
/// stop/start cycle and only returns to zero on reset.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Tracks the version of the live-tunable parameters.
///
/// Incremented whenever sensitivity, decay rate, or speed is edited while
/// a controller exists, so collaborators can detect stale readouts.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ParameterVersion(pub u64);

impl ParameterVersion {
    /// The version that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ParameterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ParameterVersion {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
