//! Trail grid storage for the Physarum simulation.
//!
//! - [`GridGeometry`] maps continuous world coordinates onto grid cells.
//! - [`Kernel3x3`] holds the normalised diffusion weights.
//! - [`TrailField`] is the double-buffered scalar grid agents deposit into
//!   and sense from.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod hash;
pub mod kernel;
pub mod trail;

pub use error::GridError;
pub use grid::GridGeometry;
pub use kernel::Kernel3x3;
pub use trail::TrailField;
