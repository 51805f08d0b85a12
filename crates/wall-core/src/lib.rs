#![deny(missing_docs)]

//! Core types for the masonry wall planner: the dimensional model, brick and
//! course values, the shared error taxonomy and the seeded RNG policy.

pub mod dims;
pub mod errors;
pub mod rng;
mod types;
pub mod units;

pub use dims::{Dimensions, WallGeometry};
pub use errors::{ErrorInfo, WallError};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{Brick, BrickId, BrickKind, BrickSpec, Course, Footprint, Orientation};
pub use units::Length;
