#![deny(missing_docs)]

//! Wall assembly: tiles the wall with stride cells, assigns every brick to the
//! cell holding its centroid and records which bricks each brick rests on.

mod grid;
mod wall;

pub use grid::{CellId, StrideCell, StrideGrid};
pub use wall::{build, Wall, WallBuilder};
