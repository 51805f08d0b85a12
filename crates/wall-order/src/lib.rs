#![deny(missing_docs)]

//! Build-order optimisation. Every strategy produces a linear extension of
//! the support graph; the stride-aware one also keeps the robot in one stride
//! cell for as long as the structure allows.

mod graph;
mod interleave;
mod order;
mod strategy;

pub use graph::SupportGraph;
pub use order::{PlacementOrder, PlacementStep};
pub use strategy::{BuildStrategy, CourseByCourse, Strategy, StrideOptimized, Traversal};
