#![deny(missing_docs)]

//! Request/response surface of the wall planner: a YAML-loadable
//! [`PlanRequest`] goes in, a [`WallPlan`] and its JSON [`PlanReport`] come out.

mod logging;
mod plan;
mod report;
mod request;
pub mod serde;

pub use logging::init_tracing;
pub use plan::{plan, WallPlan};
pub use report::{OrderReport, PlanReport};
pub use request::PlanRequest;
