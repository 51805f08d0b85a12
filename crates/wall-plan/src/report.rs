use serde::{Deserialize, Serialize};
use wall_bond::BondName;
use wall_build::StrideCell;
use wall_core::WallError;
use wall_order::PlacementStep;

use crate::serde::{from_json_str, to_canonical_json};

/// Serializable outcome of a plan, handed to renderers and controllers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Bond pattern used.
    pub bond: BondName,
    /// Seed consumed by the wild bond; absent for deterministic bonds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of courses.
    pub courses: u32,
    /// Total number of bricks.
    pub brick_count: usize,
    /// Stride grid rows.
    pub grid_rows: u32,
    /// Stride grid columns.
    pub grid_cols: u32,
    /// Cells with their assigned bricks, in raster order.
    pub cells: Vec<StrideCell>,
    /// SHA-256 of the generated layout.
    pub layout_hash: String,
    /// One entry per requested strategy.
    pub orders: Vec<OrderReport>,
}

/// Placement sequence produced by one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReport {
    /// Strategy name.
    pub strategy: String,
    /// Strategy description.
    pub description: String,
    /// Number of stride changes along the sequence.
    pub stride_transitions: usize,
    /// Number of different cells visited.
    pub distinct_strides: usize,
    /// Placements in build order.
    pub steps: Vec<PlacementStep>,
}

impl PlanReport {
    /// Pretty JSON with sorted keys.
    pub fn to_json(&self) -> Result<String, WallError> {
        to_canonical_json(self)
    }

    /// Parses a report produced by [`PlanReport::to_json`].
    pub fn from_json(data: &str) -> Result<Self, WallError> {
        from_json_str(data)
    }

    /// Report for the named strategy.
    pub fn order(&self, strategy: &str) -> Option<&OrderReport> {
        self.orders.iter().find(|order| order.strategy == strategy)
    }
}
