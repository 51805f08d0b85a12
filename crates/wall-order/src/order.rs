use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use wall_build::CellId;
use wall_core::{BrickId, Footprint};

use crate::graph::SupportGraph;

/// One placement: which brick, from which stride cell, where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementStep {
    /// Brick being laid.
    pub brick: BrickId,
    /// Stride cell the robot works from.
    pub cell: CellId,
    /// Face rectangle of the brick.
    pub footprint: Footprint,
}

/// Total order over every brick of a wall, produced by one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOrder {
    strategy: String,
    steps: Vec<PlacementStep>,
}

impl PlacementOrder {
    /// Wraps an ordered list of steps.
    pub fn new(strategy: impl Into<String>, steps: Vec<PlacementStep>) -> Self {
        Self {
            strategy: strategy.into(),
            steps,
        }
    }

    /// Name of the strategy that produced the order.
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the order is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Placements in build order.
    pub fn steps(&self) -> &[PlacementStep] {
        &self.steps
    }

    /// Brick ids in build order.
    pub fn bricks(&self) -> Vec<BrickId> {
        self.steps.iter().map(|step| step.brick).collect()
    }

    /// Number of consecutive placements that change stride cell.
    pub fn stride_transitions(&self) -> usize {
        self.steps
            .windows(2)
            .filter(|pair| pair[0].cell != pair[1].cell)
            .count()
    }

    /// Number of different cells visited.
    pub fn distinct_strides(&self) -> usize {
        self.steps
            .iter()
            .map(|step| step.cell)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Whether every brick follows all bricks it rests on.
    pub fn is_linear_extension(&self, graph: &SupportGraph) -> bool {
        graph.is_linear_extension(&self.bricks())
    }

    /// One-line summary for logs and status bars.
    pub fn summary(&self) -> String {
        format!(
            "stride switches={}, distinct strides={}, total bricks={}",
            self.stride_transitions(),
            self.distinct_strides(),
            self.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wall_core::Length;

    fn step(brick: u32, cell: u32) -> PlacementStep {
        PlacementStep {
            brick: BrickId::from_raw(brick),
            cell: CellId::from_raw(cell),
            footprint: Footprint {
                x: Length::ZERO,
                y: Length::ZERO,
                width: Length::from_mm(210),
                height: Length::from_mm(50),
            },
        }
    }

    #[test]
    fn counts_transitions_and_cells() {
        let order = PlacementOrder::new("test", vec![step(0, 0), step(1, 0), step(2, 1), step(3, 0)]);
        assert_eq!(order.stride_transitions(), 2);
        assert_eq!(order.distinct_strides(), 2);
        assert_eq!(
            order.summary(),
            "stride switches=2, distinct strides=2, total bricks=4"
        );
    }

    #[test]
    fn empty_order_has_no_transitions() {
        let order = PlacementOrder::new("test", Vec::new());
        assert!(order.is_empty());
        assert_eq!(order.stride_transitions(), 0);
        assert_eq!(order.distinct_strides(), 0);
    }
}
