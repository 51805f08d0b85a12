use serde::{Deserialize, Serialize};
use tracing::debug;
use wall_build::Wall;
use wall_core::{BrickId, ErrorInfo, WallError};

use crate::graph::SupportGraph;
use crate::interleave::{interleave, QueueKey};
use crate::order::{PlacementOrder, PlacementStep};

/// Capability shared by every ordering strategy.
pub trait BuildStrategy {
    /// Stable kebab-case name.
    fn name(&self) -> &'static str;

    /// Human readable description.
    fn description(&self) -> &'static str;

    /// Orders every brick of the wall so each follows the bricks it rests on.
    fn order(&self, wall: &Wall) -> Result<PlacementOrder, WallError>;
}

/// Lateral direction used inside a stride cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Left to right in every course.
    #[default]
    Raster,
    /// Left to right in even courses, right to left in odd ones.
    Serpentine,
}

impl Traversal {
    fn lateral_key(self, course: u32, x: u32, wall_width: u32) -> u32 {
        match self {
            Traversal::Serpentine if course % 2 == 1 => wall_width - x,
            _ => x,
        }
    }
}

/// Completes one stride cell at a time, as far as support allows.
///
/// Cells are visited in row-major raster order from the bottom-left. The
/// current cell keeps going, bottom course first, until none of its remaining
/// bricks is supported; the robot then moves to the first cell in raster
/// order that has a supported brick. Restarting from the first cell rather
/// than the next one returns to cells that were blocked only by a neighbour,
/// finishing them while the platform is still at their height instead of
/// leaving them for a second pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrideOptimized {
    /// Direction inside each course.
    pub traversal: Traversal,
}

impl BuildStrategy for StrideOptimized {
    fn name(&self) -> &'static str {
        "stride-optimized"
    }

    fn description(&self) -> &'static str {
        match self.traversal {
            Traversal::Raster => {
                "Bottom stride row first, left-to-right across strides, then move the platform up; \
                 left-to-right inside each stride."
            }
            Traversal::Serpentine => {
                "Bottom stride row first, left-to-right across strides, then move the platform up; \
                 serpentine traversal inside each stride."
            }
        }
    }

    fn order(&self, wall: &Wall) -> Result<PlacementOrder, WallError> {
        let graph = SupportGraph::from_wall(wall);
        let wall_width = wall.geometry().dimensions().wall_width.tenths();
        let mut cell_of = Vec::with_capacity(wall.brick_count());
        let mut keys: Vec<QueueKey> = Vec::with_capacity(wall.brick_count());
        for brick in wall.bricks() {
            cell_of.push(cell_index(wall, brick.id)?);
            keys.push((
                brick.course,
                self.traversal
                    .lateral_key(brick.course, brick.x.tenths(), wall_width),
            ));
        }
        let ids = interleave(&graph, &cell_of, &keys, wall.grid().len())?;
        let order = placement(self.name(), wall, &ids)?;
        debug!(
            strategy = self.name(),
            transitions = order.stride_transitions(),
            "stride-optimized order ready"
        );
        Ok(order)
    }
}

/// Naive baseline: bottom course to top, left to right, ignoring strides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseByCourse;

impl BuildStrategy for CourseByCourse {
    fn name(&self) -> &'static str {
        "course-by-course"
    }

    fn description(&self) -> &'static str {
        "Every course left to right before moving up, regardless of strides."
    }

    fn order(&self, wall: &Wall) -> Result<PlacementOrder, WallError> {
        let ids: Vec<BrickId> = wall.bricks().map(|brick| brick.id).collect();
        placement(self.name(), wall, &ids)
    }
}

/// Closed set of strategies selectable from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Strategy {
    /// See [`StrideOptimized`].
    StrideOptimized {
        /// Direction inside each course.
        #[serde(default)]
        traversal: Traversal,
    },
    /// See [`CourseByCourse`].
    CourseByCourse,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::StrideOptimized {
            traversal: Traversal::default(),
        }
    }
}

impl BuildStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::StrideOptimized { traversal } => StrideOptimized {
                traversal: *traversal,
            }
            .name(),
            Strategy::CourseByCourse => CourseByCourse.name(),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Strategy::StrideOptimized { traversal } => StrideOptimized {
                traversal: *traversal,
            }
            .description(),
            Strategy::CourseByCourse => CourseByCourse.description(),
        }
    }

    fn order(&self, wall: &Wall) -> Result<PlacementOrder, WallError> {
        match self {
            Strategy::StrideOptimized { traversal } => StrideOptimized {
                traversal: *traversal,
            }
            .order(wall),
            Strategy::CourseByCourse => CourseByCourse.order(wall),
        }
    }
}

fn cell_index(wall: &Wall, id: BrickId) -> Result<usize, WallError> {
    wall.cell_of(id)
        .map(|cell| cell.index())
        .ok_or_else(|| unassigned(id))
}

fn placement(strategy: &str, wall: &Wall, ids: &[BrickId]) -> Result<PlacementOrder, WallError> {
    let steps = ids
        .iter()
        .map(|id| {
            let brick = wall.brick(*id).ok_or_else(|| unassigned(*id))?;
            let cell = wall.cell_of(*id).ok_or_else(|| unassigned(*id))?;
            Ok(PlacementStep {
                brick: *id,
                cell,
                footprint: brick.footprint(),
            })
        })
        .collect::<Result<Vec<_>, WallError>>()?;
    Ok(PlacementOrder::new(strategy, steps))
}

fn unassigned(id: BrickId) -> WallError {
    WallError::StrideOverflow(
        ErrorInfo::new("unassigned-brick", "brick has no stride cell")
            .with_context("brick", id.as_raw()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serpentine_reverses_odd_courses() {
        assert_eq!(Traversal::Serpentine.lateral_key(1, 100, 2300), 2200);
        assert_eq!(Traversal::Serpentine.lateral_key(2, 100, 2300), 100);
        assert_eq!(Traversal::Raster.lateral_key(1, 100, 2300), 100);
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Strategy::default().name(), "stride-optimized");
        assert_eq!(Strategy::CourseByCourse.name(), "course-by-course");
        assert!(Strategy::default().description().contains("left-to-right inside"));
    }
}
