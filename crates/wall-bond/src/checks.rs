//! Legality checks for generated layouts.

use serde::{Deserialize, Serialize};
use wall_core::{BrickId, BrickKind, Course, Length, WallGeometry};

use crate::bond::BondName;
use crate::joints::JointRuns;
use crate::layout::quarter_of;
use crate::wild::WildBondConfig;

/// A broken layout rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum Violation {
    /// Bricks plus joints do not span the wall exactly.
    CourseWidth {
        /// Offending course.
        course: u32,
        /// Laid width.
        laid: Length,
        /// Wall width.
        expected: Length,
    },
    /// A brick does not start one head joint after its left neighbour.
    Gap {
        /// Offending course.
        course: u32,
        /// Brick starting at the wrong offset.
        brick: BrickId,
    },
    /// Two bricks of the same course intersect.
    Overlap {
        /// Left brick.
        first: BrickId,
        /// Right brick.
        second: BrickId,
    },
    /// A head joint sits directly above a joint of the course below.
    StackedJoint {
        /// Upper course.
        course: u32,
        /// Left edge of the joint.
        x: Length,
    },
    /// Two half bats touch away from the course ends.
    AdjacentHalves {
        /// Offending course.
        course: u32,
        /// Right-hand half bat.
        brick: BrickId,
    },
    /// A staircase of staggered joints is longer than allowed.
    StaggerRun {
        /// Course where the run exceeds the limit.
        course: u32,
        /// Left edge of the joint ending the run.
        x: Length,
        /// Run length in courses.
        run: u32,
    },
}

/// Which optional rules apply to a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditRules {
    /// Longest permitted staircase, if limited.
    pub max_stagger_run: Option<u32>,
    /// Reject half bats touching away from the course ends.
    pub forbid_interior_adjacent_halves: bool,
}

impl AuditRules {
    /// Rules a bond promises to honour. Regular bonds form long staircases by
    /// construction, so only the wild bond limits them.
    pub fn for_bond(name: BondName, wild: &WildBondConfig) -> Self {
        match name {
            BondName::Wild => Self {
                max_stagger_run: Some(wild.max_stagger_run),
                forbid_interior_adjacent_halves: true,
            },
            _ => Self::default(),
        }
    }
}

/// Checks the layout and returns every violation found, bottom course first.
///
/// Course width, gaps, overlaps and stacked joints are always checked.
pub fn check_layout(
    geometry: &WallGeometry,
    courses: &[Course],
    rules: &AuditRules,
) -> Vec<Violation> {
    let dims = geometry.dimensions();
    let mut violations = Vec::new();
    let mut runs = JointRuns::empty(geometry.quarter_modules());
    let mut below: Vec<Length> = Vec::new();

    for course in courses {
        let laid = course.laid_width(dims.head_joint);
        if laid != dims.wall_width {
            violations.push(Violation::CourseWidth {
                course: course.index,
                laid,
                expected: dims.wall_width,
            });
        }

        let mut expected_x = Length::ZERO;
        for (idx, brick) in course.bricks.iter().enumerate() {
            if idx > 0 {
                let left = &course.bricks[idx - 1];
                if left.footprint().overlaps(&brick.footprint()) {
                    violations.push(Violation::Overlap {
                        first: left.id,
                        second: brick.id,
                    });
                }
            }
            if brick.x != expected_x {
                violations.push(Violation::Gap {
                    course: course.index,
                    brick: brick.id,
                });
            }
            expected_x = brick.footprint().right() + dims.head_joint;
        }

        let joints = course.head_joints();
        for x in joints.iter().filter(|x| below.contains(x)) {
            violations.push(Violation::StackedJoint {
                course: course.index,
                x: *x,
            });
        }

        if rules.forbid_interior_adjacent_halves {
            let last = course.bricks.len().saturating_sub(1);
            for idx in 2..last {
                if course.bricks[idx].kind() == BrickKind::Half
                    && course.bricks[idx - 1].kind() == BrickKind::Half
                {
                    violations.push(Violation::AdjacentHalves {
                        course: course.index,
                        brick: course.bricks[idx].id,
                    });
                }
            }
        }

        let quarters: Vec<u32> = joints
            .iter()
            .filter_map(|x| quarter_of(geometry, *x + dims.head_joint))
            .collect();
        if let Some(limit) = rules.max_stagger_run {
            for (&quarter, x) in quarters.iter().zip(&joints) {
                let run = runs.longest_for(quarter);
                if run > limit {
                    violations.push(Violation::StaggerRun {
                        course: course.index,
                        x: *x,
                        run,
                    });
                }
            }
        }
        runs = runs.next_course(&quarters);
        below = joints;
    }

    violations
}
