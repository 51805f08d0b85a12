//! Seeded constrained search for the irregular "wild" bond.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wall_core::{BrickKind, Course, ErrorInfo, RngHandle, WallError, WallGeometry};

use crate::bond::{BondName, CourseGenerator};
use crate::joints::JointRuns;
use crate::layout::{joint_quarters, materialize, CoursePieces};

/// Relative likelihood of each length class being tried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceWeights {
    /// Weight of a full brick.
    #[serde(default = "default_full_weight")]
    pub full: u32,
    /// Weight of a three-quarter bat.
    #[serde(default = "default_three_quarter_weight")]
    pub three_quarter: u32,
    /// Weight of a half bat.
    #[serde(default = "default_half_weight")]
    pub half: u32,
}

fn default_full_weight() -> u32 {
    6
}

fn default_three_quarter_weight() -> u32 {
    2
}

fn default_half_weight() -> u32 {
    1
}

impl Default for PieceWeights {
    fn default() -> Self {
        Self {
            full: default_full_weight(),
            three_quarter: default_three_quarter_weight(),
            half: default_half_weight(),
        }
    }
}

impl PieceWeights {
    fn pool(&self) -> Vec<(BrickKind, u32)> {
        [
            (BrickKind::Full, self.full),
            (BrickKind::ThreeQuarter, self.three_quarter),
            (BrickKind::Half, self.half),
        ]
        .into_iter()
        .filter(|(_, weight)| *weight > 0)
        .collect()
    }
}

/// Tunables of the wild-bond search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildBondConfig {
    /// Master seed; each course draws from its own substream.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Longest allowed staircase of staggered head joints, in courses.
    #[serde(default = "default_max_stagger_run")]
    pub max_stagger_run: u32,
    /// Length-class weights.
    #[serde(default)]
    pub weights: PieceWeights,
    /// Fresh attempts per course before giving up.
    #[serde(default = "default_course_attempts")]
    pub course_attempts: u32,
    /// How many placements a dead end may undo before the attempt restarts.
    #[serde(default = "default_max_backtrack_depth")]
    pub max_backtrack_depth: u32,
}

/// Seed used when a request does not supply one.
pub fn default_seed() -> u64 {
    0x5EED
}

fn default_max_stagger_run() -> u32 {
    6
}

fn default_course_attempts() -> u32 {
    64
}

fn default_max_backtrack_depth() -> u32 {
    2
}

impl Default for WildBondConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            max_stagger_run: default_max_stagger_run(),
            weights: PieceWeights::default(),
            course_attempts: default_course_attempts(),
            max_backtrack_depth: default_max_backtrack_depth(),
        }
    }
}

/// Wild-bond courses plus search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct WildLayout {
    /// Generated courses, bottom first.
    pub courses: Vec<Course>,
    /// Total course attempts, including the successful ones.
    pub attempts: u64,
    /// Total dead ends hit during the search.
    pub backtracks: u64,
}

/// Irregular bond built by a seeded, bounded backtracking search.
///
/// Courses are laid left to right from {full, three-quarter, half} subject to:
/// no head joint directly above a joint of the course below; no staircase of
/// staggered joints longer than `max_stagger_run` courses; and no two half
/// bats touching unless one of them ends the course.
#[derive(Debug, Clone, PartialEq)]
pub struct WildBond {
    config: WildBondConfig,
}

impl WildBond {
    /// Creates the generator.
    pub fn new(config: WildBondConfig) -> Self {
        Self { config }
    }

    /// Search settings.
    pub fn config(&self) -> &WildBondConfig {
        &self.config
    }

    /// Runs the search and reports its statistics alongside the courses.
    pub fn search(&self, geometry: &WallGeometry) -> Result<WildLayout, WallError> {
        self.validate()?;
        let quarters = geometry.quarter_modules();
        let mut below = JointRuns::empty(quarters);
        let mut plans = Vec::with_capacity(geometry.course_count() as usize);
        let mut attempts = 0u64;
        let mut backtracks = 0u64;

        for course in 0..geometry.course_count() {
            let mut rng = RngHandle::substream(self.config.seed, u64::from(course));
            let mut laid = None;
            for attempt in 0..self.config.course_attempts {
                attempts += 1;
                let mut search = CourseSearch {
                    quarters,
                    below: &below,
                    config: &self.config,
                    backtracks: 0,
                };
                let outcome = search.run(&mut rng);
                backtracks += search.backtracks;
                if outcome.is_some() {
                    laid = outcome;
                    break;
                }
                debug!(
                    seed = self.config.seed,
                    course,
                    attempt,
                    dead_ends = search.backtracks,
                    "wild bond attempt abandoned"
                );
            }

            let Some(pieces) = laid else {
                warn!(
                    seed = self.config.seed,
                    course,
                    attempts = self.config.course_attempts,
                    "wild bond retry budget exhausted"
                );
                return Err(WallError::BondGenerationFailed(
                    ErrorInfo::new(
                        "retry-budget-exhausted",
                        "course cannot be completed under wild bond constraints",
                    )
                    .with_context("seed", self.config.seed)
                    .with_context("course", course)
                    .with_context("attempts", self.config.course_attempts)
                    .with_hint("retry with a different seed"),
                ));
            };
            below = below.next_course(&joint_quarters(&pieces));
            plans.push(pieces);
        }

        debug!(
            seed = self.config.seed,
            attempts, backtracks, "wild bond layout complete"
        );
        Ok(WildLayout {
            courses: materialize(geometry, plans),
            attempts,
            backtracks,
        })
    }

    fn validate(&self) -> Result<(), WallError> {
        if self.config.weights.pool().is_empty() || self.config.course_attempts == 0 {
            return Err(WallError::InvalidDimensions(
                ErrorInfo::new(
                    "wild-config",
                    "wild bond needs a positive weight and at least one attempt per course",
                )
                .with_context("course_attempts", self.config.course_attempts),
            ));
        }
        Ok(())
    }
}

impl CourseGenerator for WildBond {
    fn name(&self) -> BondName {
        BondName::Wild
    }

    fn generate(&self, geometry: &WallGeometry) -> Result<Vec<Course>, WallError> {
        self.search(geometry).map(|layout| layout.courses)
    }
}

/// Position in the course and the remaining length classes to try there.
struct Frame {
    position: u32,
    candidates: Vec<BrickKind>,
    cursor: usize,
}

/// One attempt at laying a single course.
struct CourseSearch<'a> {
    quarters: u32,
    below: &'a JointRuns,
    config: &'a WildBondConfig,
    backtracks: u64,
}

impl CourseSearch<'_> {
    /// Depth-first search over length classes. A dead end may undo at most
    /// `max_backtrack_depth` placements below the deepest point reached;
    /// beyond that the attempt is abandoned.
    fn run(&mut self, rng: &mut RngHandle) -> Option<CoursePieces> {
        let mut stack = vec![self.frame(0, rng)];
        let mut pieces: CoursePieces = Vec::new();
        let mut frontier = 1usize;
        let max_depth = self.config.max_backtrack_depth as usize;

        loop {
            let frame = stack.last_mut()?;
            let position = frame.position;
            let mut chosen = None;
            while let Some(&kind) = frame.candidates.get(frame.cursor) {
                frame.cursor += 1;
                if self.is_legal(&pieces, position, kind) {
                    chosen = Some(kind);
                    break;
                }
            }

            match chosen {
                Some(kind) => {
                    pieces.push(kind);
                    let next = position + kind.quarters();
                    if next == self.quarters {
                        return Some(pieces);
                    }
                    stack.push(self.frame(next, rng));
                    frontier = frontier.max(stack.len());
                }
                None => {
                    self.backtracks += 1;
                    stack.pop();
                    pieces.pop();
                    if stack.is_empty() || stack.len() + max_depth < frontier {
                        return None;
                    }
                }
            }
        }
    }

    fn frame(&self, position: u32, rng: &mut RngHandle) -> Frame {
        Frame {
            position,
            candidates: weighted_order(self.config.weights.pool(), rng),
            cursor: 0,
        }
    }

    fn is_legal(&self, pieces: &[BrickKind], position: u32, kind: BrickKind) -> bool {
        let end = position + kind.quarters();
        if end > self.quarters {
            return false;
        }
        let remaining = self.quarters - end;
        if remaining != 0 && remaining < BrickKind::Half.quarters() {
            return false;
        }
        if kind == BrickKind::Half
            && pieces.last() == Some(&BrickKind::Half)
            && pieces.len() != 1
            && remaining != 0
        {
            return false;
        }
        if remaining == 0 {
            return true;
        }
        !self.below.has_joint(end) && self.below.longest_for(end) <= self.config.max_stagger_run
    }
}

/// Weighted sampling without replacement.
fn weighted_order(mut pool: Vec<(BrickKind, u32)>, rng: &mut RngHandle) -> Vec<BrickKind> {
    let mut order = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let total: u32 = pool.iter().map(|(_, weight)| weight).sum();
        let mut pick = rng.gen_range(0..total);
        let index = pool
            .iter()
            .position(|(_, weight)| {
                if pick < *weight {
                    true
                } else {
                    pick -= *weight;
                    false
                }
            })
            .unwrap_or(0);
        order.push(pool.remove(index).0);
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_for(quarters: u32, below: &JointRuns) -> Option<CoursePieces> {
        let config = WildBondConfig::default();
        let mut rng = RngHandle::from_seed(7);
        (0..config.course_attempts).find_map(|_| {
            CourseSearch {
                quarters,
                below,
                config: &config,
                backtracks: 0,
            }
            .run(&mut rng)
        })
    }

    #[test]
    fn weighted_order_is_a_permutation() {
        let mut rng = RngHandle::from_seed(3);
        for _ in 0..20 {
            let mut order = weighted_order(PieceWeights::default().pool(), &mut rng);
            order.sort();
            assert_eq!(
                order,
                vec![BrickKind::Full, BrickKind::Half, BrickKind::ThreeQuarter]
            );
        }
    }

    #[test]
    fn zero_weights_are_skipped() {
        let weights = PieceWeights {
            full: 0,
            three_quarter: 0,
            half: 1,
        };
        let mut rng = RngHandle::from_seed(3);
        assert_eq!(weighted_order(weights.pool(), &mut rng), vec![BrickKind::Half]);
    }

    #[test]
    fn course_avoids_joints_below() {
        let below = JointRuns::empty(42).next_course(&[4, 8, 12, 16, 20, 24, 28, 32, 36, 40]);
        let pieces = search_for(42, &below).expect("course should be laid");
        assert_eq!(pieces.iter().map(|k| k.quarters()).sum::<u32>(), 42);
        for joint in joint_quarters(&pieces) {
            assert_ne!(joint % 4, 0, "stacked joint at {joint}");
        }
    }

    #[test]
    fn interior_halves_never_touch() {
        let below = JointRuns::empty(42);
        let config = WildBondConfig {
            weights: PieceWeights {
                full: 0,
                three_quarter: 1,
                half: 8,
            },
            ..WildBondConfig::default()
        };
        let mut rng = RngHandle::from_seed(11);
        let pieces = (0..config.course_attempts)
            .find_map(|_| {
                CourseSearch {
                    quarters: 42,
                    below: &below,
                    config: &config,
                    backtracks: 0,
                }
                .run(&mut rng)
            })
            .expect("course should be laid");
        let last = pieces.len() - 1;
        for idx in 2..last {
            assert!(
                !(pieces[idx] == BrickKind::Half && pieces[idx - 1] == BrickKind::Half),
                "adjacent halves at {idx}"
            );
        }
    }

    #[test]
    fn empty_weights_rejected() {
        let bond = WildBond::new(WildBondConfig {
            weights: PieceWeights {
                full: 0,
                three_quarter: 0,
                half: 0,
            },
            ..WildBondConfig::default()
        });
        let err = bond.search(&WallGeometry::standard().unwrap()).unwrap_err();
        assert!(matches!(err, WallError::InvalidDimensions(info) if info.code == "wild-config"));
    }
}
