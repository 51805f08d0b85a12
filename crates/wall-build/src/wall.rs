use tracing::debug;
use wall_core::{Brick, BrickId, Course, WallError, WallGeometry};

use crate::grid::{CellId, StrideGrid};

/// Immutable wall model: courses, stride grid, brick-to-cell assignment and
/// vertical support adjacency.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    geometry: WallGeometry,
    courses: Vec<Course>,
    grid: StrideGrid,
    cell_of: Vec<CellId>,
    supports: Vec<Vec<BrickId>>,
    locations: Vec<(usize, usize)>,
}

impl Wall {
    /// Validated dimensions the wall was built from.
    pub fn geometry(&self) -> &WallGeometry {
        &self.geometry
    }

    /// Courses, bottom first.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Every brick, in id order.
    pub fn bricks(&self) -> impl Iterator<Item = &Brick> + '_ {
        self.courses.iter().flat_map(|course| course.bricks.iter())
    }

    /// Total number of bricks.
    pub fn brick_count(&self) -> usize {
        self.cell_of.len()
    }

    /// Brick by identifier.
    pub fn brick(&self, id: BrickId) -> Option<&Brick> {
        let (course, index) = *self.locations.get(id.index())?;
        self.courses.get(course)?.bricks.get(index)
    }

    /// Bricks of one course, left to right.
    pub fn bricks_in_course(&self, course: u32) -> &[Brick] {
        self.courses
            .get(course as usize)
            .map(|course| course.bricks.as_slice())
            .unwrap_or(&[])
    }

    /// Stride cell holding the brick.
    pub fn cell_of(&self, id: BrickId) -> Option<CellId> {
        self.cell_of.get(id.index()).copied()
    }

    /// Bricks of the course below whose span overlaps the brick.
    pub fn supports(&self, id: BrickId) -> &[BrickId] {
        self.supports
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Stride grid with per-cell brick lists.
    pub fn grid(&self) -> &StrideGrid {
        &self.grid
    }
}

/// Assembles a [`Wall`] from generated courses.
#[derive(Debug, Clone, Copy)]
pub struct WallBuilder {
    geometry: WallGeometry,
}

impl WallBuilder {
    /// Creates a builder for the given dimensions.
    pub fn new(geometry: WallGeometry) -> Self {
        Self { geometry }
    }

    /// Assigns every brick to the stride cell containing its centroid and
    /// records which bricks rest on which.
    ///
    /// Brick ids are renumbered densely, bottom course first and left to right,
    /// so they can index the assignment tables.
    pub fn build(&self, courses: Vec<Course>) -> Result<Wall, WallError> {
        let mut grid = StrideGrid::new(&self.geometry)?;
        let courses = renumber(courses);
        let total: usize = courses.iter().map(|course| course.bricks.len()).sum();
        let mut cell_of = Vec::with_capacity(total);
        let mut supports = Vec::with_capacity(total);
        let mut locations = Vec::with_capacity(total);

        for (idx, course) in courses.iter().enumerate() {
            let below = idx
                .checked_sub(1)
                .and_then(|below| courses.get(below))
                .map(|course| course.bricks.as_slice())
                .unwrap_or(&[]);
            for (index, brick) in course.bricks.iter().enumerate() {
                locations.push((idx, index));
                let footprint = brick.footprint();
                let cell = grid.locate(&footprint).map_err(|err| match err {
                    WallError::StrideOverflow(info) => WallError::StrideOverflow(
                        info.with_context("brick", brick.id.as_raw())
                            .with_context("course", brick.course),
                    ),
                    other => other,
                })?;
                grid.assign(cell, brick.id);
                cell_of.push(cell);
                supports.push(
                    below
                        .iter()
                        .filter(|under| under.footprint().spans_overlap(&footprint))
                        .map(|under| under.id)
                        .collect(),
                );
            }
        }

        debug!(
            bricks = total,
            rows = grid.rows(),
            cols = grid.cols(),
            "wall assembled"
        );
        Ok(Wall {
            geometry: self.geometry,
            courses,
            grid,
            cell_of,
            supports,
            locations,
        })
    }
}

/// Builds the wall for `courses` under `geometry`.
pub fn build(geometry: &WallGeometry, courses: Vec<Course>) -> Result<Wall, WallError> {
    WallBuilder::new(*geometry).build(courses)
}

fn renumber(courses: Vec<Course>) -> Vec<Course> {
    let mut next = 0u32;
    courses
        .into_iter()
        .map(|Course { index, y, bricks }| {
            let bricks = bricks
                .into_iter()
                .enumerate()
                .map(|(index_in_course, brick)| {
                    let id = BrickId::from_raw(next);
                    next += 1;
                    Brick {
                        id,
                        course: index,
                        index_in_course: index_in_course as u32,
                        ..brick
                    }
                })
                .collect();
            Course { index, y, bricks }
        })
        .collect()
}
