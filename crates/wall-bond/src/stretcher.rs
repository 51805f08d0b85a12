use wall_core::{BrickKind, Course, WallError, WallGeometry};

use crate::bond::{BondName, CourseGenerator};
use crate::layout::{close_tail, materialize, CoursePieces};

/// Running bond: every course is full bricks, odd courses shifted by half a brick.
///
/// Even courses start with a full brick and odd courses with a half bat, so
/// head joints fall on `0 mod 4` quarter modules in even courses and on
/// `2 mod 4` in odd ones and never line up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StretcherBond;

impl StretcherBond {
    pub(crate) fn course_pieces(course: u32, quarters: u32) -> CoursePieces {
        let mut pieces = Vec::new();
        let mut used = 0;
        if course % 2 == 1 {
            pieces.push(BrickKind::Half);
            used += BrickKind::Half.quarters();
        }
        let full = (quarters - used) / 4;
        pieces.extend(std::iter::repeat(BrickKind::Full).take(full as usize));
        used += full * 4;
        close_tail(&mut pieces, quarters - used, false);
        pieces
    }
}

impl CourseGenerator for StretcherBond {
    fn name(&self) -> BondName {
        BondName::Stretcher
    }

    fn generate(&self, geometry: &WallGeometry) -> Result<Vec<Course>, WallError> {
        let quarters = geometry.quarter_modules();
        let plans = (0..geometry.course_count())
            .map(|course| Self::course_pieces(course, quarters))
            .collect();
        Ok(materialize(geometry, plans))
    }
}
