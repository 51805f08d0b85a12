use wall_core::{BrickKind, Course, WallError, WallGeometry};

use crate::bond::{BondName, CourseGenerator};
use crate::layout::{close_tail, materialize, CoursePieces};

/// Flemish bond: stretchers and headers alternate within every course.
///
/// Even courses open with a stretcher. Odd courses open with a header and a
/// queen closer, which centres their headers over the stretchers below.
/// With a repeating unit of six quarter modules, even-course joints sit on
/// residues `{0, 4}` and odd-course joints on `{1, 2, 3}`, tails included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlemishBond;

impl FlemishBond {
    pub(crate) fn course_pieces(course: u32, quarters: u32) -> CoursePieces {
        let mut pieces = Vec::new();
        let mut used = 0;
        if course % 2 == 1 {
            pieces.push(BrickKind::Header);
            pieces.push(BrickKind::QueenCloser);
            used += BrickKind::Header.quarters() + BrickKind::QueenCloser.quarters();
        }
        let unit = BrickKind::Full.quarters() + BrickKind::Header.quarters();
        while used + unit <= quarters {
            pieces.push(BrickKind::Full);
            pieces.push(BrickKind::Header);
            used += unit;
        }
        let remaining = quarters - used;
        if remaining >= BrickKind::Full.quarters() {
            pieces.push(BrickKind::Full);
            close_tail(&mut pieces, remaining - BrickKind::Full.quarters(), true);
        } else {
            close_tail(&mut pieces, remaining, true);
        }
        pieces
    }
}

impl CourseGenerator for FlemishBond {
    fn name(&self) -> BondName {
        BondName::Flemish
    }

    fn generate(&self, geometry: &WallGeometry) -> Result<Vec<Course>, WallError> {
        let quarters = geometry.quarter_modules();
        let plans = (0..geometry.course_count())
            .map(|course| Self::course_pieces(course, quarters))
            .collect();
        Ok(materialize(geometry, plans))
    }
}
