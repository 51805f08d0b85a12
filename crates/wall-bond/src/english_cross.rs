use wall_core::{BrickKind, Course, WallError, WallGeometry};

use crate::bond::{BondName, CourseGenerator};
use crate::layout::{close_tail, materialize, CoursePieces};

/// English cross bond: stretcher courses alternate with header courses.
///
/// Every other stretcher course is shifted by half a brick, which staggers
/// the stretcher courses against each other and gives the cross its diagonal.
/// Header courses cannot take that shift: a header is itself half a brick
/// long, so a half-brick offset would leave their joints on the same even
/// quarter indices as the stretcher joints. They start with a queen closer
/// instead, shifting them by half a header, so their joints fall on odd
/// quarter indices while stretcher joints are always even.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishCrossBond;

impl EnglishCrossBond {
    pub(crate) fn course_pieces(course: u32, quarters: u32) -> CoursePieces {
        let mut pieces = Vec::new();
        if course % 2 == 1 {
            pieces.push(BrickKind::QueenCloser);
            let headers = (quarters - 1) / 2;
            pieces.extend(std::iter::repeat(BrickKind::Header).take(headers as usize));
            close_tail(&mut pieces, quarters - 1 - headers * 2, true);
            return pieces;
        }

        let mut used = 0;
        if course % 4 == 2 {
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

impl CourseGenerator for EnglishCrossBond {
    fn name(&self) -> BondName {
        BondName::EnglishCross
    }

    fn generate(&self, geometry: &WallGeometry) -> Result<Vec<Course>, WallError> {
        let quarters = geometry.quarter_modules();
        let plans = (0..geometry.course_count())
            .map(|course| Self::course_pieces(course, quarters))
            .collect();
        Ok(materialize(geometry, plans))
    }
}
