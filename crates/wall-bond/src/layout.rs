use wall_core::{Brick, BrickId, BrickKind, Course, Length, WallGeometry};

/// Pieces of one course, left to right, before they are given coordinates.
pub(crate) type CoursePieces = Vec<BrickKind>;

/// Interior head joints of a course as quarter-module indices.
pub(crate) fn joint_quarters(pieces: &[BrickKind]) -> Vec<u32> {
    let mut joints = Vec::with_capacity(pieces.len().saturating_sub(1));
    let mut position = 0u32;
    for kind in pieces.iter().take(pieces.len().saturating_sub(1)) {
        position += kind.quarters();
        joints.push(position);
    }
    joints
}

/// Appends the closer that fills the last `remaining` quarter modules.
///
/// `header_course` selects a header rather than a half bat for a two-quarter gap.
pub(crate) fn close_tail(pieces: &mut CoursePieces, remaining: u32, header_course: bool) {
    match remaining {
        0 => {}
        1 => pieces.push(BrickKind::QueenCloser),
        2 if header_course => pieces.push(BrickKind::Header),
        2 => pieces.push(BrickKind::Half),
        3 => pieces.push(BrickKind::ThreeQuarter),
        _ => {
            let full = remaining / 4;
            pieces.extend(std::iter::repeat(BrickKind::Full).take(full as usize));
            close_tail(pieces, remaining % 4, header_course);
        }
    }
}

/// Gives every piece its coordinates and a wall-wide dense id.
pub(crate) fn materialize(geometry: &WallGeometry, plans: Vec<CoursePieces>) -> Vec<Course> {
    let head_joint = geometry.dimensions().head_joint;
    let mut next_id = 0u32;
    plans
        .into_iter()
        .enumerate()
        .map(|(course_idx, pieces)| {
            let course = course_idx as u32;
            let y = geometry.course_y(course);
            let mut quarter = 0u32;
            let bricks = pieces
                .into_iter()
                .enumerate()
                .map(|(index_in_course, kind)| {
                    let spec = geometry.brick_spec(kind);
                    let brick = Brick {
                        id: BrickId::from_raw(next_id),
                        course,
                        index_in_course: index_in_course as u32,
                        spec,
                        orientation: kind.orientation(),
                        x: geometry.quarter_x(quarter),
                        y,
                    };
                    debug_assert_eq!(spec.length + head_joint, geometry.quarter_x(kind.quarters()));
                    next_id += 1;
                    quarter += kind.quarters();
                    brick
                })
                .collect();
            Course {
                index: course,
                y,
                bricks,
            }
        })
        .collect()
}

/// Quarter index of a horizontal offset, if it lies on the module grid.
pub(crate) fn quarter_of(geometry: &WallGeometry, x: Length) -> Option<u32> {
    x.exact_div(geometry.quarter_module())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joints_exclude_course_ends() {
        let pieces = vec![BrickKind::Half, BrickKind::Full, BrickKind::Half];
        assert_eq!(joint_quarters(&pieces), vec![2, 6]);
    }

    #[test]
    fn tail_closers_fill_exactly() {
        for remaining in 0..12 {
            let mut pieces = Vec::new();
            close_tail(&mut pieces, remaining, false);
            let filled: u32 = pieces.iter().map(|kind| kind.quarters()).sum();
            assert_eq!(filled, remaining);
        }
    }

    #[test]
    fn materialized_course_spans_wall() {
        let geometry = WallGeometry::standard().unwrap();
        let mut pieces = vec![BrickKind::Full; 10];
        close_tail(&mut pieces, 2, false);
        let courses = materialize(&geometry, vec![pieces]);
        let head_joint = geometry.dimensions().head_joint;
        assert_eq!(courses[0].laid_width(head_joint), geometry.dimensions().wall_width);
        assert_eq!(courses[0].bricks[10].x, Length::from_mm(2200));
    }
}
