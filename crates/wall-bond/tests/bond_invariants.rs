use wall_bond::{check_layout, generate, AuditRules, BondName, WildBondConfig};
use wall_core::{BrickKind, Course, Length, WallGeometry};

fn regular_bonds() -> [BondName; 3] {
    [BondName::Stretcher, BondName::Flemish, BondName::EnglishCross]
}

fn assert_no_overlaps(courses: &[Course]) {
    let bricks: Vec<_> = courses.iter().flat_map(|course| &course.bricks).collect();
    for (idx, a) in bricks.iter().enumerate() {
        for b in &bricks[idx + 1..] {
            assert!(
                !a.footprint().overlaps(&b.footprint()),
                "bricks {:?} and {:?} overlap",
                a.id,
                b.id
            );
        }
    }
}

#[test]
fn regular_bonds_tile_every_course() {
    let geometry = WallGeometry::standard().unwrap();
    let dims = geometry.dimensions();
    for bond in regular_bonds() {
        let courses = generate(bond, 0, &geometry).unwrap();
        assert_eq!(courses.len() as u32, geometry.course_count());
        for course in &courses {
            assert_eq!(course.laid_width(dims.head_joint), dims.wall_width, "{bond}");
            assert_eq!(course.y, geometry.course_y(course.index));
        }
        assert_no_overlaps(&courses);
    }
}

#[test]
fn regular_bonds_never_stack_joints() {
    let geometry = WallGeometry::standard().unwrap();
    for bond in regular_bonds() {
        let courses = generate(bond, 0, &geometry).unwrap();
        for pair in courses.windows(2) {
            let below = pair[0].head_joints();
            for joint in pair[1].head_joints() {
                assert!(!below.contains(&joint), "{bond}: stacked joint at {joint}");
            }
        }
        let rules = AuditRules::for_bond(bond, &WildBondConfig::default());
        assert!(check_layout(&geometry, &courses, &rules).is_empty());
    }
}

#[test]
fn brick_ids_are_dense_and_ordered() {
    let geometry = WallGeometry::standard().unwrap();
    let courses = generate(BondName::Flemish, 0, &geometry).unwrap();
    let ids: Vec<u32> = courses
        .iter()
        .flat_map(|course| course.bricks.iter().map(|brick| brick.id.as_raw()))
        .collect();
    assert_eq!(ids, (0..ids.len() as u32).collect::<Vec<_>>());
}

#[test]
fn english_cross_alternates_course_types() {
    let geometry = WallGeometry::standard().unwrap();
    let courses = generate(BondName::EnglishCross, 0, &geometry).unwrap();
    for course in &courses {
        let headers = course
            .bricks
            .iter()
            .filter(|brick| brick.kind() == BrickKind::Header)
            .count();
        if course.index % 2 == 1 {
            assert!(headers > course.bricks.len() / 2);
        } else {
            assert_eq!(headers, 0);
        }
    }
}

#[test]
fn flemish_mixes_headers_and_stretchers() {
    let geometry = WallGeometry::standard().unwrap();
    let courses = generate(BondName::Flemish, 0, &geometry).unwrap();
    for course in &courses {
        let kinds: Vec<_> = course.bricks.iter().map(|brick| brick.kind()).collect();
        assert!(kinds.contains(&BrickKind::Header));
        assert!(kinds.contains(&BrickKind::Full));
    }
}

#[test]
fn narrow_wall_still_bonds() {
    let dims = wall_core::Dimensions::default()
        .with_wall(Length::from_mm(430), Length::from_mm(500))
        .with_stride(Length::from_mm(430), Length::from_mm(500));
    let geometry = dims.validate(false).unwrap();
    for bond in regular_bonds() {
        let courses = generate(bond, 0, &geometry).unwrap();
        assert!(check_layout(&geometry, &courses, &AuditRules::default()).is_empty());
    }
}
