use std::collections::BTreeSet;

use wall_bond::{generate, BondName};
use wall_build::{build, CellId};
use wall_core::{BrickId, Dimensions, Length, WallGeometry};

#[test]
fn default_wall_has_six_cells() {
    let geometry = WallGeometry::standard().unwrap();
    let courses = generate(BondName::Stretcher, 0, &geometry).unwrap();
    let wall = build(&geometry, courses).unwrap();
    assert_eq!(wall.grid().shape(), (2, 3));
    assert_eq!(wall.grid().len(), 6);
    for brick in wall.bricks() {
        let cell = wall.cell_of(brick.id).unwrap();
        assert!(cell.as_raw() < 6);
    }
}

#[test]
fn every_brick_assigned_exactly_once() {
    let geometry = WallGeometry::standard().unwrap();
    for bond in [BondName::Stretcher, BondName::Flemish, BondName::EnglishCross] {
        let courses = generate(bond, 0, &geometry).unwrap();
        let expected: usize = courses.iter().map(|course| course.bricks.len()).sum();
        let wall = build(&geometry, courses).unwrap();
        assert_eq!(wall.brick_count(), expected);

        let mut seen = BTreeSet::new();
        for cell in wall.grid().cells() {
            for id in &cell.bricks {
                assert!(seen.insert(*id), "{bond}: {id:?} assigned twice");
                assert_eq!(wall.cell_of(*id), Some(cell.id));
            }
        }
        let all: BTreeSet<BrickId> = wall.bricks().map(|brick| brick.id).collect();
        assert_eq!(seen, all);
    }
}

#[test]
fn centroids_fall_inside_their_cells() {
    let geometry = WallGeometry::standard().unwrap();
    let courses = generate(BondName::Flemish, 0, &geometry).unwrap();
    let wall = build(&geometry, courses).unwrap();
    for brick in wall.bricks() {
        let cell = wall.grid().cell(wall.cell_of(brick.id).unwrap()).unwrap();
        let (cx, cy) = brick.footprint().centroid_mm();
        let area = cell.footprint();
        assert!(cx >= area.x.as_mm() && cx <= area.right().as_mm());
        assert!(cy >= area.y.as_mm() && cy <= area.top().as_mm());
    }
}

#[test]
fn upper_bricks_rest_on_lower_course() {
    let geometry = WallGeometry::standard().unwrap();
    let courses = generate(BondName::EnglishCross, 0, &geometry).unwrap();
    let wall = build(&geometry, courses).unwrap();
    for brick in wall.bricks() {
        let supports = wall.supports(brick.id);
        if brick.course == 0 {
            assert!(supports.is_empty());
            continue;
        }
        assert!(!supports.is_empty(), "{:?} floats", brick.id);
        for support in supports {
            let under = wall.brick(*support).unwrap();
            assert_eq!(under.course + 1, brick.course);
            assert!(under.footprint().spans_overlap(&brick.footprint()));
        }
    }
}

#[test]
fn small_stride_grid() {
    let geometry = Dimensions::default()
        .with_stride(Length::from_mm(400), Length::from_mm(500))
        .validate(false)
        .unwrap();
    let courses = generate(BondName::Stretcher, 0, &geometry).unwrap();
    let wall = build(&geometry, courses).unwrap();
    assert_eq!(wall.grid().shape(), (4, 6));
    let used: BTreeSet<CellId> = wall.bricks().filter_map(|b| wall.cell_of(b.id)).collect();
    assert_eq!(used.len(), 24);
}
