use wall_bond::BondName;
use wall_core::{Length, WallError};
use wall_order::{Strategy, SupportGraph};
use wall_plan::{plan, PlanRequest};

#[test]
fn default_request_plans_stretcher_wall() {
    let plan = plan(&PlanRequest::default()).unwrap();
    assert_eq!(plan.wall().grid().shape(), (2, 3));
    assert_eq!(plan.orders().count(), 2);

    let graph = SupportGraph::from_wall(plan.wall());
    let optimized = plan.order("stride-optimized").unwrap();
    let naive = plan.order("course-by-course").unwrap();
    assert!(optimized.is_linear_extension(&graph));
    assert!(naive.is_linear_extension(&graph));
    assert!(optimized.stride_transitions() <= naive.stride_transitions());
    assert_eq!(optimized.len(), plan.wall().brick_count());
}

#[test]
fn every_bond_plans() {
    for bond in BondName::ALL {
        let request = PlanRequest {
            seed: Some(3),
            ..PlanRequest::for_bond(bond)
        };
        match plan(&request) {
            Ok(plan) => {
                let report = plan.report();
                assert_eq!(report.bond, bond);
                assert_eq!(report.seed.is_some(), bond == BondName::Wild);
                assert_eq!(report.courses, 32);
                let assigned: usize = report.cells.iter().map(|cell| cell.bricks.len()).sum();
                assert_eq!(assigned, report.brick_count);
            }
            Err(err) => {
                assert_eq!(bond, BondName::Wild, "{err}");
                assert_eq!(err.failed_seed(), Some(3));
            }
        }
    }
}

#[test]
fn invalid_dimensions_surface_unchanged() {
    let mut request = PlanRequest::default();
    request.dimensions = request
        .dimensions
        .with_wall(Length::from_mm(2300), Length::from_mm(2010));
    let err = plan(&request).unwrap_err();
    assert!(matches!(err, WallError::InvalidDimensions(info) if info.code == "height-not-course-multiple"));
}

#[test]
fn partial_stride_can_be_forbidden() {
    let mut request = PlanRequest::default();
    request.allow_partial_stride = false;
    request.dimensions = request
        .dimensions
        .with_wall(Length::from_mm(650), Length::from_mm(500));
    let err = plan(&request).unwrap_err();
    assert!(matches!(err, WallError::InvalidDimensions(info) if info.code == "stride-exceeds-wall"));

    request.allow_partial_stride = true;
    let plan = plan(&request).unwrap();
    assert_eq!(plan.wall().grid().len(), 1);
    let order = plan.order("stride-optimized").unwrap();
    assert_eq!(order.stride_transitions(), 0);
}

#[test]
fn empty_strategy_list_rejected() {
    let request = PlanRequest {
        strategies: Vec::<Strategy>::new(),
        ..PlanRequest::default()
    };
    let err = plan(&request).unwrap_err();
    assert!(matches!(err, WallError::Serde(info) if info.code == "no-strategies"));
}

#[test]
fn wild_seed_42_is_deterministic() {
    let request = PlanRequest {
        seed: Some(42),
        ..PlanRequest::for_bond(BondName::Wild)
    };
    match (plan(&request), plan(&request)) {
        (Ok(first), Ok(second)) => {
            assert_eq!(first.layout_hash(), second.layout_hash());
            assert_eq!(first.report(), second.report());
        }
        (Err(first), Err(second)) => assert_eq!(first, second),
        _ => panic!("seed 42 gave different outcomes"),
    }
}
