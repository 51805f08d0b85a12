use wall_order::{Strategy, Traversal};

#[test]
fn strategies_parse_from_yaml() {
    let yaml = "- kind: stride-optimized\n  traversal: serpentine\n- kind: stride-optimized\n- kind: course-by-course\n";
    let parsed: Vec<Strategy> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(
        parsed,
        vec![
            Strategy::StrideOptimized {
                traversal: Traversal::Serpentine
            },
            Strategy::StrideOptimized {
                traversal: Traversal::Raster
            },
            Strategy::CourseByCourse,
        ]
    );
}

#[test]
fn strategy_serializes_with_kind_tag() {
    let json = serde_json::to_value(Strategy::CourseByCourse).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "course-by-course" }));
    assert!(serde_json::from_str::<Strategy>(r#"{"kind":"diagonal"}"#).is_err());
}
