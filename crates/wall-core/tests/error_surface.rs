use wall_core::errors::{ErrorInfo, WallError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("course", 3)
        .with_context("reason", "example")
}

#[test]
fn invalid_dimensions_surface() {
    let err = WallError::InvalidDimensions(sample_info("non-positive", "wall_width must be positive"));
    assert_eq!(err.info().code, "non-positive");
    assert!(err.info().context.contains_key("course"));
    assert!(!err.is_retryable());
}

#[test]
fn bond_failure_reports_seed() {
    let err = WallError::BondGenerationFailed(
        ErrorInfo::new("retry-budget-exhausted", "course cannot be completed").with_context("seed", 42u64),
    );
    assert_eq!(err.failed_seed(), Some(42));
    assert!(err.is_retryable());
}

#[test]
fn failed_seed_only_for_bond_failures() {
    let err = WallError::StrideOverflow(ErrorInfo::new("grid-too-large", "too many cells").with_context("seed", 1));
    assert_eq!(err.failed_seed(), None);
}

#[test]
fn unsatisfiable_order_surface() {
    let err = WallError::UnsatisfiableOrder(sample_info("support-cycle", "cycle detected"));
    assert_eq!(err.info().code, "support-cycle");
}

#[test]
fn display_includes_context_and_hint() {
    let err = WallError::InvalidDimensions(
        ErrorInfo::new("wall-too-narrow", "too narrow")
            .with_context("half_modules", 3)
            .with_hint("widen the wall"),
    );
    let text = err.to_string();
    assert!(text.starts_with("invalid dimensions: too narrow (code: wall-too-narrow)"));
    assert!(text.contains("half_modules=3"));
    assert!(text.ends_with("hint: widen the wall"));
}
