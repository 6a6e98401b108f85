/// Shared test helpers for all warrant integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use warrant_contract::Violation;

/// Stand-in for the object on whose behalf a check runs.
#[derive(Debug)]
pub struct Plaintiff(pub &'static str);

/// Assert that a violation blames exactly the given position bitmask.
#[allow(dead_code)]
pub fn assert_blames(violation: &Violation, expected_mask: u64) {
    assert_eq!(
        violation.blamed(),
        expected_mask,
        "expected blame mask {expected_mask:#b}, got {:#b}",
        violation.blamed()
    );
}
