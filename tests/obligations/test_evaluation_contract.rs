/// End-to-end evaluation behavior: totality, blame, evidence, and
/// obligation reuse across call sites and threads.
use std::sync::OnceLock;

use regex::Regex;
use warrant_contract::catalog::{self, length};
use warrant_contract::kinds::ObligationKind;
use warrant_contract::{Evidence, Obligation, Position};
use warrant_filter::comparability::EndPoint;
use warrant_filter::container::Measurable;

#[path = "../common/mod.rs"]
mod common;

use common::{assert_blames, Plaintiff};

// ---------------------------------------------------------------------------
// Kept candidates are side-effect free
// ---------------------------------------------------------------------------

#[test]
fn kept_candidate_returns_ok() {
    let obligation = catalog::must_be_greater_than(Position::PARAMETER_1, 10_i64);
    assert!(obligation.evaluate(&11, &Plaintiff("caller"), "").is_ok());
}

#[test]
fn discarded_candidate_captures_evidence() {
    let obligation = catalog::must_be_greater_than(Position::PARAMETER_2, 10_i64);
    let violation = obligation
        .evaluate(&3, &Plaintiff("caller"), "argument out of range")
        .unwrap_err();

    assert_eq!(violation.contract().kind, ObligationKind::MustBeGreaterThan);
    assert_eq!(violation.contract().parameter, Position::PARAMETER_2);
    assert_blames(&violation, Position::PARAMETER_2.bitmask());
    assert_eq!(violation.evidence(), &Evidence::Captured("3".to_string()));
    assert_eq!(violation.description(), "argument out of range");
}

#[test]
fn same_obligation_same_candidate_yields_equal_violations() {
    let obligation = catalog::must_not_be_empty_string(Position::PARAMETER_1);
    let first = obligation.evaluate("", &Plaintiff("a"), "").unwrap_err();
    let second = obligation.evaluate("", &Plaintiff("a"), "").unwrap_err();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Range endpoints
// ---------------------------------------------------------------------------

#[test]
fn between_is_closed_on_both_ends() {
    let obligation = catalog::must_be_between(Position::PARAMETER_1, 0_i64, 10_i64);
    assert!(obligation.evaluate(&0, &Plaintiff("caller"), "").is_ok());
    assert!(obligation.evaluate(&10, &Plaintiff("caller"), "").is_ok());
    assert!(obligation.evaluate(&-1, &Plaintiff("caller"), "").is_err());
    assert!(obligation.evaluate(&11, &Plaintiff("caller"), "").is_err());
}

#[test]
fn open_endpoints_exclude_the_bounds() {
    let obligation = catalog::must_be_between_endpoints(
        Position::PARAMETER_1,
        EndPoint::Open,
        0_i64,
        EndPoint::Closed,
        10_i64,
    );
    assert!(obligation.evaluate(&0, &Plaintiff("caller"), "").is_err());
    assert!(obligation.evaluate(&1, &Plaintiff("caller"), "").is_ok());
    assert!(obligation.evaluate(&10, &Plaintiff("caller"), "").is_ok());
}

// ---------------------------------------------------------------------------
// Absent candidates
// ---------------------------------------------------------------------------

#[test]
fn absent_candidate_fails_every_kind() {
    let not_null: Obligation<i64> = catalog::must_not_be_null(Position::PARAMETER_1);
    let positive = catalog::must_be_greater_than_zero::<i64>(Position::PARAMETER_1);

    let from_not_null = not_null
        .evaluate_optional(None, &Plaintiff("caller"), "")
        .unwrap_err();
    let from_positive = positive
        .evaluate_optional(None, &Plaintiff("caller"), "")
        .unwrap_err();

    assert_eq!(from_not_null.evidence(), &Evidence::Absent);
    assert_eq!(from_positive.evidence(), &Evidence::Absent);
}

#[test]
fn present_candidate_routes_to_normal_evaluation() {
    let positive = catalog::must_be_greater_than_zero::<i64>(Position::PARAMETER_1);
    assert!(positive
        .evaluate_optional(Some(&5), &Plaintiff("caller"), "")
        .is_ok());
}

// ---------------------------------------------------------------------------
// Totality: internal filter failures never escape
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct BrokenContainer;

impl Measurable for BrokenContainer {
    fn measure(&self) -> i64 {
        panic!("backing store unreachable")
    }
}

#[derive(Debug)]
struct UnmeasurableContainer;

impl Measurable for UnmeasurableContainer {
    fn measure(&self) -> i64 {
        -1
    }
}

#[test]
fn panicking_measure_becomes_unavailable_evidence() {
    let obligation = length::must_be_greater_than_zero::<BrokenContainer>(Position::PARAMETER_1);
    let violation = obligation
        .evaluate(&BrokenContainer, &Plaintiff("caller"), "")
        .unwrap_err();

    match violation.evidence() {
        Evidence::Unavailable { cause } => {
            assert!(cause.contains("backing store unreachable"));
        }
        other => panic!("expected unavailable evidence, got {other:?}"),
    }
}

#[test]
fn negative_measure_discards_the_candidate() {
    let obligation =
        length::must_be_greater_than_zero::<UnmeasurableContainer>(Position::PARAMETER_1);
    let violation = obligation
        .evaluate(&UnmeasurableContainer, &Plaintiff("caller"), "")
        .unwrap_err();
    assert!(violation.evidence().is_captured());
}

// ---------------------------------------------------------------------------
// Shared, reusable contracts
// ---------------------------------------------------------------------------

static POSITIVE_COUNT: OnceLock<Obligation<i64>> = OnceLock::new();

fn positive_count() -> &'static Obligation<i64> {
    POSITIVE_COUNT.get_or_init(|| catalog::must_be_greater_than_zero(Position::PARAMETER_1))
}

#[test]
fn shared_contract_is_reusable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            std::thread::spawn(move || {
                positive_count()
                    .evaluate(&(offset + 1), &Plaintiff("worker"), "")
                    .is_ok()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert!(positive_count()
        .evaluate(&0, &Plaintiff("worker"), "")
        .is_err());
}

// ---------------------------------------------------------------------------
// Container and string domains through the catalog
// ---------------------------------------------------------------------------

#[test]
fn no_duplicates_flags_the_repeated_element() {
    let obligation = catalog::must_contain_no_duplicates::<i32>(Position::PARAMETER_3);
    assert!(obligation
        .evaluate(&[1, 2, 3][..], &Plaintiff("caller"), "")
        .is_ok());
    let violation = obligation
        .evaluate(&[1, 2, 1][..], &Plaintiff("caller"), "")
        .unwrap_err();
    assert_blames(&violation, Position::PARAMETER_3.bitmask());
}

#[test]
fn pattern_obligation_matches_the_full_candidate() {
    let pattern = Regex::new(r"^[a-z]+-\d+$").unwrap();
    let obligation = catalog::must_match_pattern(Position::PARAMETER_1, pattern);
    assert!(obligation.evaluate("job-17", &Plaintiff("caller"), "").is_ok());
    assert!(obligation
        .evaluate("job-17 trailing", &Plaintiff("caller"), "")
        .is_err());
}
