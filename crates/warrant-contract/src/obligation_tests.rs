use super::*;
use warrant_filter::number::GreaterThan;

#[derive(Debug)]
struct Caller;

/// A filter that panics while inspecting the candidate, standing in for
/// a container traversal failure.
#[derive(Debug)]
struct Exploding;

impl Filter<i64> for Exploding {
    fn filter(&self, _candidate: &i64) -> FilterState {
        panic!("cursor failed mid-walk")
    }
}

fn positive(parameter: Position) -> Obligation<i64> {
    Obligation::new(
        parameter,
        ObligationKind::MustBeGreaterThanZero,
        GreaterThan::new(0),
    )
}

#[test]
fn kept_candidate_returns_ok() {
    let obligation = positive(Position::PARAMETER_1);
    assert!(obligation.evaluate(&7, &Caller, "").is_ok());
}

#[test]
fn discarded_candidate_returns_violation_with_evidence() {
    let obligation = positive(Position::PARAMETER_1);
    let violation = obligation.evaluate(&-3, &Caller, "count must be positive").unwrap_err();
    assert_eq!(violation.contract(), &obligation.contract_ref());
    assert_eq!(violation.evidence(), &Evidence::Captured("-3".to_string()));
    assert_eq!(violation.description(), "count must be positive");
    assert_eq!(violation.plaintiff(), "Caller");
    assert_eq!(violation.blamed(), Position::PARAMETER_1.bitmask());
}

#[test]
fn evaluation_is_stateless_and_idempotent() {
    let obligation = positive(Position::PARAMETER_2);
    let first = obligation.evaluate(&0, &Caller, "").unwrap_err();
    let second = obligation.evaluate(&0, &Caller, "").unwrap_err();
    // Structurally equal but independent values.
    assert_eq!(first, second);
    // A pass in between leaves no memory.
    assert!(obligation.evaluate(&1, &Caller, "").is_ok());
    let third = obligation.evaluate(&0, &Caller, "").unwrap_err();
    assert_eq!(first, third);
}

#[test]
fn panicking_filter_normalizes_to_unavailable_evidence() {
    let obligation = Obligation::new(
        Position::PARAMETER_1,
        ObligationKind::MustBeInDomain,
        Exploding,
    );
    let violation = obligation.evaluate(&42, &Caller, "").unwrap_err();
    assert_eq!(
        violation.evidence(),
        &Evidence::Unavailable {
            cause: "cursor failed mid-walk".to_string()
        }
    );
}

#[test]
fn check_normalizes_panics_to_discarded() {
    let obligation = Obligation::new(
        Position::PARAMETER_1,
        ObligationKind::MustBeInDomain,
        Exploding,
    );
    assert_eq!(obligation.check(&42), FilterState::Discarded);

    let obligation = positive(Position::PARAMETER_1);
    assert_eq!(obligation.check(&5), FilterState::Kept);
    assert_eq!(obligation.check(&-5), FilterState::Discarded);
}

#[test]
fn absent_candidate_fails_every_kind() {
    let not_null = crate::catalog::must_not_be_null::<String>(Position::PARAMETER_1);
    let violation = not_null.evaluate_optional(None, &Caller, "").unwrap_err();
    assert_eq!(violation.evidence(), &Evidence::Absent);
    assert!(not_null
        .evaluate_optional(Some(&"present".to_string()), &Caller, "")
        .is_ok());

    // A non-nullability kind never keeps an absent candidate either.
    let positive = positive(Position::PARAMETER_1);
    let violation = positive.evaluate_optional(None, &Caller, "").unwrap_err();
    assert_eq!(violation.evidence(), &Evidence::Absent);
}

#[test]
fn clones_share_the_domain() {
    let obligation = positive(Position::PARAMETER_1);
    let copy = obligation.clone();
    assert_eq!(obligation.contract_ref(), copy.contract_ref());
    assert!(copy.evaluate(&1, &Caller, "").is_ok());
}
