/// Serialization contract for violations and the types they carry.
///
/// Violations cross process and API boundaries as JSON, so their wire
/// shape is load-bearing: everything must round-trip without loss, and
/// malformed position indices must be rejected on the way in.
use warrant_contract::catalog;
use warrant_contract::kinds::ObligationKind;
use warrant_contract::{Evidence, Position, Violation};

#[path = "../common/mod.rs"]
mod common;

use common::Plaintiff;

// ---------------------------------------------------------------------------
// Violation round-trip
// ---------------------------------------------------------------------------

fn sample_violation() -> Violation {
    catalog::must_be_greater_than(Position::PARAMETER_2, 10_i64)
        .evaluate(&3, &Plaintiff("orders::place"), "quantity too small")
        .unwrap_err()
}

#[test]
fn violation_serializes_to_json() {
    let json = serde_json::to_string(&sample_violation());
    assert!(json.is_ok(), "Violation should serialize to JSON");
}

#[test]
fn violation_round_trips() {
    let original = sample_violation();
    let json = serde_json::to_string(&original).unwrap();
    let restored: Violation = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn violation_wire_shape_carries_contract_fields() {
    let value: serde_json::Value =
        serde_json::to_value(sample_violation()).unwrap();

    assert_eq!(value["contract"]["kind"], "must_be_greater_than");
    assert_eq!(value["contract"]["parameter"], 1);
    assert_eq!(
        value["contract"]["blamed"],
        Position::PARAMETER_2.bitmask()
    );
    assert_eq!(value["description"], "quantity too small");
}

// ---------------------------------------------------------------------------
// Evidence variants
// ---------------------------------------------------------------------------

#[test]
fn evidence_variants_round_trip() {
    for evidence in [
        Evidence::Captured("3".to_string()),
        Evidence::Absent,
        Evidence::Unavailable {
            cause: "filter failed".to_string(),
        },
    ] {
        let json = serde_json::to_string(&evidence).unwrap();
        let restored: Evidence = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, evidence);
    }
}

#[test]
fn absent_evidence_has_a_stable_tag() {
    assert_eq!(
        serde_json::to_string(&Evidence::Absent).unwrap(),
        "\"absent\""
    );
}

// ---------------------------------------------------------------------------
// Position wire format
// ---------------------------------------------------------------------------

#[test]
fn position_serializes_as_its_index() {
    assert_eq!(
        serde_json::to_string(&Position::PARAMETER_3).unwrap(),
        "2"
    );
}

#[test]
fn position_round_trips() {
    let restored: Position = serde_json::from_str("9").unwrap();
    assert_eq!(restored, Position::PARAMETER_10);
}

#[test]
fn out_of_range_position_is_rejected() {
    let result: Result<Position, _> = serde_json::from_str("12");
    assert!(result.is_err(), "indices past the last position must fail");
}

// ---------------------------------------------------------------------------
// Kind tags
// ---------------------------------------------------------------------------

#[test]
fn unit_kind_serializes_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&ObligationKind::MustContainNoDuplicates).unwrap(),
        "\"must_contain_no_duplicates\""
    );
}

#[test]
fn length_kind_round_trips() {
    let kind = ObligationKind::Length(warrant_contract::kinds::LengthKind::MustBeBetween);
    let json = serde_json::to_string(&kind).unwrap();
    let restored: ObligationKind = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, kind);
}
