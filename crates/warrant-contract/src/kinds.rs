//! The closed catalog of obligation kinds.
//!
//! One flat tagged enum replaces per-kind violation subtypes: each
//! variant fixes what the obligation tests, the [`catalog`](crate::catalog)
//! constructor fixes the evidence type, and the violation carries the
//! kind tag for inspection and serialization.

use serde::{Deserialize, Serialize};

/// Length-constraint sub-family, mirroring the numeric comparisons but
/// operating on a container's computed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthKind {
    MustEqual,
    MustNotEqual,
    MustEqualZero,
    MustEqualOne,
    MustBeGreaterThanOne,
    MustBeGreaterThanZero,
    MustBeGreaterThan,
    MustBeGreaterThanOrEqualTo,
    MustBeLessThan,
    MustBeLessThanOrEqualTo,
    MustBeBetween,
    MustBeInDomain,
}

impl LengthKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthKind::MustEqual => "length_must_equal",
            LengthKind::MustNotEqual => "length_must_not_equal",
            LengthKind::MustEqualZero => "length_must_equal_zero",
            LengthKind::MustEqualOne => "length_must_equal_one",
            LengthKind::MustBeGreaterThanOne => "length_must_be_greater_than_one",
            LengthKind::MustBeGreaterThanZero => "length_must_be_greater_than_zero",
            LengthKind::MustBeGreaterThan => "length_must_be_greater_than",
            LengthKind::MustBeGreaterThanOrEqualTo => "length_must_be_greater_than_or_equal_to",
            LengthKind::MustBeLessThan => "length_must_be_less_than",
            LengthKind::MustBeLessThanOrEqualTo => "length_must_be_less_than_or_equal_to",
            LengthKind::MustBeBetween => "length_must_be_between",
            LengthKind::MustBeInDomain => "length_must_be_in_domain",
        }
    }
}

impl std::fmt::Display for LengthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every obligation kind the framework can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObligationKind {
    MustBeInDomain,
    MustNotBeNull,
    MustChange,
    MustNotChange,
    MustEqual,
    MustNotEqual,
    MustBeGreaterThanZero,
    MustBeGreaterThanOne,
    MustBeGreaterThanNegativeOne,
    MustBeGreaterThanOrEqualToZero,
    MustBeGreaterThanOrEqualToOne,
    MustBeGreaterThanOrEqualToNegativeOne,
    MustBeLessThanZero,
    MustBeLessThanOne,
    MustBeLessThanNegativeOne,
    MustBeLessThanOrEqualToZero,
    MustBeLessThanOrEqualToOne,
    MustBeLessThanOrEqualToNegativeOne,
    MustBeGreaterThan,
    MustBeGreaterThanOrEqualTo,
    MustBeLessThan,
    MustBeLessThanOrEqualTo,
    MustBeBetween,
    MustBeInBounds,
    MustBeInstanceOf,
    MustNotBeInstanceOf,
    MustBeEmptyString,
    MustNotBeEmptyString,
    MustBeStringLength,
    MustExcludeSpaces,
    MustContainNonSpaces,
    MustContainOnlyNumerics,
    MustContainOnlyAlpha,
    MustContainOnlyAlphaNumerics,
    MustContainOnlyPrintableCharacters,
    MustBeStringId,
    MustMatchPattern,
    MustBeMemberOf,
    MustNotBeMemberOf,
    MustContainMembers,
    MustContainOnlyMembers,
    MustExcludeMembers,
    MustContainIndices,
    MustContainOnlyIndices,
    MustExcludeIndices,
    MustContainNoDuplicates,
    MustContainNoNulls,
    MustContainOnlyClasses,
    MustExcludeClasses,
    Length(LengthKind),
}

impl ObligationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObligationKind::MustBeInDomain => "must_be_in_domain",
            ObligationKind::MustNotBeNull => "must_not_be_null",
            ObligationKind::MustChange => "must_change",
            ObligationKind::MustNotChange => "must_not_change",
            ObligationKind::MustEqual => "must_equal",
            ObligationKind::MustNotEqual => "must_not_equal",
            ObligationKind::MustBeGreaterThanZero => "must_be_greater_than_zero",
            ObligationKind::MustBeGreaterThanOne => "must_be_greater_than_one",
            ObligationKind::MustBeGreaterThanNegativeOne => "must_be_greater_than_negative_one",
            ObligationKind::MustBeGreaterThanOrEqualToZero => {
                "must_be_greater_than_or_equal_to_zero"
            }
            ObligationKind::MustBeGreaterThanOrEqualToOne => "must_be_greater_than_or_equal_to_one",
            ObligationKind::MustBeGreaterThanOrEqualToNegativeOne => {
                "must_be_greater_than_or_equal_to_negative_one"
            }
            ObligationKind::MustBeLessThanZero => "must_be_less_than_zero",
            ObligationKind::MustBeLessThanOne => "must_be_less_than_one",
            ObligationKind::MustBeLessThanNegativeOne => "must_be_less_than_negative_one",
            ObligationKind::MustBeLessThanOrEqualToZero => "must_be_less_than_or_equal_to_zero",
            ObligationKind::MustBeLessThanOrEqualToOne => "must_be_less_than_or_equal_to_one",
            ObligationKind::MustBeLessThanOrEqualToNegativeOne => {
                "must_be_less_than_or_equal_to_negative_one"
            }
            ObligationKind::MustBeGreaterThan => "must_be_greater_than",
            ObligationKind::MustBeGreaterThanOrEqualTo => "must_be_greater_than_or_equal_to",
            ObligationKind::MustBeLessThan => "must_be_less_than",
            ObligationKind::MustBeLessThanOrEqualTo => "must_be_less_than_or_equal_to",
            ObligationKind::MustBeBetween => "must_be_between",
            ObligationKind::MustBeInBounds => "must_be_in_bounds",
            ObligationKind::MustBeInstanceOf => "must_be_instance_of",
            ObligationKind::MustNotBeInstanceOf => "must_not_be_instance_of",
            ObligationKind::MustBeEmptyString => "must_be_empty_string",
            ObligationKind::MustNotBeEmptyString => "must_not_be_empty_string",
            ObligationKind::MustBeStringLength => "must_be_string_length",
            ObligationKind::MustExcludeSpaces => "must_exclude_spaces",
            ObligationKind::MustContainNonSpaces => "must_contain_non_spaces",
            ObligationKind::MustContainOnlyNumerics => "must_contain_only_numerics",
            ObligationKind::MustContainOnlyAlpha => "must_contain_only_alpha",
            ObligationKind::MustContainOnlyAlphaNumerics => "must_contain_only_alpha_numerics",
            ObligationKind::MustContainOnlyPrintableCharacters => {
                "must_contain_only_printable_characters"
            }
            ObligationKind::MustBeStringId => "must_be_string_id",
            ObligationKind::MustMatchPattern => "must_match_pattern",
            ObligationKind::MustBeMemberOf => "must_be_member_of",
            ObligationKind::MustNotBeMemberOf => "must_not_be_member_of",
            ObligationKind::MustContainMembers => "must_contain_members",
            ObligationKind::MustContainOnlyMembers => "must_contain_only_members",
            ObligationKind::MustExcludeMembers => "must_exclude_members",
            ObligationKind::MustContainIndices => "must_contain_indices",
            ObligationKind::MustContainOnlyIndices => "must_contain_only_indices",
            ObligationKind::MustExcludeIndices => "must_exclude_indices",
            ObligationKind::MustContainNoDuplicates => "must_contain_no_duplicates",
            ObligationKind::MustContainNoNulls => "must_contain_no_nulls",
            ObligationKind::MustContainOnlyClasses => "must_contain_only_classes",
            ObligationKind::MustExcludeClasses => "must_exclude_classes",
            ObligationKind::Length(kind) => kind.as_str(),
        }
    }
}

impl std::fmt::Display for ObligationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
