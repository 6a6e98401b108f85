//! One constructor per obligation kind.
//!
//! Each function binds the kind's canonical domain filter to a
//! parameter position and fixes the evidence type: scalars for the
//! numeric/equality families, `str` for the string family, slices for
//! the container families, [`Dynamic`] for runtime-type checks, and
//! [`BeforeAndAfter`] pairs for change detection. The nested [`length`]
//! module mirrors the numeric comparisons over a container's computed
//! length.

use std::any::Any;
use std::fmt;

use regex::Regex;

use warrant_filter::class::{Class, Dynamic, ExcludesClasses, IncludesOnlyClasses, InstanceOf};
use warrant_filter::comparability::{Bounded, EndPoint};
use warrant_filter::composite::Not;
use warrant_filter::elements::{
    ExcludesIndices, ExcludesMembers, IncludesIndices, IncludesMembers, IncludesOnlyIndices,
    IncludesOnlyMembers, MemberOf, NoDuplicates, NoNulls,
};
use warrant_filter::equality::{EqualTo, NotEqualTo};
use warrant_filter::filter::NotNull;
use warrant_filter::number::{GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual};
use warrant_filter::string::{
    ContainsNonSpaces, ContainsOnlyAlpha, ContainsOnlyAlphaNumerics, ContainsOnlyNumerics,
    ContainsOnlyPrintable, EmptyString, ExcludesSpaces, NotEmptyString, Pattern, StringId,
    StringLength,
};
use warrant_filter::time::{BeforeAndAfter, Changing, Unchanging};
use warrant_filter::Filter;

use crate::kinds::{LengthKind, ObligationKind};
use crate::obligation::Obligation;
use crate::position::Position;

// -- Domain, nullability, equality, change --

/// The parameter must belong to an arbitrary caller-supplied domain.
pub fn must_be_in_domain<T: ?Sized>(
    parameter: Position,
    domain: impl Filter<T> + 'static,
) -> Obligation<T> {
    Obligation::new(parameter, ObligationKind::MustBeInDomain, domain)
}

/// The parameter must not be null; pair with
/// [`evaluate_optional`](Obligation::evaluate_optional).
pub fn must_not_be_null<T: ?Sized>(parameter: Position) -> Obligation<T> {
    Obligation::new(parameter, ObligationKind::MustNotBeNull, NotNull)
}

/// The parameter's value must differ between before and after.
pub fn must_change<T>(parameter: Position) -> Obligation<BeforeAndAfter<T>>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(parameter, ObligationKind::MustChange, Changing)
}

/// The parameter's value must stay the same between before and after.
pub fn must_not_change<T>(parameter: Position) -> Obligation<BeforeAndAfter<T>>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(parameter, ObligationKind::MustNotChange, Unchanging)
}

/// The parameter must equal a fixed value.
pub fn must_equal<T>(parameter: Position, other: T) -> Obligation<T>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(parameter, ObligationKind::MustEqual, EqualTo::new(other))
}

/// The parameter must differ from a fixed value.
pub fn must_not_equal<T>(parameter: Position, other: T) -> Obligation<T>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustNotEqual,
        NotEqualTo::new(other),
    )
}

// -- Numeric comparisons against a caller-supplied bound --

pub fn must_be_greater_than<T>(parameter: Position, bound: T) -> Obligation<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeGreaterThan,
        GreaterThan::new(bound),
    )
}

pub fn must_be_greater_than_or_equal_to<T>(parameter: Position, bound: T) -> Obligation<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeGreaterThanOrEqualTo,
        GreaterThanOrEqual::new(bound),
    )
}

pub fn must_be_less_than<T>(parameter: Position, bound: T) -> Obligation<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeLessThan,
        LessThan::new(bound),
    )
}

pub fn must_be_less_than_or_equal_to<T>(parameter: Position, bound: T) -> Obligation<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeLessThanOrEqualTo,
        LessThanOrEqual::new(bound),
    )
}

// -- Numeric comparisons against the fixed constants 0, 1, -1 --

pub fn must_be_greater_than_zero<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeGreaterThanZero,
        GreaterThan::new(T::from(0)),
    )
}

pub fn must_be_greater_than_one<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeGreaterThanOne,
        GreaterThan::new(T::from(1)),
    )
}

pub fn must_be_greater_than_negative_one<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeGreaterThanNegativeOne,
        GreaterThan::new(T::from(-1)),
    )
}

pub fn must_be_greater_than_or_equal_to_zero<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeGreaterThanOrEqualToZero,
        GreaterThanOrEqual::new(T::from(0)),
    )
}

pub fn must_be_greater_than_or_equal_to_one<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeGreaterThanOrEqualToOne,
        GreaterThanOrEqual::new(T::from(1)),
    )
}

pub fn must_be_greater_than_or_equal_to_negative_one<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeGreaterThanOrEqualToNegativeOne,
        GreaterThanOrEqual::new(T::from(-1)),
    )
}

pub fn must_be_less_than_zero<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeLessThanZero,
        LessThan::new(T::from(0)),
    )
}

pub fn must_be_less_than_one<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeLessThanOne,
        LessThan::new(T::from(1)),
    )
}

pub fn must_be_less_than_negative_one<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeLessThanNegativeOne,
        LessThan::new(T::from(-1)),
    )
}

pub fn must_be_less_than_or_equal_to_zero<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeLessThanOrEqualToZero,
        LessThanOrEqual::new(T::from(0)),
    )
}

pub fn must_be_less_than_or_equal_to_one<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeLessThanOrEqualToOne,
        LessThanOrEqual::new(T::from(1)),
    )
}

pub fn must_be_less_than_or_equal_to_negative_one<T>(parameter: Position) -> Obligation<T>
where
    T: PartialOrd + From<i8> + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeLessThanOrEqualToNegativeOne,
        LessThanOrEqual::new(T::from(-1)),
    )
}

// -- Ranges --

/// Closed bounds: `[minimum, maximum]`.
pub fn must_be_between<T>(parameter: Position, minimum: T, maximum: T) -> Obligation<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeBetween,
        Bounded::closed(minimum, maximum),
    )
}

/// Per-endpoint open/closed bounds.
pub fn must_be_between_endpoints<T>(
    parameter: Position,
    minimum_end: EndPoint,
    minimum: T,
    maximum_end: EndPoint,
    maximum: T,
) -> Obligation<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeBetween,
        Bounded::new(minimum_end, minimum, maximum_end, maximum),
    )
}

/// Closed bounds over any ordered (not necessarily numeric) type.
pub fn must_be_in_bounds<T>(parameter: Position, minimum: T, maximum: T) -> Obligation<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeInBounds,
        Bounded::closed(minimum, maximum),
    )
}

/// Per-endpoint open/closed bounds over any ordered type.
pub fn must_be_in_bounds_endpoints<T>(
    parameter: Position,
    minimum_end: EndPoint,
    minimum: T,
    maximum_end: EndPoint,
    maximum: T,
) -> Obligation<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeInBounds,
        Bounded::new(minimum_end, minimum, maximum_end, maximum),
    )
}

// -- Runtime type --

/// The parameter must carry a value of exactly type `Expected`.
pub fn must_be_instance_of<Expected: Any>(parameter: Position) -> Obligation<Dynamic> {
    Obligation::new(
        parameter,
        ObligationKind::MustBeInstanceOf,
        InstanceOf::of::<Expected>(),
    )
}

/// The parameter must not carry a value of type `Expected`.
pub fn must_not_be_instance_of<Expected: Any>(parameter: Position) -> Obligation<Dynamic> {
    Obligation::new(
        parameter,
        ObligationKind::MustNotBeInstanceOf,
        Not(InstanceOf::of::<Expected>()),
    )
}

// -- Strings --

pub fn must_be_empty_string(parameter: Position) -> Obligation<str> {
    Obligation::new(parameter, ObligationKind::MustBeEmptyString, EmptyString)
}

pub fn must_not_be_empty_string(parameter: Position) -> Obligation<str> {
    Obligation::new(
        parameter,
        ObligationKind::MustNotBeEmptyString,
        NotEmptyString,
    )
}

/// Character count within `[minimum, maximum]`.
pub fn must_be_string_length(
    parameter: Position,
    minimum: usize,
    maximum: usize,
) -> Obligation<str> {
    Obligation::new(
        parameter,
        ObligationKind::MustBeStringLength,
        StringLength::new(minimum, maximum),
    )
}

pub fn must_exclude_spaces(parameter: Position) -> Obligation<str> {
    Obligation::new(parameter, ObligationKind::MustExcludeSpaces, ExcludesSpaces)
}

pub fn must_contain_non_spaces(parameter: Position) -> Obligation<str> {
    Obligation::new(
        parameter,
        ObligationKind::MustContainNonSpaces,
        ContainsNonSpaces,
    )
}

pub fn must_contain_only_numerics(parameter: Position) -> Obligation<str> {
    Obligation::new(
        parameter,
        ObligationKind::MustContainOnlyNumerics,
        ContainsOnlyNumerics,
    )
}

pub fn must_contain_only_alpha(parameter: Position) -> Obligation<str> {
    Obligation::new(
        parameter,
        ObligationKind::MustContainOnlyAlpha,
        ContainsOnlyAlpha,
    )
}

pub fn must_contain_only_alpha_numerics(parameter: Position) -> Obligation<str> {
    Obligation::new(
        parameter,
        ObligationKind::MustContainOnlyAlphaNumerics,
        ContainsOnlyAlphaNumerics,
    )
}

pub fn must_contain_only_printable_characters(parameter: Position) -> Obligation<str> {
    Obligation::new(
        parameter,
        ObligationKind::MustContainOnlyPrintableCharacters,
        ContainsOnlyPrintable,
    )
}

/// Identifier shape: leading letter or underscore, then word characters.
pub fn must_be_string_id(parameter: Position) -> Obligation<str> {
    Obligation::new(parameter, ObligationKind::MustBeStringId, StringId)
}

/// The parameter must match a regular expression (anchor for full-string
/// matches).
pub fn must_match_pattern(parameter: Position, pattern: Regex) -> Obligation<str> {
    Obligation::new(
        parameter,
        ObligationKind::MustMatchPattern,
        Pattern::new(pattern),
    )
}

// -- Membership --

pub fn must_be_member_of<T>(parameter: Position, members: Vec<T>) -> Obligation<T>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustBeMemberOf,
        MemberOf::new(members),
    )
}

pub fn must_not_be_member_of<T>(parameter: Position, members: Vec<T>) -> Obligation<T>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustNotBeMemberOf,
        Not(MemberOf::new(members)),
    )
}

/// The container must include every listed member.
pub fn must_contain_members<T>(parameter: Position, members: Vec<T>) -> Obligation<[T]>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustContainMembers,
        IncludesMembers::new(members),
    )
}

/// Every element of the container must be a listed member.
pub fn must_contain_only_members<T>(parameter: Position, members: Vec<T>) -> Obligation<[T]>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustContainOnlyMembers,
        IncludesOnlyMembers::new(members),
    )
}

/// The container must include none of the listed members.
pub fn must_exclude_members<T>(parameter: Position, members: Vec<T>) -> Obligation<[T]>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustExcludeMembers,
        ExcludesMembers::new(members),
    )
}

// -- Indices --

pub fn must_contain_indices<T: 'static>(
    parameter: Position,
    indices: Vec<usize>,
) -> Obligation<[T]> {
    Obligation::new(
        parameter,
        ObligationKind::MustContainIndices,
        IncludesIndices::new(indices),
    )
}

pub fn must_contain_only_indices<T: 'static>(
    parameter: Position,
    indices: Vec<usize>,
) -> Obligation<[T]> {
    Obligation::new(
        parameter,
        ObligationKind::MustContainOnlyIndices,
        IncludesOnlyIndices::new(indices),
    )
}

pub fn must_exclude_indices<T: 'static>(
    parameter: Position,
    indices: Vec<usize>,
) -> Obligation<[T]> {
    Obligation::new(
        parameter,
        ObligationKind::MustExcludeIndices,
        ExcludesIndices::new(indices),
    )
}

// -- Container hygiene --

pub fn must_contain_no_duplicates<T>(parameter: Position) -> Obligation<[T]>
where
    T: PartialEq + 'static,
{
    Obligation::new(
        parameter,
        ObligationKind::MustContainNoDuplicates,
        NoDuplicates,
    )
}

pub fn must_contain_no_nulls<T: 'static>(parameter: Position) -> Obligation<[Option<T>]> {
    Obligation::new(parameter, ObligationKind::MustContainNoNulls, NoNulls)
}

/// Every element must be one of the listed concrete types.
pub fn must_contain_only_classes(
    parameter: Position,
    classes: Vec<Class>,
) -> Obligation<[Dynamic]> {
    Obligation::new(
        parameter,
        ObligationKind::MustContainOnlyClasses,
        IncludesOnlyClasses::new(classes),
    )
}

/// No element may be one of the listed concrete types.
pub fn must_exclude_classes(parameter: Position, classes: Vec<Class>) -> Obligation<[Dynamic]> {
    Obligation::new(
        parameter,
        ObligationKind::MustExcludeClasses,
        ExcludesClasses::new(classes),
    )
}

// -- Length constraints --

/// Length obligations over any measurable container, routed through the
/// shared `length_of` helper; a container whose length cannot be
/// computed violates every one of them.
pub mod length {
    use warrant_filter::container::{Length, Measurable};

    use super::*;

    fn length_obligation<C>(
        parameter: Position,
        kind: LengthKind,
        filter: impl Filter<i64> + 'static,
    ) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        Obligation::new(
            parameter,
            ObligationKind::Length(kind),
            Length::new(filter),
        )
    }

    pub fn must_equal<C>(parameter: Position, length: i64) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(parameter, LengthKind::MustEqual, EqualTo::new(length))
    }

    pub fn must_not_equal<C>(parameter: Position, length: i64) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(parameter, LengthKind::MustNotEqual, NotEqualTo::new(length))
    }

    pub fn must_equal_zero<C>(parameter: Position) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(parameter, LengthKind::MustEqualZero, EqualTo::new(0))
    }

    pub fn must_equal_one<C>(parameter: Position) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(parameter, LengthKind::MustEqualOne, EqualTo::new(1))
    }

    pub fn must_be_greater_than_one<C>(parameter: Position) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(
            parameter,
            LengthKind::MustBeGreaterThanOne,
            GreaterThan::new(1),
        )
    }

    pub fn must_be_greater_than_zero<C>(parameter: Position) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(
            parameter,
            LengthKind::MustBeGreaterThanZero,
            GreaterThan::new(0),
        )
    }

    pub fn must_be_greater_than<C>(parameter: Position, length: i64) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(
            parameter,
            LengthKind::MustBeGreaterThan,
            GreaterThan::new(length),
        )
    }

    pub fn must_be_greater_than_or_equal_to<C>(parameter: Position, length: i64) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(
            parameter,
            LengthKind::MustBeGreaterThanOrEqualTo,
            GreaterThanOrEqual::new(length),
        )
    }

    pub fn must_be_less_than<C>(parameter: Position, length: i64) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(parameter, LengthKind::MustBeLessThan, LessThan::new(length))
    }

    pub fn must_be_less_than_or_equal_to<C>(parameter: Position, length: i64) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(
            parameter,
            LengthKind::MustBeLessThanOrEqualTo,
            LessThanOrEqual::new(length),
        )
    }

    /// Closed bounds on the measured length.
    pub fn must_be_between<C>(parameter: Position, minimum: i64, maximum: i64) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(
            parameter,
            LengthKind::MustBeBetween,
            Bounded::closed(minimum, maximum),
        )
    }

    /// The measured length must belong to an arbitrary caller-supplied
    /// domain.
    pub fn must_be_in_domain<C>(
        parameter: Position,
        domain: impl Filter<i64> + 'static,
    ) -> Obligation<C>
    where
        C: Measurable + ?Sized + 'static,
    {
        length_obligation(parameter, LengthKind::MustBeInDomain, domain)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
