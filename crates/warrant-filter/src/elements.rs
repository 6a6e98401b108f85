//! Membership, index, duplicate, and null predicates over slices.

use std::fmt;

use crate::filter::Filter;
use crate::state::FilterState;

/// Keeps scalar candidates that appear in a fixed member set.
#[derive(Debug, Clone)]
pub struct MemberOf<T> {
    members: Vec<T>,
}

impl<T> MemberOf<T> {
    pub fn new(members: Vec<T>) -> Self {
        Self { members }
    }
}

impl<T> Filter<T> for MemberOf<T>
where
    T: PartialEq + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &T) -> FilterState {
        FilterState::from_bool(self.members.contains(candidate))
    }
}

/// Keeps containers with no repeated elements.
///
/// Pairwise `PartialEq` scan, so element types need no `Hash` or `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDuplicates;

impl<T: PartialEq> Filter<[T]> for NoDuplicates {
    fn filter(&self, candidate: &[T]) -> FilterState {
        for (i, left) in candidate.iter().enumerate() {
            if candidate[i + 1..].contains(left) {
                return FilterState::Discarded;
            }
        }
        FilterState::Kept
    }
}

/// Keeps containers of optional elements with no `None` holes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNulls;

impl<T> Filter<[Option<T>]> for NoNulls {
    fn filter(&self, candidate: &[Option<T>]) -> FilterState {
        FilterState::from_bool(candidate.iter().all(Option::is_some))
    }
}

/// Keeps containers that include every required member.
#[derive(Debug, Clone)]
pub struct IncludesMembers<T> {
    members: Vec<T>,
}

impl<T> IncludesMembers<T> {
    pub fn new(members: Vec<T>) -> Self {
        Self { members }
    }
}

impl<T> Filter<[T]> for IncludesMembers<T>
where
    T: PartialEq + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &[T]) -> FilterState {
        FilterState::from_bool(self.members.iter().all(|m| candidate.contains(m)))
    }
}

/// Keeps containers whose every element belongs to the member set.
#[derive(Debug, Clone)]
pub struct IncludesOnlyMembers<T> {
    members: Vec<T>,
}

impl<T> IncludesOnlyMembers<T> {
    pub fn new(members: Vec<T>) -> Self {
        Self { members }
    }
}

impl<T> Filter<[T]> for IncludesOnlyMembers<T>
where
    T: PartialEq + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &[T]) -> FilterState {
        FilterState::from_bool(candidate.iter().all(|e| self.members.contains(e)))
    }
}

/// Keeps containers containing none of the forbidden members.
#[derive(Debug, Clone)]
pub struct ExcludesMembers<T> {
    members: Vec<T>,
}

impl<T> ExcludesMembers<T> {
    pub fn new(members: Vec<T>) -> Self {
        Self { members }
    }
}

impl<T> Filter<[T]> for ExcludesMembers<T>
where
    T: PartialEq + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &[T]) -> FilterState {
        FilterState::from_bool(!candidate.iter().any(|e| self.members.contains(e)))
    }
}

/// Keeps containers long enough to hold every required index.
#[derive(Debug, Clone)]
pub struct IncludesIndices {
    indices: Vec<usize>,
}

impl IncludesIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl<T> Filter<[T]> for IncludesIndices {
    fn filter(&self, candidate: &[T]) -> FilterState {
        FilterState::from_bool(self.indices.iter().all(|&i| i < candidate.len()))
    }
}

/// Keeps containers whose every valid index is in the allowed set.
#[derive(Debug, Clone)]
pub struct IncludesOnlyIndices {
    indices: Vec<usize>,
}

impl IncludesOnlyIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl<T> Filter<[T]> for IncludesOnlyIndices {
    fn filter(&self, candidate: &[T]) -> FilterState {
        FilterState::from_bool((0..candidate.len()).all(|i| self.indices.contains(&i)))
    }
}

/// Keeps containers too short to hold any forbidden index.
#[derive(Debug, Clone)]
pub struct ExcludesIndices {
    indices: Vec<usize>,
}

impl ExcludesIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl<T> Filter<[T]> for ExcludesIndices {
    fn filter(&self, candidate: &[T]) -> FilterState {
        FilterState::from_bool(self.indices.iter().all(|&i| i >= candidate.len()))
    }
}

#[cfg(test)]
#[path = "elements_tests.rs"]
mod tests;
