use std::fmt;

use crate::filter::Filter;
use crate::state::FilterState;

/// Keeps candidates equal to a fixed value.
#[derive(Debug, Clone)]
pub struct EqualTo<T> {
    other: T,
}

impl<T> EqualTo<T> {
    pub fn new(other: T) -> Self {
        Self { other }
    }
}

impl<T> Filter<T> for EqualTo<T>
where
    T: PartialEq + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &T) -> FilterState {
        FilterState::from_bool(*candidate == self.other)
    }
}

/// Keeps candidates different from a fixed value.
#[derive(Debug, Clone)]
pub struct NotEqualTo<T> {
    other: T,
}

impl<T> NotEqualTo<T> {
    pub fn new(other: T) -> Self {
        Self { other }
    }
}

impl<T> Filter<T> for NotEqualTo<T>
where
    T: PartialEq + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &T) -> FilterState {
        FilterState::from_bool(*candidate != self.other)
    }
}
