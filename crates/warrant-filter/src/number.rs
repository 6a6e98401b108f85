//! Ordering comparisons against a fixed bound.
//!
//! Values that do not compare (`partial_cmp` returns `None`, e.g. NaN)
//! are discarded by every filter here: an incomparable candidate cannot
//! be shown to satisfy an ordering constraint.

use std::cmp::Ordering;
use std::fmt;

use crate::filter::Filter;
use crate::state::FilterState;

/// Keeps candidates strictly greater than the bound.
#[derive(Debug, Clone)]
pub struct GreaterThan<T> {
    bound: T,
}

impl<T> GreaterThan<T> {
    pub fn new(bound: T) -> Self {
        Self { bound }
    }
}

impl<T> Filter<T> for GreaterThan<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &T) -> FilterState {
        FilterState::from_bool(matches!(
            candidate.partial_cmp(&self.bound),
            Some(Ordering::Greater)
        ))
    }
}

/// Keeps candidates greater than or equal to the bound.
#[derive(Debug, Clone)]
pub struct GreaterThanOrEqual<T> {
    bound: T,
}

impl<T> GreaterThanOrEqual<T> {
    pub fn new(bound: T) -> Self {
        Self { bound }
    }
}

impl<T> Filter<T> for GreaterThanOrEqual<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &T) -> FilterState {
        FilterState::from_bool(matches!(
            candidate.partial_cmp(&self.bound),
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }
}

/// Keeps candidates strictly less than the bound.
#[derive(Debug, Clone)]
pub struct LessThan<T> {
    bound: T,
}

impl<T> LessThan<T> {
    pub fn new(bound: T) -> Self {
        Self { bound }
    }
}

impl<T> Filter<T> for LessThan<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &T) -> FilterState {
        FilterState::from_bool(matches!(
            candidate.partial_cmp(&self.bound),
            Some(Ordering::Less)
        ))
    }
}

/// Keeps candidates less than or equal to the bound.
#[derive(Debug, Clone)]
pub struct LessThanOrEqual<T> {
    bound: T,
}

impl<T> LessThanOrEqual<T> {
    pub fn new(bound: T) -> Self {
        Self { bound }
    }
}

impl<T> Filter<T> for LessThanOrEqual<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &T) -> FilterState {
        FilterState::from_bool(matches!(
            candidate.partial_cmp(&self.bound),
            Some(Ordering::Less | Ordering::Equal)
        ))
    }
}
