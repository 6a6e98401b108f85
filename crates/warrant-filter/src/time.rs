//! Before/after change detection.

use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::state::FilterState;

/// A value observed at two points in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeforeAndAfter<T> {
    pub before: T,
    pub after: T,
}

impl<T> BeforeAndAfter<T> {
    pub fn new(before: T, after: T) -> Self {
        Self { before, after }
    }
}

/// Keeps pairs whose value changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Changing;

impl<T: PartialEq> Filter<BeforeAndAfter<T>> for Changing {
    fn filter(&self, candidate: &BeforeAndAfter<T>) -> FilterState {
        FilterState::from_bool(candidate.before != candidate.after)
    }
}

/// Keeps pairs whose value did not change.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchanging;

impl<T: PartialEq> Filter<BeforeAndAfter<T>> for Unchanging {
    fn filter(&self, candidate: &BeforeAndAfter<T>) -> FilterState {
        FilterState::from_bool(candidate.before == candidate.after)
    }
}
