//! Range membership with per-endpoint open/closed semantics.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::state::FilterState;

/// Whether a range endpoint is part of the admissible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndPoint {
    /// The endpoint value itself is admissible.
    Closed,
    /// The endpoint value itself is not admissible.
    Open,
}

/// Keeps candidates inside `[min, max]`, with each endpoint
/// independently open or closed.
///
/// Incomparable candidates (NaN against a numeric bound) are discarded.
#[derive(Debug, Clone)]
pub struct Bounded<T> {
    min: T,
    min_end: EndPoint,
    max: T,
    max_end: EndPoint,
}

impl<T: PartialOrd> Bounded<T> {
    /// Closed bounds on both ends: `[min, max]`.
    pub fn closed(min: T, max: T) -> Self {
        Self::new(EndPoint::Closed, min, EndPoint::Closed, max)
    }

    pub fn new(min_end: EndPoint, min: T, max_end: EndPoint, max: T) -> Self {
        Self {
            min,
            min_end,
            max,
            max_end,
        }
    }
}

impl<T> Filter<T> for Bounded<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync,
{
    fn filter(&self, candidate: &T) -> FilterState {
        let above_min = match candidate.partial_cmp(&self.min) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.min_end == EndPoint::Closed,
            _ => false,
        };
        let below_max = match candidate.partial_cmp(&self.max) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.max_end == EndPoint::Closed,
            _ => false,
        };
        FilterState::from_bool(above_min && below_max)
    }
}

#[cfg(test)]
#[path = "comparability_tests.rs"]
mod tests;
