//! Container length measurement and length-constraint adaptation.

use crate::filter::Filter;
use crate::state::FilterState;

/// A container whose length can be computed.
///
/// `measure` is total: it returns the non-negative length on success and
/// a negative sentinel when the container could not be walked (a
/// misbehaving cursor, a lying size hint). A negative length is treated
/// as an automatic violation of every length constraint, because an
/// un-measurable container cannot be shown to satisfy one.
pub trait Measurable {
    fn measure(&self) -> i64;
}

impl<T> Measurable for [T] {
    fn measure(&self) -> i64 {
        i64::try_from(self.len()).unwrap_or(i64::MAX)
    }
}

impl Measurable for str {
    /// Character count, not byte count.
    fn measure(&self) -> i64 {
        i64::try_from(self.chars().count()).unwrap_or(i64::MAX)
    }
}

/// Shared entry point for every length-based obligation.
pub fn length_of<C: Measurable + ?Sized>(container: &C) -> i64 {
    container.measure()
}

/// Lifts a `Filter<i64>` over the measured length of any container.
#[derive(Debug, Clone)]
pub struct Length<F> {
    filter: F,
}

impl<F> Length<F> {
    pub fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<C, F> Filter<C> for Length<F>
where
    C: Measurable + ?Sized,
    F: Filter<i64>,
{
    fn filter(&self, candidate: &C) -> FilterState {
        let length = length_of(candidate);
        if length < 0 {
            return FilterState::Discarded;
        }
        self.filter.filter(&length)
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
