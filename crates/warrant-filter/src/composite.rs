use std::fmt;

use crate::filter::Filter;
use crate::state::FilterState;

/// Negation: keeps exactly what the inner filter discards.
#[derive(Debug, Clone, Copy)]
pub struct Not<F>(pub F);

impl<T: ?Sized, F: Filter<T>> Filter<T> for Not<F> {
    fn filter(&self, candidate: &T) -> FilterState {
        self.0.filter(candidate).negate()
    }
}

/// Conjunction: keeps a candidate only when every inner filter keeps it.
///
/// An empty conjunction keeps everything.
pub struct All<T: ?Sized> {
    filters: Vec<Box<dyn Filter<T>>>,
}

impl<T: ?Sized> All<T> {
    pub fn new(filters: Vec<Box<dyn Filter<T>>>) -> Self {
        Self { filters }
    }
}

impl<T: ?Sized> fmt::Debug for All<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("All").field(&self.filters).finish()
    }
}

impl<T: ?Sized> Filter<T> for All<T> {
    fn filter(&self, candidate: &T) -> FilterState {
        self.filters
            .iter()
            .map(|f| f.filter(candidate))
            .fold(FilterState::Kept, FilterState::and)
    }
}

#[cfg(test)]
#[path = "composite_tests.rs"]
mod tests;
