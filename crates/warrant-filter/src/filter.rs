use std::fmt;

use crate::state::FilterState;

/// A predicate over candidate values of type `T`.
///
/// Implementations must be pure: the verdict depends only on the
/// candidate and the filter's immutable configuration, with no side
/// effects and no blocking. The `Debug` supertrait lets an obligation
/// render its domain in diagnostics; `Send + Sync` lets one filter be
/// shared across concurrent evaluations without locking.
pub trait Filter<T: ?Sized>: fmt::Debug + Send + Sync {
    fn filter(&self, candidate: &T) -> FilterState;
}

/// The vacuous non-null domain: every typed candidate is kept.
///
/// A `&T` in Rust is never null, so this filter keeps everything; the
/// null route of a not-null obligation lives in
/// `Obligation::evaluate_optional`, where a `None` candidate fails
/// before any domain is consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotNull;

impl<T: ?Sized> Filter<T> for NotNull {
    fn filter(&self, _candidate: &T) -> FilterState {
        FilterState::Kept
    }
}
