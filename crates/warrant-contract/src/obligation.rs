//! The obligation type and its total evaluation algorithm.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use warrant_filter::{Filter, FilterState};

use crate::kinds::ObligationKind;
use crate::position::Position;
use crate::violation::{ContractRef, Evidence, Violation};

/// A precondition: one parameter position bound to one domain filter.
///
/// Obligations are immutable and stateless across evaluations; the same
/// obligation may be evaluated any number of times, concurrently, with
/// no memory of prior evaluations. Cloning shares the domain, so a
/// process-wide reusable contract is just a cloned value (or a caller's
/// `OnceLock`).
pub struct Obligation<T: ?Sized> {
    parameter: Position,
    kind: ObligationKind,
    domain: Arc<dyn Filter<T>>,
}

impl<T: ?Sized> Clone for Obligation<T> {
    fn clone(&self) -> Self {
        Self {
            parameter: self.parameter,
            kind: self.kind,
            domain: Arc::clone(&self.domain),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Obligation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Obligation")
            .field("parameter", &self.parameter)
            .field("kind", &self.kind)
            .field("domain", &self.domain)
            .finish()
    }
}

impl<T: ?Sized> Obligation<T> {
    /// Bind a domain filter to a parameter position. This is the
    /// generic `must_be_in_domain` entry; the catalog wraps it for
    /// every named kind.
    pub fn new(
        parameter: Position,
        kind: ObligationKind,
        domain: impl Filter<T> + 'static,
    ) -> Self {
        Self {
            parameter,
            kind,
            domain: Arc::new(domain),
        }
    }

    pub fn parameter(&self) -> Position {
        self.parameter
    }

    pub fn kind(&self) -> ObligationKind {
        self.kind
    }

    /// Serializable identity of this contract.
    pub fn contract_ref(&self) -> ContractRef {
        ContractRef {
            kind: self.kind,
            parameter: self.parameter,
            blamed: self.parameter.bitmask(),
            domain: format!("{:?}", self.domain),
        }
    }

    /// Raw domain verdict, with an internal filter failure normalized
    /// to discarded.
    pub fn check(&self, candidate: &T) -> FilterState {
        panic::catch_unwind(AssertUnwindSafe(|| self.domain.filter(candidate)))
            .unwrap_or(FilterState::Discarded)
    }
}

impl<T: fmt::Debug + ?Sized> Obligation<T> {
    /// Evaluate one candidate value against this obligation.
    ///
    /// Total: a kept candidate returns `Ok(())` with no observable side
    /// effect; a discarded candidate returns a violation capturing the
    /// candidate as evidence; a domain filter that fails internally
    /// (panics while inspecting the candidate) returns a violation with
    /// unavailable evidence and the cause recorded. No internal error
    /// ever escapes.
    pub fn evaluate(
        &self,
        candidate: &T,
        plaintiff: &dyn fmt::Debug,
        description: &str,
    ) -> Result<(), Violation> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.domain.filter(candidate))) {
            Ok(FilterState::Kept) => Ok(()),
            Ok(FilterState::Discarded) => Err(self.violation(
                plaintiff,
                Evidence::Captured(format!("{candidate:?}")),
                description,
            )),
            Err(payload) => Err(self.violation(
                plaintiff,
                Evidence::Unavailable {
                    cause: panic_cause(payload),
                },
                description,
            )),
        }
    }

    /// Evaluate a candidate that may be absent.
    ///
    /// `None` fails every obligation kind — a nullability-testing kind
    /// by its own contract, every other kind because null is never
    /// kept — with `Evidence::Absent`.
    pub fn evaluate_optional(
        &self,
        candidate: Option<&T>,
        plaintiff: &dyn fmt::Debug,
        description: &str,
    ) -> Result<(), Violation> {
        match candidate {
            Some(value) => self.evaluate(value, plaintiff, description),
            None => Err(self.violation(plaintiff, Evidence::Absent, description)),
        }
    }

    fn violation(
        &self,
        plaintiff: &dyn fmt::Debug,
        evidence: Evidence,
        description: &str,
    ) -> Violation {
        Violation::new(self.contract_ref(), plaintiff, evidence, description)
    }
}

/// Best-effort rendering of a panic payload.
pub(crate) fn panic_cause(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "filter failed with a non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "obligation_tests.rs"]
mod tests;
