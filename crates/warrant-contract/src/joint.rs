//! Obligations spanning several parameter positions at once.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use warrant_filter::{Filter, FilterState};

use crate::kinds::ObligationKind;
use crate::obligation::panic_cause;
use crate::position::{blamed_mask, Position};
use crate::violation::{ContractRef, Evidence, Violation};

/// One shared domain applied to several parameters together.
///
/// A single evaluation produces at most one violation; its `blamed`
/// bitmask is the OR of the failing positions' bitmasks, so one failure
/// is attributed to the exact set of parameters involved regardless of
/// the order they were checked in.
pub struct JointObligation<T: ?Sized> {
    parameters: Vec<Position>,
    kind: ObligationKind,
    domain: Arc<dyn Filter<T>>,
}

impl<T: ?Sized> Clone for JointObligation<T> {
    fn clone(&self) -> Self {
        Self {
            parameters: self.parameters.clone(),
            kind: self.kind,
            domain: Arc::clone(&self.domain),
        }
    }
}

impl<T: ?Sized> fmt::Debug for JointObligation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JointObligation")
            .field("parameters", &self.parameters)
            .field("kind", &self.kind)
            .field("domain", &self.domain)
            .finish()
    }
}

impl<T: ?Sized> JointObligation<T> {
    /// Bind a shared domain to a set of parameter positions. At least
    /// one position is expected.
    pub fn new(
        parameters: Vec<Position>,
        kind: ObligationKind,
        domain: impl Filter<T> + 'static,
    ) -> Self {
        Self {
            parameters,
            kind,
            domain: Arc::new(domain),
        }
    }

    pub fn parameters(&self) -> &[Position] {
        &self.parameters
    }

    pub fn kind(&self) -> ObligationKind {
        self.kind
    }

    fn contract_ref(&self, blamed: u64) -> ContractRef {
        ContractRef {
            kind: self.kind,
            parameter: self
                .parameters
                .first()
                .copied()
                .unwrap_or(Position::PARAMETER_1),
            blamed,
            domain: format!("{:?}", self.domain),
        }
    }
}

impl<T: fmt::Debug + ?Sized> JointObligation<T> {
    /// Evaluate one candidate per declared position.
    ///
    /// Total, like single-parameter evaluation: a candidate-count
    /// mismatch and per-candidate filter failures normalize to a
    /// violation instead of escaping.
    pub fn evaluate(
        &self,
        candidates: &[&T],
        plaintiff: &dyn fmt::Debug,
        description: &str,
    ) -> Result<(), Violation> {
        if candidates.len() != self.parameters.len() {
            return Err(Violation::new(
                self.contract_ref(blamed_mask(&self.parameters)),
                plaintiff,
                Evidence::Unavailable {
                    cause: format!(
                        "{} candidate(s) supplied for {} declared parameter(s)",
                        candidates.len(),
                        self.parameters.len()
                    ),
                },
                description,
            ));
        }

        let mut failing = Vec::new();
        let mut rendered = Vec::new();
        let mut failure_cause = None;
        for (&position, &candidate) in self.parameters.iter().zip(candidates) {
            match panic::catch_unwind(AssertUnwindSafe(|| self.domain.filter(candidate))) {
                Ok(FilterState::Kept) => {}
                Ok(FilterState::Discarded) => {
                    failing.push(position);
                    rendered.push(format!("{}: {:?}", position.label(), candidate));
                }
                Err(payload) => {
                    failing.push(position);
                    failure_cause = Some(panic_cause(payload));
                }
            }
        }

        if failing.is_empty() {
            return Ok(());
        }

        let evidence = match failure_cause {
            Some(cause) => Evidence::Unavailable { cause },
            None => Evidence::Captured(rendered.join(", ")),
        };
        Err(Violation::new(
            self.contract_ref(blamed_mask(&failing)),
            plaintiff,
            evidence,
            description,
        ))
    }
}

#[cfg(test)]
#[path = "joint_tests.rs"]
mod tests;
