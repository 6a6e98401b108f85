//! Violations: immutable, serializable records of one obligation failure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kinds::ObligationKind;
use crate::position::Position;

/// The offending value captured at failure time, when capturable.
///
/// Values are carried as their rendered text so the whole violation
/// stays portable across process and API boundaries; a value with no
/// richer representation degrades to its `Debug` form instead of
/// failing the violation's own construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// The candidate value, rendered.
    Captured(String),
    /// The candidate itself was null/absent.
    Absent,
    /// The domain filter could not inspect the candidate.
    Unavailable { cause: String },
}

impl Evidence {
    pub fn captured(value: &dyn fmt::Debug) -> Self {
        Evidence::Captured(format!("{value:?}"))
    }

    pub fn is_captured(&self) -> bool {
        matches!(self, Evidence::Captured(_))
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evidence::Captured(value) => f.write_str(value),
            Evidence::Absent => f.write_str("<absent>"),
            Evidence::Unavailable { cause } => write!(f, "<unavailable: {cause}>"),
        }
    }
}

/// Serializable identity of the contract that failed: which kind, on
/// which parameter, blaming which positions, over which domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRef {
    pub kind: ObligationKind,
    pub parameter: Position,
    /// OR of the bitmasks of every blamed position.
    pub blamed: u64,
    /// Rendered domain filter configuration.
    pub domain: String,
}

impl fmt::Display for ContractRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on the {}", self.kind, self.parameter)
    }
}

/// One obligation failure.
///
/// Immutable once constructed; structurally equal violations result
/// from evaluating the same obligation against the same candidate.
/// Plain value, freely batchable; implements `std::error::Error` for
/// the outermost boundary that wants to raise it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    contract: ContractRef,
    plaintiff: String,
    evidence: Evidence,
    description: String,
}

impl Violation {
    pub fn new(
        contract: ContractRef,
        plaintiff: &dyn fmt::Debug,
        evidence: Evidence,
        description: &str,
    ) -> Self {
        Self {
            contract,
            plaintiff: format!("{plaintiff:?}"),
            evidence,
            description: description.to_string(),
        }
    }

    /// The contract that failed.
    pub fn contract(&self) -> &ContractRef {
        &self.contract
    }

    /// Rendering of the object on whose behalf the check ran.
    pub fn plaintiff(&self) -> &str {
        &self.plaintiff
    }

    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    /// Free-text diagnostic; may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Bitmask of every parameter position blamed for this failure.
    pub fn blamed(&self) -> u64 {
        self.contract.blamed
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} violated by {} (evidence: {})",
            self.contract, self.plaintiff, self.evidence
        )?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violation {}
