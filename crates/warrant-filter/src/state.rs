use serde::{Deserialize, Serialize};

/// Verdict of applying a [`Filter`](crate::Filter) to one candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterState {
    /// The candidate belongs to the domain.
    Kept,
    /// The candidate does not belong to the domain.
    Discarded,
}

impl FilterState {
    pub fn from_bool(keep: bool) -> Self {
        if keep {
            FilterState::Kept
        } else {
            FilterState::Discarded
        }
    }

    pub fn is_kept(self) -> bool {
        self == FilterState::Kept
    }

    /// Flip the verdict.
    pub fn negate(self) -> Self {
        match self {
            FilterState::Kept => FilterState::Discarded,
            FilterState::Discarded => FilterState::Kept,
        }
    }

    /// Conjunction: kept only when both verdicts kept.
    pub fn and(self, other: FilterState) -> Self {
        FilterState::from_bool(self.is_kept() && other.is_kept())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterState::Kept => "kept",
            FilterState::Discarded => "discarded",
        }
    }
}

impl std::fmt::Display for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
