//! Character-class, identifier, length, and pattern predicates over `str`.
//!
//! "Contains only X" filters are vacuously kept on the empty string;
//! "contains at least one X" filters discard it.

use regex::Regex;

use crate::comparability::Bounded;
use crate::filter::Filter;
use crate::state::FilterState;

/// Keeps only the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyString;

impl Filter<str> for EmptyString {
    fn filter(&self, candidate: &str) -> FilterState {
        FilterState::from_bool(candidate.is_empty())
    }
}

/// Keeps any non-empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmptyString;

impl Filter<str> for NotEmptyString {
    fn filter(&self, candidate: &str) -> FilterState {
        FilterState::from_bool(!candidate.is_empty())
    }
}

/// Keeps strings containing no whitespace at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcludesSpaces;

impl Filter<str> for ExcludesSpaces {
    fn filter(&self, candidate: &str) -> FilterState {
        FilterState::from_bool(!candidate.chars().any(char::is_whitespace))
    }
}

/// Keeps strings containing at least one non-whitespace character.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsNonSpaces;

impl Filter<str> for ContainsNonSpaces {
    fn filter(&self, candidate: &str) -> FilterState {
        FilterState::from_bool(candidate.chars().any(|c| !c.is_whitespace()))
    }
}

/// Keeps strings whose characters are all numeric.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsOnlyNumerics;

impl Filter<str> for ContainsOnlyNumerics {
    fn filter(&self, candidate: &str) -> FilterState {
        FilterState::from_bool(candidate.chars().all(char::is_numeric))
    }
}

/// Keeps strings whose characters are all alphabetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsOnlyAlpha;

impl Filter<str> for ContainsOnlyAlpha {
    fn filter(&self, candidate: &str) -> FilterState {
        FilterState::from_bool(candidate.chars().all(char::is_alphabetic))
    }
}

/// Keeps strings whose characters are all alphanumeric.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsOnlyAlphaNumerics;

impl Filter<str> for ContainsOnlyAlphaNumerics {
    fn filter(&self, candidate: &str) -> FilterState {
        FilterState::from_bool(candidate.chars().all(char::is_alphanumeric))
    }
}

/// Keeps strings containing no control characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsOnlyPrintable;

impl Filter<str> for ContainsOnlyPrintable {
    fn filter(&self, candidate: &str) -> FilterState {
        FilterState::from_bool(!candidate.chars().any(char::is_control))
    }
}

/// Keeps identifier-shaped strings: a leading letter or underscore
/// followed by letters, digits, or underscores.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringId;

impl Filter<str> for StringId {
    fn filter(&self, candidate: &str) -> FilterState {
        let mut chars = candidate.chars();
        let head_ok = match chars.next() {
            Some(c) => c.is_alphabetic() || c == '_',
            None => false,
        };
        FilterState::from_bool(head_ok && chars.all(|c| c.is_alphanumeric() || c == '_'))
    }
}

/// Keeps strings whose character count falls inside closed bounds.
#[derive(Debug, Clone)]
pub struct StringLength {
    bounds: Bounded<usize>,
}

impl StringLength {
    pub fn new(minimum: usize, maximum: usize) -> Self {
        Self {
            bounds: Bounded::closed(minimum, maximum),
        }
    }

    /// Exact-length constraint.
    pub fn exactly(length: usize) -> Self {
        Self::new(length, length)
    }
}

impl Filter<str> for StringLength {
    fn filter(&self, candidate: &str) -> FilterState {
        self.bounds.filter(&candidate.chars().count())
    }
}

/// Keeps strings matched by a regular expression.
///
/// The pattern is applied as-is; anchor it with `^` / `$` for a
/// full-string match.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Filter<str> for Pattern {
    fn filter(&self, candidate: &str) -> FilterState {
        FilterState::from_bool(self.regex.is_match(candidate))
    }
}

#[cfg(test)]
#[path = "string_tests.rs"]
mod tests;
