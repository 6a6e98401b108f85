//! Parameter position identity and bitmask attribution.

use serde::{Deserialize, Serialize};

/// Fixed upper bound on supported parameter positions, chosen at build
/// time.
pub const MAX_POSITIONS: usize = 10;

static LABELS: [&str; MAX_POSITIONS] = [
    "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th",
];

/// Configuration error: a parameter index outside the supported range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parameter index {0} out of range (this build supports positions 0..{MAX_POSITIONS})")]
pub struct PositionError(pub usize);

/// One positional parameter of an operation.
///
/// The only constructor is the range-checked [`Position::of`] registry,
/// so every `Position` with the same index is the same canonical
/// position and value equality coincides with identity. The bitmask
/// (`1 << index`) records, in a single integer, which positions were
/// involved in a multi-parameter violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    pub const PARAMETER_1: Position = Position(0);
    pub const PARAMETER_2: Position = Position(1);
    pub const PARAMETER_3: Position = Position(2);
    pub const PARAMETER_4: Position = Position(3);
    pub const PARAMETER_5: Position = Position(4);
    pub const PARAMETER_6: Position = Position(5);
    pub const PARAMETER_7: Position = Position(6);
    pub const PARAMETER_8: Position = Position(7);
    pub const PARAMETER_9: Position = Position(8);
    pub const PARAMETER_10: Position = Position(9);

    /// Look up the canonical position for a zero-based index.
    pub fn of(index: usize) -> Result<Position, PositionError> {
        if index < MAX_POSITIONS {
            Ok(Position(index as u8))
        } else {
            Err(PositionError(index))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Exactly one bit set: `1 << index`.
    pub fn bitmask(self) -> u64 {
        1u64 << self.0
    }

    /// Ordinal name, e.g. `"1st"`.
    pub fn label(self) -> &'static str {
        LABELS[self.0 as usize]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} parameter", self.label())
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::of(value as usize)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.0
    }
}

/// OR together the bitmasks of several positions.
///
/// Union is associative and commutative, so reporting order never
/// changes which parameters are blamed.
pub fn blamed_mask(positions: &[Position]) -> u64 {
    positions.iter().fold(0, |mask, p| mask | p.bitmask())
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
