//! Error types for hive-map construction and access.

use skep_core::CodeError;
use std::error::Error;
use std::fmt;

/// Errors arising from hive-map construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// Attempted to construct a map with zero cells.
    EmptyMap,
    /// A dimension exceeds the coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest supported size.
        max: u32,
    },
    /// The supplied cell buffer does not match `rows * cols`.
    CellCountMismatch {
        /// Expected cell count.
        expected: usize,
        /// Supplied cell count.
        got: usize,
    },
    /// A coordinate is outside the bounds of the map.
    CoordOutOfBounds {
        /// Requested row.
        r: i32,
        /// Requested column.
        c: i32,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A raw code in the input buffer does not decode to a cell.
    InvalidCell {
        /// Flat row-major index of the offending code.
        index: usize,
        /// The underlying decode error.
        source: CodeError,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap => write!(f, "map must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum dimension {max}")
            }
            Self::CellCountMismatch { expected, got } => {
                write!(f, "expected {expected} cells, got {got}")
            }
            Self::CoordOutOfBounds { r, c, bounds } => {
                write!(f, "coordinate ({r}, {c}) out of bounds: {bounds}")
            }
            Self::InvalidCell { index, source } => {
                write!(f, "invalid cell at index {index}: {source}")
            }
        }
    }
}

impl Error for MapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCell { source, .. } => Some(source),
            _ => None,
        }
    }
}
