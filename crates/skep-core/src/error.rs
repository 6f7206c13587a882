//! Error types for decoding raw map codes.

use std::error::Error;
use std::fmt;

/// A raw integer code that does not name a known heading or cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeError {
    /// The code is not one of the four heading codes (1 through 4).
    UnknownDirection {
        /// The offending code.
        code: i32,
    },
    /// The code is not one of the eight cell codes (-1 through 7).
    UnknownCell {
        /// The offending code.
        code: i32,
    },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection { code } => {
                write!(f, "unknown direction code {code} (expected 1..=4)")
            }
            Self::UnknownCell { code } => {
                write!(f, "unknown cell code {code} (expected -1..=7)")
            }
        }
    }
}

impl Error for CodeError {}
