//! Error types for thermal-field queries.

use std::error::Error;
use std::fmt;

/// Errors from queries that combine a field with a hive map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The map holds no bees, so there is nothing to average.
    NoBees,
    /// The field was computed from a map of different dimensions.
    DimensionMismatch {
        /// Field rows.
        field_rows: u32,
        /// Field columns.
        field_cols: u32,
        /// Map rows.
        map_rows: u32,
        /// Map columns.
        map_cols: u32,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBees => write!(f, "map holds no bees"),
            Self::DimensionMismatch {
                field_rows,
                field_cols,
                map_rows,
                map_cols,
            } => write!(
                f,
                "field is {field_rows}x{field_cols} but map is {map_rows}x{map_cols}"
            ),
        }
    }
}

impl Error for FieldError {}
