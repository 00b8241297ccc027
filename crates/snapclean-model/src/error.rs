use std::fmt;

use thiserror::Error;

/// Which dimension of a table an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row was offered whose width does not match the header count.
    #[error("row length {actual} does not match header length {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("{axis} index {index} out of bounds (len {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;
