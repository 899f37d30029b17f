//! Validation errors for history matrices

use std::fmt;

/// Which side of the matrix a label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// A history matrix that cannot be handed to the matcher
///
/// Line numbers are 1-based and refer to the CSV source.
#[derive(Debug)]
pub enum MatrixError {
    /// No header row at all
    Empty,
    RowLength {
        line: u64,
        expected: usize,
        found: usize,
    },
    NotSquare {
        rows: usize,
        columns: usize,
    },
    InvalidCell {
        line: u64,
        row: String,
        column: String,
        value: String,
    },
    BlankLabel {
        axis: Axis,
        position: usize,
    },
    DuplicateLabel {
        axis: Axis,
        label: String,
    },
    /// A column label with no matching row label
    LabelMismatch {
        label: String,
    },
    Csv(csv::Error),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Empty => write!(f, "Matrix is empty (missing header row)"),
            MatrixError::RowLength {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {} has {} fields, expected {} (label + one cell per column)",
                line, found, expected
            ),
            MatrixError::NotSquare { rows, columns } => write!(
                f,
                "Matrix is not square: {} rows but {} columns",
                rows, columns
            ),
            MatrixError::InvalidCell {
                line,
                row,
                column,
                value,
            } => write!(
                f,
                "Line {}: cell [{}, {}] must be 0 or 1, found '{}'",
                line, row, column, value
            ),
            MatrixError::BlankLabel { axis, position } => {
                write!(f, "Blank {} label at position {}", axis, position)
            }
            MatrixError::DuplicateLabel { axis, label } => {
                write!(f, "Duplicate {} label '{}'", axis, label)
            }
            MatrixError::LabelMismatch { label } => write!(
                f,
                "Column '{}' has no matching row; row and column labels must be the same set",
                label
            ),
            MatrixError::Csv(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrixError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for MatrixError {
    fn from(err: csv::Error) -> Self {
        MatrixError::Csv(err)
    }
}
