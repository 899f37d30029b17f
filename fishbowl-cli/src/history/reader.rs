//! Read a history matrix from CSV
//!
//! Layout (as written by pandas `to_csv` with an index column):
//!
//! ```text
//! ,Alice,Bob,Carol
//! Alice,1,0,1
//! Bob,0,1,0
//! Carol,0,1,1
//! ```
//!
//! The first header cell is the index name and is ignored. Columns may
//! be in a different order from rows, but must carry the same labels.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{Axis, HistoryMatrix, MatrixError, index_labels};

impl HistoryMatrix {
    /// Load and validate a matrix from a CSV file
    pub fn from_path(path: &Path) -> Result<Self, MatrixError> {
        let file = File::open(path).map_err(csv::Error::from)?;
        let matrix = Self::from_reader(file)?;

        log::info!(
            "Loaded {}x{} history matrix from {}",
            matrix.len(),
            matrix.len(),
            path.display()
        );
        Ok(matrix)
    }

    /// Load and validate a matrix from any CSV source
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, MatrixError> {
        parse(builder().from_reader(rdr))
    }
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    // Header is parsed by hand; field counts are checked per row
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

fn parse<R: Read>(mut reader: csv::Reader<R>) -> Result<HistoryMatrix, MatrixError> {
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(MatrixError::Empty),
    };
    let width = header.len();

    // Skip the index column name
    let column_labels: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
    let column_index = index_labels(&column_labels, Axis::Column)?;
    debug_assert_eq!(column_index.len(), column_labels.len());

    let mut row_labels = Vec::new();
    let mut raw_rows: Vec<Vec<bool>> = Vec::new();

    for record in records {
        let record = record?;
        let line = line_of(&record);

        if record.len() != width {
            return Err(MatrixError::RowLength {
                line,
                expected: width,
                found: record.len(),
            });
        }

        let label = record.get(0).unwrap_or_default().to_string();
        let mut row = Vec::with_capacity(column_labels.len());

        for (column, value) in column_labels.iter().zip(record.iter().skip(1)) {
            let cell = parse_cell(value).ok_or_else(|| MatrixError::InvalidCell {
                line,
                row: label.clone(),
                column: column.clone(),
                value: value.to_string(),
            })?;
            row.push(cell);
        }

        row_labels.push(label);
        raw_rows.push(row);
    }

    if row_labels.len() != column_labels.len() {
        return Err(MatrixError::NotSquare {
            rows: row_labels.len(),
            columns: column_labels.len(),
        });
    }

    let index = index_labels(&row_labels, Axis::Row)?;

    // Same count and no duplicates on either side, so containment is equality
    let column_order = column_labels
        .iter()
        .map(|label| {
            index
                .get(label)
                .copied()
                .ok_or_else(|| MatrixError::LabelMismatch {
                    label: label.clone(),
                })
        })
        .collect::<Result<Vec<usize>, MatrixError>>()?;

    // Re-index columns into row order
    let n = row_labels.len();
    let mut cells = vec![vec![false; n]; n];
    for (g, raw) in raw_rows.into_iter().enumerate() {
        for (c, value) in raw.into_iter().enumerate() {
            cells[g][column_order[c]] = value;
        }
    }

    Ok(HistoryMatrix::from_parts(
        row_labels,
        index,
        column_order,
        cells,
    ))
}

/// 0/1 cell, also accepting the float spelling pandas uses for float frames
fn parse_cell(value: &str) -> Option<bool> {
    match value {
        "0" | "0.0" => Some(false),
        "1" | "1.0" => Some(true),
        _ => None,
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::matching::Eligibility;

    fn read(csv: &str) -> Result<HistoryMatrix, MatrixError> {
        HistoryMatrix::from_reader(csv.as_bytes())
    }

    #[test]
    fn test_read_pandas_layout() {
        let matrix = read(",A,B,C\nA,0,1,0\nB,0,0,0\nC,0,0,0\n").unwrap();

        assert_eq!(matrix.participants(), &["A", "B", "C"]);
        assert!(matrix.is_paired("A", "B"));
        assert!(!matrix.is_eligible("A", "B"));
        assert!(matrix.is_eligible("A", "C"));
        assert!(matrix.is_eligible("B", "A"));
    }

    #[test]
    fn test_read_named_index_and_whitespace() {
        let matrix = read("name, A , B\n A ,1, 0\nB, 1.0 ,0.0\n").unwrap();

        assert_eq!(matrix.participants(), &["A", "B"]);
        assert!(matrix.is_eligible("A", "B"));
        assert!(!matrix.is_eligible("B", "A"));
    }

    #[test]
    fn test_read_reordered_columns() {
        // Columns listed C, A, B; A has given to C before
        let matrix = read(",C,A,B\nA,1,0,0\nB,0,0,0\nC,0,0,0\n").unwrap();

        assert!(matrix.is_paired("A", "C"));
        assert!(!matrix.is_paired("A", "B"));
        let columns: Vec<&str> = matrix.column_labels().collect();
        assert_eq!(columns, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_read_empty_group() {
        let matrix = read("\"\"\n").unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read(""), Err(MatrixError::Empty)));
    }

    #[test]
    fn test_row_length_mismatch() {
        let err = read(",A,B\nA,0,0\nB,0\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::RowLength {
                line: 3,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_not_square() {
        let err = read(",A,B\nA,0,0\n").unwrap_err();
        assert!(matches!(err, MatrixError::NotSquare { rows: 1, columns: 2 }));
    }

    #[test]
    fn test_non_binary_cell() {
        let err = read(",A,B\nA,0,2\nB,0,0\n").unwrap_err();
        match err {
            MatrixError::InvalidCell {
                line,
                row,
                column,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(row, "A");
                assert_eq!(column, "B");
                assert_eq!(value, "2");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_duplicate_row_label() {
        let err = read(",A,B\nA,0,0\nA,0,0\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::DuplicateLabel { axis: Axis::Row, .. }
        ));
    }

    #[test]
    fn test_duplicate_column_label() {
        let err = read(",A,A\nA,0,0\nB,0,0\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::DuplicateLabel { axis: Axis::Column, .. }
        ));
    }

    #[test]
    fn test_blank_row_label() {
        let err = read(",A,B\nA,0,0\n,0,0\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::BlankLabel {
                axis: Axis::Row,
                position: 1
            }
        ));
    }

    #[test]
    fn test_mismatched_labels() {
        let err = read(",A,B\nA,0,0\nC,0,0\n").unwrap_err();
        match err {
            MatrixError::LabelMismatch { label } => assert_eq!(label, "B"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
