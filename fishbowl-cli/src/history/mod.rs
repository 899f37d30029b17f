//! Pairing history matrix
//!
//! Rows are givers, columns are recipients. A cell of 1 means the pair has
//! already happened and may not be repeated; 0 means it is still open.
//! Diagonal cells are kept as loaded but never consulted.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{Axis, MatrixError};

use std::collections::HashMap;

use crate::services::matching::{Assignment, Eligibility};

/// Labelled square 0/1 matrix of past pairings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryMatrix {
    /// Participant labels in row order
    labels: Vec<String>,
    /// label -> row index
    index: HashMap<String, usize>,
    /// Row index of each column, in the column order to write back
    column_order: Vec<usize>,
    /// cells[giver][recipient], both in row order
    cells: Vec<Vec<bool>>,
}

impl HistoryMatrix {
    /// Fresh matrix for a new group: every pair open, diagonal set
    ///
    /// Labels are trimmed the same way the CSV reader trims fields, so a
    /// written matrix always reads back under the same names.
    pub fn new<I, S>(labels: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|label| Into::<String>::into(label).trim().to_string())
            .collect();
        let index = index_labels(&labels, Axis::Row)?;
        let n = labels.len();

        let cells = (0..n)
            .map(|g| (0..n).map(|r| g == r).collect())
            .collect();

        Ok(Self {
            labels,
            index,
            column_order: (0..n).collect(),
            cells,
        })
    }

    /// Assemble from parsed parts
    ///
    /// `cells` must already be in row order on both axes.
    fn from_parts(
        labels: Vec<String>,
        index: HashMap<String, usize>,
        column_order: Vec<usize>,
        cells: Vec<Vec<bool>>,
    ) -> Self {
        Self {
            labels,
            index,
            column_order,
            cells,
        }
    }

    /// Participants in row order (the matcher's search order)
    pub fn participants(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Column labels in file order
    pub fn column_labels(&self) -> impl Iterator<Item = &str> {
        self.column_order.iter().map(|&idx| self.labels[idx].as_str())
    }

    /// Raw cell value; unknown labels read as not paired
    pub fn is_paired(&self, giver: &str, recipient: &str) -> bool {
        match (self.index.get(giver), self.index.get(recipient)) {
            (Some(&g), Some(&r)) => self.cells[g][r],
            _ => false,
        }
    }

    /// Number of recipients still open to a giver (self excluded)
    pub fn open_pairs(&self, giver: &str) -> usize {
        self.labels
            .iter()
            .filter(|recipient| self.is_eligible(giver, recipient))
            .count()
    }

    /// Participants with no open recipient at all
    pub fn exhausted_givers(&self) -> Vec<&str> {
        self.labels
            .iter()
            .filter(|giver| self.open_pairs(giver) == 0)
            .map(|giver| giver.as_str())
            .collect()
    }

    /// Mark every pair of the assignment as used
    ///
    /// Returns how many cells changed from 0 to 1. Pairs with labels not
    /// in the matrix are skipped.
    pub fn record(&mut self, assignment: &Assignment) -> usize {
        let mut changed = 0;

        for (giver, recipient) in assignment.iter() {
            let (g, r) = match (self.index.get(giver), self.index.get(recipient)) {
                (Some(&g), Some(&r)) => (g, r),
                _ => {
                    log::warn!("Skipping unknown pair {} -> {}", giver, recipient);
                    continue;
                }
            };

            if !self.cells[g][r] {
                self.cells[g][r] = true;
                changed += 1;
            }
        }

        log::debug!("Recorded {} new pairs", changed);
        changed
    }

    /// Clear all pairing history, leaving the diagonal untouched
    ///
    /// Returns how many cells were cleared.
    pub fn reset(&mut self) -> usize {
        let mut cleared = 0;

        for (g, row) in self.cells.iter_mut().enumerate() {
            for (r, cell) in row.iter_mut().enumerate() {
                if g != r && *cell {
                    *cell = false;
                    cleared += 1;
                }
            }
        }

        cleared
    }
}

impl Eligibility for HistoryMatrix {
    fn is_eligible(&self, giver: &str, recipient: &str) -> bool {
        match (self.index.get(giver), self.index.get(recipient)) {
            (Some(&g), Some(&r)) => g != r && !self.cells[g][r],
            _ => false,
        }
    }
}

/// Build label -> position, rejecting blanks and duplicates
fn index_labels(labels: &[String], axis: Axis) -> Result<HashMap<String, usize>, MatrixError> {
    let mut index = HashMap::with_capacity(labels.len());

    for (position, label) in labels.iter().enumerate() {
        if label.trim().is_empty() {
            return Err(MatrixError::BlankLabel { axis, position });
        }
        if index.insert(label.clone(), position).is_some() {
            return Err(MatrixError::DuplicateLabel {
                axis,
                label: label.clone(),
            });
        }
    }

    Ok(index)
}
