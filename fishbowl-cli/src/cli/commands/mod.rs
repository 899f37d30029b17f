//! Subcommand arguments and handlers

pub mod assign;
pub mod check;
pub mod init;
pub mod reset;

pub use assign::AssignCommands;
pub use check::CheckCommands;
pub use init::InitCommands;
pub use reset::ResetCommands;

use anyhow::{Context, Result};
use std::path::Path;

use crate::history::HistoryMatrix;

/// Load a history matrix, naming the file on failure
pub(crate) fn load_matrix(path: &Path) -> Result<HistoryMatrix> {
    HistoryMatrix::from_path(path)
        .with_context(|| format!("Failed to load history matrix: {}", path.display()))
}

/// Write a history matrix, naming the file on failure
pub(crate) fn save_matrix(matrix: &HistoryMatrix, path: &Path) -> Result<()> {
    matrix
        .write_to_path(path)
        .with_context(|| format!("Failed to write history matrix: {}", path.display()))
}
