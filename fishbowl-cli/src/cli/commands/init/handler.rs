//! Init command handler

use anyhow::{Context, Result};
use colored::*;

use super::InitCommands;
use crate::cli::commands::save_matrix;
use crate::history::HistoryMatrix;

/// Write a fresh history matrix with every pairing open
pub fn handle_init_command(args: InitCommands) -> Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "Output file already exists: {} (use --force to overwrite)",
            args.output.display()
        );
    }

    let matrix = HistoryMatrix::new(args.names).context("Invalid participant list")?;
    save_matrix(&matrix, &args.output)?;

    println!(
        "Created history matrix for {} participants at '{}'.",
        matrix.len(),
        args.output.display().to_string().cyan()
    );
    Ok(())
}
