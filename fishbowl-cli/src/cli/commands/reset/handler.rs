//! Reset command handler

use anyhow::Result;
use colored::*;

use super::ResetCommands;
use crate::cli::commands::{load_matrix, save_matrix};

/// Clear every recorded pairing so a new cycle can start
pub fn handle_reset_command(args: ResetCommands) -> Result<()> {
    let mut matrix = load_matrix(&args.input)?;
    let cleared = matrix.reset();

    let path = args.output.as_ref().unwrap_or(&args.input);
    save_matrix(&matrix, path)?;

    println!(
        "Cleared {} pairings; matrix written to '{}'.",
        cleared,
        path.display().to_string().cyan()
    );
    Ok(())
}
