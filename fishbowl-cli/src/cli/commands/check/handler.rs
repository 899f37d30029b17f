//! Check command handler

use anyhow::Result;
use colored::*;

use super::CheckCommands;
use crate::cli::commands::load_matrix;
use crate::cli::output;
use crate::services::matching::find_assignment;

/// Validate a matrix and report whether another round can be drawn
pub fn handle_check_command(args: CheckCommands) -> Result<()> {
    let matrix = load_matrix(&args.input)?;

    println!(
        "{} participants in '{}'",
        matrix.len(),
        args.input.display().to_string().cyan()
    );

    let width = matrix
        .participants()
        .iter()
        .map(|p| p.chars().count())
        .max()
        .unwrap_or(0);
    for participant in matrix.participants() {
        println!(
            "  {:<width$}  {} open",
            participant,
            matrix.open_pairs(participant),
            width = width
        );
    }

    match find_assignment(matrix.participants(), &matrix) {
        Ok(_) => {
            println!("{}", "A valid assignment exists.".green());
            Ok(())
        }
        Err(no_solution) => {
            output::print_no_solution_hints(&matrix);
            Err(no_solution.into())
        }
    }
}
