//! Assign command handler

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use super::AssignCommands;
use crate::cli::commands::{load_matrix, save_matrix};
use crate::cli::output;
use crate::config::Config;
use crate::services::matching::find_assignment;

/// Draw one round, print it, and record it in the history matrix
pub fn handle_assign_command(args: AssignCommands, config: &Config) -> Result<()> {
    let mut matrix = load_matrix(&args.input)?;

    log::info!(
        "Searching assignment for {} participants",
        matrix.participants().len()
    );

    let assignment = match find_assignment(matrix.participants(), &matrix) {
        Ok(assignment) => assignment,
        Err(no_solution) => {
            output::print_no_solution_hints(&matrix);
            return Err(no_solution.into());
        }
    };

    output::print_assignments(&assignment);

    if args.dry_run {
        println!();
        println!("{}", "Dry run: history not updated.".dimmed());
        return Ok(());
    }

    let changed = matrix.record(&assignment);
    log::debug!("{} cells marked as paired", changed);

    match destination(&args, config) {
        Some(path) => {
            save_matrix(&matrix, &path)?;
            println!();
            println!(
                "Updated matrix written to '{}'.",
                path.display().to_string().cyan()
            );
        }
        None if config.assign.show_matrix => {
            println!();
            println!("{}", "Updated matrix:".bold());
            output::print_matrix(&matrix);
        }
        None => {
            log::warn!("Updated matrix was neither written nor shown");
        }
    }

    Ok(())
}

/// Where the updated matrix goes: explicit output, the input itself, or nowhere
fn destination(args: &AssignCommands, config: &Config) -> Option<PathBuf> {
    if let Some(output) = &args.output {
        Some(output.clone())
    } else if args.in_place || config.assign.in_place {
        Some(args.input.clone())
    } else {
        None
    }
}
