//! Console rendering for assignments and history matrices

use colored::*;

use crate::history::HistoryMatrix;
use crate::services::matching::Assignment;

/// Print the drawn assignments, one `giver -> recipient` per line
pub fn print_assignments(assignment: &Assignment) {
    println!();
    println!("{}", "Assignments:".bold());

    let width = assignment
        .iter()
        .map(|(giver, _)| giver.chars().count())
        .max()
        .unwrap_or(0);

    for (giver, recipient) in assignment.iter() {
        println!(
            "  {} {} {}",
            pad_right(giver, width).cyan(),
            "->".dimmed(),
            recipient.green()
        );
    }
}

/// Print the matrix as an aligned table
pub fn print_matrix(matrix: &HistoryMatrix) {
    print!("{}", render_matrix(matrix));
}

/// Explain which participants block a new round
pub fn print_no_solution_hints(matrix: &HistoryMatrix) {
    let exhausted = matrix.exhausted_givers();

    if !exhausted.is_empty() {
        eprintln!(
            "{}",
            "Participants who have already given to everyone else:".yellow()
        );
        for giver in exhausted {
            eprintln!("  {}", giver);
        }
    }

    eprintln!(
        "Run {} to start a new cycle of pairings.",
        "fishbowl reset <matrix>".bold()
    );
}

/// Render a matrix as a fixed-width table (rows = givers, columns = recipients)
pub fn render_matrix(matrix: &HistoryMatrix) -> String {
    let label_width = matrix
        .participants()
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let columns: Vec<&str> = matrix.column_labels().collect();

    let mut out = String::new();

    out.push_str(&" ".repeat(label_width));
    for column in &columns {
        out.push_str("  ");
        out.push_str(column);
    }
    out.push('\n');

    for giver in matrix.participants() {
        out.push_str(&pad_right(giver, label_width));
        for column in &columns {
            let cell = if matrix.is_paired(giver, column) { "1" } else { "0" };
            out.push_str("  ");
            out.push_str(&pad_left(cell, column.chars().count()));
        }
        out.push('\n');
    }

    out
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn pad_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", " ".repeat(width.saturating_sub(len)), text)
}
