//! `fishbowl assign`

pub mod handler;

pub use handler::handle_assign_command;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct AssignCommands {
    /// History matrix (CSV, names x names, 0 = open, 1 = already paired)
    pub input: PathBuf,

    /// Where to save the updated matrix (prints it to stdout if omitted)
    #[arg(short, long, value_name = "PATH", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input matrix with the updated history
    #[arg(long)]
    pub in_place: bool,

    /// Show the assignments without recording them
    #[arg(long)]
    pub dry_run: bool,
}
