//! `fishbowl init`

pub mod handler;

pub use handler::handle_init_command;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct InitCommands {
    /// Participant names, in the order used to search for assignments
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Where to write the new matrix
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    pub force: bool,
}
