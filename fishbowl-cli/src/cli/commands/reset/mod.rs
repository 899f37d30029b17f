//! `fishbowl reset`

pub mod handler;

pub use handler::handle_reset_command;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ResetCommands {
    /// History matrix to clear
    pub input: PathBuf,

    /// Write the cleared matrix here instead of overwriting the input
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
