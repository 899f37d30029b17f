//! `fishbowl check`

pub mod handler;

pub use handler::handle_check_command;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct CheckCommands {
    /// History matrix to validate
    pub input: PathBuf,
}
