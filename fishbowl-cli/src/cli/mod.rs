//! Command-line interface

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use commands::{AssignCommands, CheckCommands, InitCommands, ResetCommands};

#[derive(Parser)]
#[command(name = "fishbowl")]
#[command(about = "Assign each person to another without repeating past pairings")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file (defaults to ~/.config/fishbowl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw a new round of assignments and record it in the history matrix
    Assign(AssignCommands),

    /// Create a fresh history matrix for a group
    Init(InitCommands),

    /// Clear all recorded pairings
    Reset(ResetCommands),

    /// Validate a history matrix and report whether a round is still possible
    Check(CheckCommands),
}
