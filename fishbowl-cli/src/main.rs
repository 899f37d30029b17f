use anyhow::Result;
use clap::Parser;
use colored::*;
use std::process::ExitCode;

use fishbowl::cli::commands::{assign, check, init, reset};
use fishbowl::cli::{Cli, Commands};
use fishbowl::config::Config;

fn main() -> ExitCode {
    // Load environment variables (RUST_LOG etc.)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Assign(args) => assign::handle_assign_command(args, &config),
        Commands::Init(args) => init::handle_init_command(args),
        Commands::Reset(args) => reset::handle_reset_command(args),
        Commands::Check(args) => check::handle_check_command(args),
    }
}

/// RUST_LOG wins; otherwise -v flags pick the level
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
