//! Config drift CLI
//!
//! Compares node and application config files with their current
//! defaults and offers to replace outdated ones.

mod cli;
mod commands;
mod defaults;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Config drift checker", "cfgdrift".green().bold());
            println!();
            println!("Run {} for available commands.", "cfgdrift --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Check { home, apply } => commands::run_check(&home, &apply),
        Commands::CheckFile { file, dir, apply } => commands::run_check_file(&file, &dir, &apply),
        Commands::Defaults { file } => {
            let stdout = std::io::stdout();
            commands::run_defaults(&file, &mut stdout.lock())
        }
    }
}
