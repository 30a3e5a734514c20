//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Config drift checker - compare config files with their current defaults
#[derive(Parser, Debug)]
#[command(name = "cfgdrift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check every known config file under <HOME>/config for structural drift
    ///
    /// Examples:
    ///   cfgdrift check                  # Check ./config, asking before each update
    ///   cfgdrift check --home ~/.node   # Check ~/.node/config
    ///   cfgdrift check --yes            # Replace outdated files without asking
    Check {
        /// Settings home directory containing the config/ folder
        #[arg(long, env = "CFGDRIFT_HOME", default_value = ".")]
        home: PathBuf,

        #[command(flatten)]
        apply: ApplyArgs,
    },

    /// Check a single known config file
    CheckFile {
        /// File name, e.g. config.toml or app.toml
        file: String,

        /// Directory containing the file
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        apply: ApplyArgs,
    },

    /// Print the current default content of a known config file
    Defaults {
        /// File name, e.g. config.toml or app.toml
        file: String,
    },
}

/// How to resolve the update decision
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyArgs {
    /// Replace outdated files without asking
    #[arg(short, long, conflicts_with = "dry_run")]
    pub yes: bool,

    /// Report drift but never modify files
    #[arg(long)]
    pub dry_run: bool,
}
