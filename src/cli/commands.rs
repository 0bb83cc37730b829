//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Load cat breeds into a country-partitioned PostgreSQL table
#[derive(Parser, Debug)]
#[command(name = "breed-loader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of breeds to fetch (non-integers fall back to 10)
    #[arg(long, global = true)]
    pub fetch_limit: Option<String>,

    /// Number of rows to export (non-integers fall back to 5)
    #[arg(long, global = true)]
    pub export_count: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the table, load breeds, print a country count and export
    Run,

    /// Create the breed table if it does not exist
    Init,

    /// Fetch breeds from the API and insert them
    Load,

    /// Print the number of rows whose country contains a substring
    Count {
        /// Country substring (case-sensitive)
        #[arg(long)]
        country: Option<String>,
    },

    /// Write up to `--export-count` rows to <prefix><YYYY-MM-DD>.json
    Export {
        /// File name prefix, may include directories
        #[arg(long)]
        prefix: Option<String>,
    },

    /// List countries that have a partition
    Partitions,
}

impl Cli {
    /// The subcommand to run, `run` when none is given
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
