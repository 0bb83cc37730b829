//! CLI module
//!
//! Command-line interface for the breed loader.
//!
//! # Commands
//!
//! - `run` - Full sequence: init, load, count, export (default)
//! - `init` - Create the breed table
//! - `load` - Fetch breeds and insert them
//! - `count` - Count rows by country substring
//! - `export` - Write a dated JSON sample
//! - `partitions` - List country partitions

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
