//! CLI argument parsing for skiff.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skiff")]
#[command(about = "skiff - a start page for your terminal", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging (logs to /tmp/skiff.log)
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive start page (default)
    Tui,

    /// Resolve a query and print the destination URL without navigating
    Query {
        /// Input text, exactly as it would be typed in the overlay
        query: String,
    },

    /// List the visible commands of the registry
    Commands,
}
