//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::add::AddArgs;
use crate::commands::entries::EntriesArgs;
use crate::commands::import::ImportArgs;

/// Client for the streams data service.
///
/// Authenticates, lists streams and their entries, and pushes new entries
/// individually or as an incremental batch import.
#[derive(Debug, Parser)]
#[command(name = "streams", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List streams visible to the authenticated account.
    Streams {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a stream's entries, keyed by field name.
    Entries(EntriesArgs),

    /// Add a single entry to a stream.
    Add(AddArgs),

    /// Import per-day nutrition totals into a stream.
    Import(ImportArgs),
}
