//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Autoreview: decision engine for pending wiki edits
#[derive(Parser)]
#[command(name = "autoreview")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a pending revision and print the decision
    Evaluate {
        /// Path to a JSON check context file
        #[arg(value_name = "CONTEXT_FILE")]
        file: PathBuf,

        /// Output the decision as JSON
        #[arg(long)]
        json: bool,

        /// Show the full per-check trace
        #[arg(short, long)]
        trace: bool,
    },

    /// Run a single check against a context
    Check {
        /// Path to a JSON check context file
        #[arg(value_name = "CONTEXT_FILE")]
        file: PathBuf,

        /// Check identifier (e.g. "superseded-additions")
        #[arg(value_name = "CHECK_ID")]
        check: String,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available checks in pipeline order
    Checks {
        /// Output the list as JSON
        #[arg(long)]
        json: bool,
    },
}
