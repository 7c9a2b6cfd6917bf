//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands for the exercise tracking server.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Directory holding the exercises file
        #[arg(long, env = "LIFTLOG_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Allow a specific CORS origin (repeatable); all origins when absent
        #[arg(long = "cors-origin", action = clap::ArgAction::Append)]
        cors_origins: Vec<String>,
    },

    /// Show resolved paths for the liftlog data directory
    Paths,
}
