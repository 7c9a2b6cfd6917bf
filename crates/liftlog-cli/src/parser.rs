//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the exercise tracking server.
///
/// This is the top-level parser that dispatches to subcommands.
#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Track workout exercises by week and category")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_args() {
        let cli = Cli::parse_from([
            "liftlog",
            "serve",
            "--port",
            "9000",
            "--data-dir",
            "/tmp/liftlog",
            "--cors-origin",
            "http://localhost:3000",
            "--cors-origin",
            "http://localhost:5173",
        ]);

        let Some(Commands::Serve {
            port,
            data_dir,
            cors_origins,
        }) = cli.command
        else {
            panic!("expected serve command");
        };

        assert_eq!(port, 9000);
        assert_eq!(data_dir, Some(PathBuf::from("/tmp/liftlog")));
        assert_eq!(
            cors_origins,
            vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ]
        );
    }
}
