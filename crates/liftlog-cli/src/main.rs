//! CLI entry point.
//!
//! Command dispatch routes to the Axum adapter; all service wiring lives in
//! `liftlog_axum::bootstrap`.

use clap::Parser;

use liftlog_axum::{ServerConfig, start_server};
use liftlog_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        liftlog_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            data_dir,
            cors_origins,
        } => {
            let mut config = ServerConfig::with_defaults();
            config.port = port;
            config.data_dir = data_dir;
            if !cors_origins.is_empty() {
                config = config.with_allowed_origins(cors_origins);
            }

            println!();
            println!("  🚀 liftlog server starting...");
            println!();
            if let Some(ref dir) = config.data_dir {
                println!("  📂 Data dir: {}", dir.display());
            }
            println!("  🌐 API:     http://localhost:{}", port);
            println!();
            println!("  Press Ctrl+C to stop");
            println!();

            start_server(config).await?;
        }
        Commands::Paths => {
            use liftlog_core::paths::{data_root, exercises_file};

            println!("Data root:      {}", data_root()?.display());
            println!("Exercises file: {}", exercises_file()?.display());
        }
    }

    Ok(())
}
