//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use liftlog_core::ExerciseService;
use liftlog_core::paths::{EXERCISES_FILE_NAME, exercises_file};
use liftlog_store::JsonExerciseStore;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins with credentials (browser frontends).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Optional override for the directory holding the exercises file.
    pub data_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            port: 8080,
            data_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Override the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AxumContext {
    /// Exercise service backed by the JSON store.
    pub exercises: Arc<ExerciseService>,
}

/// Bootstrap the Axum server with all services.
///
/// An explicit `data_dir` in the config wins over the platform default, so
/// tests and containers can point the server at any directory.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let storage_file = match &config.data_dir {
        Some(dir) => dir.join(EXERCISES_FILE_NAME),
        None => exercises_file()?,
    };

    tracing::info!(
        target: "liftlog.paths",
        storage_file = %storage_file.display(),
        "Axum bootstrap resolved paths"
    );

    let store = Arc::new(JsonExerciseStore::new(storage_file));
    let exercises = Arc::new(ExerciseService::new(store));

    Ok(AxumContext { exercises })
}

/// Start the web server on the specified port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("liftlog web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
