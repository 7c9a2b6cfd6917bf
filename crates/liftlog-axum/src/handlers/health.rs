//! Health handlers - liveness and build information.

use axum::Json;
use serde::Serialize;

/// Response body for `/health/check`.
#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    /// Milliseconds since the Unix epoch.
    timestamp: i64,
    message: &'static str,
}

/// Response body for `/health/info`.
#[derive(Serialize)]
pub struct HealthInfo {
    application: &'static str,
    version: &'static str,
    environment: &'static str,
    features: &'static str,
}

/// Liveness probe with a server-side timestamp.
pub async fn check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        timestamp: chrono::Utc::now().timestamp_millis(),
        message: "liftlog backend is healthy",
    })
}

/// Static build information.
pub async fn info() -> Json<HealthInfo> {
    Json(HealthInfo {
        application: "liftlog",
        version: env!("CARGO_PKG_VERSION"),
        environment: "development",
        features: "Exercise tracking",
    })
}
