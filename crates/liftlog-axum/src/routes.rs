//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `ExerciseService`.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
///
/// The allow-list variant names its methods and headers explicitly:
/// `tower-http` rejects wildcards once credentials are allowed.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::{HeaderValue, Method, header};
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true)
                .max_age(Duration::from_secs(3600))
        }
    }
}

/// Build all API routes without `/api` prefix (for nesting under /api).
///
/// Returns a router typed as `Router<AppState>` (state inferred from handlers)
/// but WITHOUT `.with_state()` applied. The caller must apply `.with_state()`
/// before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Exercises API
        .route(
            "/exercises",
            get(handlers::exercises::list).post(handlers::exercises::create),
        )
        // Static segments win over `{id}` in axum's route matching
        .route(
            "/exercises/grouped",
            get(handlers::exercises::grouped_by_category),
        )
        .route(
            "/exercises/grouped/week",
            get(handlers::exercises::grouped_by_week),
        )
        .route(
            "/exercises/week/{week_number}",
            get(handlers::exercises::by_week),
        )
        .route(
            "/exercises/category/{category}",
            get(handlers::exercises::by_category),
        )
        .route(
            "/exercises/{id}",
            get(handlers::exercises::get)
                .put(handlers::exercises::update)
                .delete(handlers::exercises::remove),
        )
        // Health API
        .route("/health/check", get(handlers::health::check))
        .route("/health/info", get(handlers::health::info))
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`, `{week_number}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
