//! API Routes
//!
//! Configures the Axum router with all generator server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, generate_handler, health_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /generate` - Generate a website from form data
/// - `GET /stats` - Completion-cache statistics
/// - `DELETE /cache` - Clear the completion cache
/// - `GET /health` - Health check endpoint
/// - `GET /sites/*` - Static serving of materialized projects
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Generated projects are served directly from the materializer root
    let sites = ServeDir::new(state.materializer.root());

    // Build router with all endpoints
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/stats", get(stats_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/health", get(health_handler))
        .nest_service("/sites", sites)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
