//! API Routes
//!
//! Configures the Axum router with all spacecraft endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_spacecraft, delete_spacecraft, get_spacecraft, health_handler, list_spacecraft,
    search_spacecraft, stats_handler, update_spacecraft, AppState,
};
use super::openapi::openapi_handler;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/spacecraft` - List spacecraft, paged
/// - `POST /api/spacecraft` - Register a new spacecraft
/// - `GET /api/spacecraft/find` - Search spacecraft by name fragment
/// - `GET /api/spacecraft/:id` - Fetch a spacecraft by id
/// - `PUT /api/spacecraft/:id` - Replace a spacecraft
/// - `DELETE /api/spacecraft/:id` - Delete a spacecraft
/// - `GET /api-docs/openapi.json` - OpenAPI document
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
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

    // Build router with all endpoints
    Router::new()
        .route(
            "/api/spacecraft",
            get(list_spacecraft).post(create_spacecraft),
        )
        .route("/api/spacecraft/find", get(search_spacecraft))
        .route(
            "/api/spacecraft/:id",
            get(get_spacecraft)
                .put(update_spacecraft)
                .delete(delete_spacecraft),
        )
        .route("/api-docs/openapi.json", get(openapi_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
