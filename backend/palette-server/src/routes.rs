use crate::{
    AppState, create_palette, create_project, delete_palette, get_palette, health,
    list_project_palettes, list_projects, welcome,
};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// Paths not listed here get axum's default 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        // Health check endpoints
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Projects
        .route("/api/v1/projects", get(list_projects).post(create_project))
        .route(
            "/api/v1/projects/{id}/palettes",
            get(list_project_palettes).post(create_palette),
        )
        // Palettes
        .route(
            "/api/v1/palettes/{id}",
            get(get_palette).delete(delete_palette),
        )
        .with_state(state)
        // The browser front-end is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
