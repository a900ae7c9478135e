//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root renders whichever page `?page=` selects
        .route("/", get(handlers::show_page))
        .route("/home", get(handlers::home_page))
        .route("/projects", get(handlers::projects_page))
        .route("/resume", get(handlers::resume_page))
        // Resolved assets and the resume download
        .route("/assets/*name", get(handlers::serve_asset))
        .route("/resume/download", get(handlers::download_resume))
        // Static assets (CSS)
        .route("/static/style.css", get(handlers::serve_css))
        .route("/healthz", get(handlers::healthz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
