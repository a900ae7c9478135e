//! Static file serving handlers.

use axum::{http::header, response::IntoResponse};

use super::super::assets;

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}

/// Liveness probe.
pub async fn healthz() -> &'static str {
    "ok"
}
