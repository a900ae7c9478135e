//! Asset and resume download handlers.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};

use super::super::AppState;
use crate::assets::{AssetKind, AssetSource, DocumentState};

/// Download name used when the configured one has nothing usable left.
const FALLBACK_DOWNLOAD_NAME: &str = "resume.pdf";

/// Serve an asset by name: local files are streamed back, remote
/// fallbacks are redirected to. Only the profile image and the resume are
/// served; any other name is 404.
pub async fn serve_asset(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let profile = &state.content.profile;
    let name = name.trim_matches('/');

    let kind = if name == profile.profile_image {
        AssetKind::Image
    } else if name == profile.resume {
        AssetKind::Document
    } else {
        tracing::debug!("Refusing to serve unreferenced asset {}", name);
        return (StatusCode::NOT_FOUND, "Asset not found").into_response();
    };

    let asset = state.resolver.resolve(name, kind);
    match &asset.source {
        AssetSource::Local(path) => match tokio::fs::read(path).await {
            Ok(content) => ([(header::CONTENT_TYPE, asset.content_type())], content).into_response(),
            Err(e) => {
                tracing::warn!("Failed to read asset {}: {}", path.display(), e);
                (StatusCode::NOT_FOUND, "Asset not found").into_response()
            }
        },
        AssetSource::Remote(url) => Redirect::temporary(url).into_response(),
    }
}

/// Offer the resume as a download. When it cannot be loaded, redirect to
/// the remote copy so the link still leads somewhere.
pub async fn download_resume(State(state): State<AppState>) -> Response {
    let profile = &state.content.profile;

    match state.loader.load_document(&profile.resume).await {
        DocumentState::Loaded { bytes, .. } => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                attachment_filename(&profile.resume_download_name)
            );
            (
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        DocumentState::Unavailable { external_url, .. } => {
            Redirect::temporary(&external_url).into_response()
        }
    }
}

/// Filename safe to quote in a `Content-Disposition` header value.
fn attachment_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| (c.is_ascii_graphic() || *c == ' ') && *c != '"' && *c != '\\')
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        FALLBACK_DOWNLOAD_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}
