//! Errors raised while reading resolved assets.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when an asset is consumed.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found locally: {0}")]
    MissingLocalAsset(String),

    #[error("Remote returned HTTP {status} for {url}")]
    RemoteStatus { url: String, status: u16 },

    #[error("Remote fetch timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
