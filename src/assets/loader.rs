//! Document loading on top of asset resolution.
//!
//! Local documents are read straight from disk. Remote documents are fetched
//! and buffered in memory, bounded by a timeout. Any failure becomes
//! [`DocumentState::Unavailable`] so the page can offer an external link
//! instead of failing to render.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{AssetError, AssetKind, AssetResolver, AssetSource, ResolvedAsset};
use crate::http_client::HttpClient;

/// Fetches the full body of a remote asset.
#[async_trait]
pub trait RemoteFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AssetError>;
}

/// [`RemoteFetcher`] backed by [`HttpClient`].
#[derive(Clone)]
pub struct HttpFetcher {
    client: HttpClient,
}

impl HttpFetcher {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AssetError> {
        let response = self.client.get(url).await?;
        if !response.is_success() {
            return Err(AssetError::RemoteStatus {
                url: url.to_string(),
                status: response.status.as_u16(),
            });
        }

        tracing::debug!(
            "Fetching {} ({}, {} bytes advertised)",
            url,
            response.content_type().unwrap_or("unknown type"),
            response
                .content_length()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string())
        );

        Ok(response.bytes().await?)
    }
}

/// Outcome of loading a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentState {
    /// Document bytes, with where they came from.
    Loaded { bytes: Vec<u8>, origin: AssetSource },
    /// Document could not be loaded; `external_url` is the remote location
    /// the user can try directly.
    Unavailable { reason: String, external_url: String },
}

impl DocumentState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Loaded { bytes, .. } => Some(bytes),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Loads documents through an [`AssetResolver`].
#[derive(Clone)]
pub struct DocumentLoader {
    resolver: Arc<AssetResolver>,
    fetcher: Arc<dyn RemoteFetcher>,
    timeout: Duration,
}

impl DocumentLoader {
    pub fn new(
        resolver: Arc<AssetResolver>,
        fetcher: Arc<dyn RemoteFetcher>,
        timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            timeout,
        }
    }

    /// Load a document by name. Never fails; errors degrade to `Unavailable`.
    pub async fn load_document(&self, name: &str) -> DocumentState {
        let asset = self.resolver.resolve(name, AssetKind::Document);
        let external_url = self.resolver.remote().url_for(&asset.name);

        let result = match &asset.source {
            AssetSource::Local(_) => read_local(&asset).await,
            AssetSource::Remote(url) => self.fetch_remote(url).await,
        };

        match result {
            Ok(bytes) => DocumentState::Loaded {
                bytes,
                origin: asset.source,
            },
            Err(e) => {
                tracing::warn!("Document {} unavailable from {}: {}", asset.name, asset.source, e);
                DocumentState::Unavailable {
                    reason: e.to_string(),
                    external_url,
                }
            }
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, AssetError> {
        match tokio::time::timeout(self.timeout, self.fetcher.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(AssetError::Timeout(self.timeout)),
        }
    }
}

async fn read_local(asset: &ResolvedAsset) -> Result<Vec<u8>, AssetError> {
    let path = asset.local_path()?;
    Ok(tokio::fs::read(path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::RemoteTemplate;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    /// Fetcher that always fails, counting calls.
    #[derive(Default)]
    struct FailingFetcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RemoteFetcher for FailingFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, AssetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AssetError::RemoteStatus {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    struct StaticFetcher(Vec<u8>);

    #[async_trait]
    impl RemoteFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>, AssetError> {
            Ok(self.0.clone())
        }
    }

    struct HangingFetcher;

    #[async_trait]
    impl RemoteFetcher for HangingFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>, AssetError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Vec::new())
        }
    }

    fn loader(root: &Path, fetcher: Arc<dyn RemoteFetcher>) -> DocumentLoader {
        let resolver = AssetResolver::new(root, RemoteTemplate::new("Ahmer109", "portfolio_web"));
        DocumentLoader::new(Arc::new(resolver), fetcher, Duration::from_millis(100))
    }

    #[tokio::test]
    async fn test_local_bytes_round_trip() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        let content: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        std::fs::write(dir.path().join("assets/cv.pdf"), &content).unwrap();

        let fetcher = Arc::new(FailingFetcher::default());
        let state = loader(dir.path(), fetcher.clone()).load_document("cv.pdf").await;

        assert_eq!(state.bytes(), Some(content.as_slice()));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_network_failure_degrades() {
        let dir = tempdir().unwrap();
        let state = loader(dir.path(), Arc::new(FailingFetcher::default()))
            .load_document("cv.pdf")
            .await;

        match state {
            DocumentState::Unavailable {
                reason,
                external_url,
            } => {
                assert!(reason.contains("404"));
                assert_eq!(
                    external_url,
                    "https://raw.githubusercontent.com/Ahmer109/portfolio_web/main/assets/cv.pdf"
                );
            }
            other => panic!("expected unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remote_body_is_buffered() {
        let dir = tempdir().unwrap();
        let state = loader(dir.path(), Arc::new(StaticFetcher(b"%PDF-1.7".to_vec())))
            .load_document("cv.pdf")
            .await;

        assert!(state.is_loaded());
        assert_eq!(state.bytes(), Some(&b"%PDF-1.7"[..]));
        match state {
            DocumentState::Loaded { origin, .. } => assert!(!origin.is_local()),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_fetch_is_bounded_by_timeout() {
        let dir = tempdir().unwrap();
        let state = loader(dir.path(), Arc::new(HangingFetcher))
            .load_document("cv.pdf")
            .await;

        match state {
            DocumentState::Unavailable { reason, .. } => assert!(reason.contains("timed out")),
            other => panic!("expected timeout, got {:?}", other),
        }
    }
}
