//! Local-first asset resolution.
//!
//! An asset name is probed against a fixed list of candidate locations under
//! the asset root. The first existing file wins; when nothing exists locally
//! the name is substituted into the remote raw-content template instead.
//! Resolution itself never fails. A missing asset is only discovered when the
//! consumer reads the returned source.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AssetError;

/// Default raw-content host used for the remote fallback.
pub const DEFAULT_REMOTE_HOST: &str = "raw.githubusercontent.com";

/// Directory holding assets, both locally and in the remote repository.
pub const ASSETS_DIR: &str = "assets";

/// Declared kind of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Document,
}

impl AssetKind {
    /// Guess the kind from a file name (PDFs are documents, everything else images).
    pub fn from_name(name: &str) -> Self {
        let is_pdf = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            Self::Document
        } else {
            Self::Image
        }
    }

    /// Content type used when the extension gives no better answer.
    pub fn fallback_content_type(&self) -> &'static str {
        match self {
            Self::Image => "image/jpeg",
            Self::Document => "application/pdf",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Document => write!(f, "document"),
        }
    }
}

/// Where a resolved asset can be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// An existing file on the local filesystem.
    Local(PathBuf),
    /// A remote URL built from the fallback template.
    Remote(String),
}

impl AssetSource {
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Result of resolving one asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub name: String,
    pub kind: AssetKind,
    pub source: AssetSource,
}

impl ResolvedAsset {
    /// Local path of the asset, or `MissingLocalAsset` if it resolved remotely.
    pub fn local_path(&self) -> Result<&Path, AssetError> {
        match &self.source {
            AssetSource::Local(path) => Ok(path),
            AssetSource::Remote(_) => Err(AssetError::MissingLocalAsset(self.name.clone())),
        }
    }

    /// Link a browser can follow: local assets are served under `mount`,
    /// remote assets link straight to the remote URL.
    pub fn public_href(&self, mount: &str) -> String {
        match &self.source {
            AssetSource::Local(_) => {
                format!("{}/{}", mount.trim_end_matches('/'), encode_segments(&self.name))
            }
            AssetSource::Remote(url) => url.clone(),
        }
    }

    /// Content type for serving the asset bytes.
    pub fn content_type(&self) -> String {
        crate::utils::content_type_for(&self.name, self.kind)
    }
}

/// Fixed template for remote fallback URLs:
/// `https://{host}/{owner}/{repo}/{branch}/assets/{name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTemplate {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl RemoteTemplate {
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            host: DEFAULT_REMOTE_HOST.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: "main".to_string(),
        }
    }

    /// Build the remote URL for an asset name.
    pub fn url_for(&self, name: &str) -> String {
        format!(
            "https://{}/{}/{}/{}/{}/{}",
            self.host.trim_matches('/'),
            self.owner,
            self.repo,
            self.branch,
            ASSETS_DIR,
            encode_segments(name.trim_matches('/'))
        )
    }
}

/// Resolves asset names against local candidates, falling back to the remote template.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
    remote: RemoteTemplate,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>, remote: RemoteTemplate) -> Self {
        Self {
            root: root.into(),
            remote,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn remote(&self) -> &RemoteTemplate {
        &self.remote
    }

    /// Candidate local paths for `name`, in probe order.
    ///
    /// Names that are empty, absolute or step outside the root produce no
    /// candidates.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let name = name.trim_matches('/');
        if !is_safe_name(name) {
            return Vec::new();
        }

        vec![
            self.root.join(ASSETS_DIR).join(name),
            self.root.join("..").join(ASSETS_DIR).join(name),
            self.root.join(name),
        ]
    }

    /// Resolve an asset reference. Never fails.
    pub fn resolve(&self, name: &str, kind: AssetKind) -> ResolvedAsset {
        let name = name.trim_matches('/');

        let local = self.candidates(name).into_iter().find(|path| path.is_file());
        let source = match local {
            Some(path) => {
                tracing::debug!("Resolved {} {} locally at {}", kind, name, path.display());
                AssetSource::Local(path)
            }
            None => {
                let url = self.remote.url_for(name);
                tracing::debug!("No local {} for {}, falling back to {}", kind, name, url);
                AssetSource::Remote(url)
            }
        };

        ResolvedAsset {
            name: name.to_string(),
            kind,
            source,
        }
    }
}

/// A name is probed locally only if every component is a plain path segment.
fn is_safe_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

/// Percent-encode each `/`-separated segment, keeping the separators.
fn encode_segments(name: &str) -> String {
    name.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn resolver(root: &Path) -> AssetResolver {
        AssetResolver::new(root, RemoteTemplate::new("Ahmer109", "portfolio_web"))
    }

    #[test]
    fn test_remote_url_for_missing_profile_image() {
        let dir = tempdir().unwrap();
        let resolved = resolver(dir.path()).resolve("profile_img_.jpg", AssetKind::Image);

        assert_eq!(
            resolved.source,
            AssetSource::Remote(
                "https://raw.githubusercontent.com/Ahmer109/portfolio_web/main/assets/profile_img_.jpg"
                    .to_string()
            )
        );
        assert_eq!(resolved.kind, AssetKind::Image);
    }

    #[test]
    fn test_prefers_assets_dir() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/cv.pdf"), b"%PDF").unwrap();
        std::fs::write(dir.path().join("cv.pdf"), b"%PDF bare").unwrap();

        let resolved = resolver(dir.path()).resolve("cv.pdf", AssetKind::Document);
        assert_eq!(
            resolved.source,
            AssetSource::Local(dir.path().join("assets").join("cv.pdf"))
        );
    }

    #[test]
    fn test_parent_assets_dir_candidate() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("app");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/profile_img_.jpg"), b"jpg").unwrap();

        let resolved = resolver(&root).resolve("profile_img_.jpg", AssetKind::Image);
        assert!(resolved.source.is_local());
        assert!(resolved.local_path().unwrap().is_file());
    }

    #[test]
    fn test_bare_name_candidate() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("cv.pdf"), b"%PDF").unwrap();

        let resolved = resolver(dir.path()).resolve("cv.pdf", AssetKind::Document);
        assert_eq!(resolved.source, AssetSource::Local(dir.path().join("cv.pdf")));
    }

    #[test]
    fn test_directory_is_not_a_match() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets/cv.pdf")).unwrap();

        let resolved = resolver(dir.path()).resolve("cv.pdf", AssetKind::Document);
        assert!(!resolved.source.is_local());
    }

    #[test]
    fn test_candidate_order() {
        let r = resolver(Path::new("/srv/site"));
        assert_eq!(
            r.candidates("cv.pdf"),
            vec![
                PathBuf::from("/srv/site/assets/cv.pdf"),
                PathBuf::from("/srv/site/../assets/cv.pdf"),
                PathBuf::from("/srv/site/cv.pdf"),
            ]
        );
    }

    #[test]
    fn test_traversal_names_never_probe_locally() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("site");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"nope").unwrap();

        let r = resolver(&root);
        assert!(r.candidates("../secret.txt").is_empty());
        assert!(r.candidates("").is_empty());

        let resolved = r.resolve("../secret.txt", AssetKind::Document);
        assert!(!resolved.source.is_local());
        assert!(matches!(
            resolved.local_path(),
            Err(AssetError::MissingLocalAsset(_))
        ));
    }

    #[test]
    fn test_remote_url_encodes_segments() {
        let template = RemoteTemplate::new("owner", "repo");
        assert_eq!(
            template.url_for("docs/my cv.pdf"),
            "https://raw.githubusercontent.com/owner/repo/main/assets/docs/my%20cv.pdf"
        );
    }

    #[test]
    fn test_public_href() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("profile_img_.jpg"), b"jpg").unwrap();
        let r = resolver(dir.path());

        let local = r.resolve("profile_img_.jpg", AssetKind::Image);
        assert_eq!(local.public_href("/assets/"), "/assets/profile_img_.jpg");

        let remote = r.resolve("missing.png", AssetKind::Image);
        assert_eq!(
            remote.public_href("/assets"),
            "https://raw.githubusercontent.com/Ahmer109/portfolio_web/main/assets/missing.png"
        );
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(AssetKind::from_name("cv.PDF"), AssetKind::Document);
        assert_eq!(AssetKind::from_name("profile_img_.jpg"), AssetKind::Image);
        assert_eq!(AssetKind::from_name("noext"), AssetKind::Image);
    }
}
