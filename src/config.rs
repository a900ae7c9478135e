//! Configuration management for the portfolio site using the prefer crate.
//!
//! Settings are layered: built-in defaults, then a config file (explicit
//! `--config`, or discovered by prefer), then environment variables, then
//! command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assets::{RemoteTemplate, DEFAULT_REMOTE_HOST};

/// Environment variable whose presence marks a hosted deployment.
pub const DEFAULT_HOSTING_ENV_VAR: &str = "HOSTNAME";

/// Default remote fetch timeout in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default content file name, looked up in the content root.
pub const DEFAULT_SITE_FILE: &str = "site.toml";

/// How asset paths are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostingEnv {
    /// Hosted deployment: assets are relative to the working directory.
    Hosted,
    /// Local run: assets are relative to the configured content root.
    Local,
}

impl HostingEnv {
    /// Detect the hosting environment from the presence of `var`.
    pub fn detect(var: &str) -> Self {
        if !var.is_empty() && std::env::var_os(var).is_some() {
            Self::Hosted
        } else {
            Self::Local
        }
    }
}

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory the site's assets and content file live in.
    pub content_root: PathBuf,
    /// Site content file (None = `<content_root>/site.toml`).
    pub site_file: Option<PathBuf>,
    /// Environment variable used to detect a hosted deployment.
    pub hosting_env_var: String,
    /// Raw-content host for the remote fallback.
    pub remote_host: String,
    /// Repository owner for the remote fallback.
    pub remote_owner: String,
    /// Repository name for the remote fallback.
    pub remote_repo: String,
    /// Branch for the remote fallback.
    pub remote_branch: String,
    /// User agent for HTTP requests (None = built-in default).
    pub user_agent: Option<String>,
    /// Remote fetch timeout in seconds.
    pub fetch_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            content_root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            site_file: None,
            hosting_env_var: DEFAULT_HOSTING_ENV_VAR.to_string(),
            remote_host: DEFAULT_REMOTE_HOST.to_string(),
            remote_owner: "Ahmer109".to_string(),
            remote_repo: "portfolio_web".to_string(),
            remote_branch: "main".to_string(),
            user_agent: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Create settings with a custom content root.
    pub fn with_content_root(content_root: PathBuf) -> Self {
        Self {
            content_root,
            ..Default::default()
        }
    }

    /// Root directory the asset resolver probes from.
    pub fn asset_root(&self) -> PathBuf {
        match HostingEnv::detect(&self.hosting_env_var) {
            HostingEnv::Hosted => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            HostingEnv::Local => self.content_root.clone(),
        }
    }

    /// Path of the site content file.
    pub fn site_file_path(&self) -> PathBuf {
        self.site_file
            .clone()
            .unwrap_or_else(|| self.content_root.join(DEFAULT_SITE_FILE))
    }

    /// Template for remote fallback URLs.
    pub fn remote_template(&self) -> RemoteTemplate {
        RemoteTemplate {
            host: self.remote_host.clone(),
            owner: self.remote_owner.clone(),
            repo: self.remote_repo.clone(),
            branch: self.remote_branch.clone(),
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}

/// Remote fallback section of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Configuration file contents. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Content root (relative paths resolve from the config file's directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_root: Option<String>,
    /// Site content file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_file: Option<String>,
    /// Hosting detection variable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting_env_var: Option<String>,
    /// Remote fallback location.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Remote fetch timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout: Option<u64>,
    /// Path the config was loaded from.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    pub async fn load() -> Self {
        match prefer::load("portfolio").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("{}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => {
                // No config file found
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

        let mut config: Config = match ext {
            "json" => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Get the base directory for resolving relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref root) = self.content_root {
            settings.content_root = self.resolve_path(root, base_dir);
        }
        if let Some(ref site) = self.site_file {
            settings.site_file = Some(self.resolve_path(site, base_dir));
        }
        if let Some(ref var) = self.hosting_env_var {
            settings.hosting_env_var = var.clone();
        }
        if let Some(ref host) = self.remote.host {
            settings.remote_host = host.clone();
        }
        if let Some(ref owner) = self.remote.owner {
            settings.remote_owner = owner.clone();
        }
        if let Some(ref repo) = self.remote.repo {
            settings.remote_repo = repo.clone();
        }
        if let Some(ref branch) = self.remote.branch {
            settings.remote_branch = branch.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = Some(user_agent.clone());
        }
        if let Some(timeout) = self.fetch_timeout {
            settings.fetch_timeout = timeout;
        }
    }
}

/// Options for loading settings, taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file (skips discovery).
    pub config_path: Option<PathBuf>,
    /// Content root override.
    pub root: Option<PathBuf>,
    /// Site content file override.
    pub site: Option<PathBuf>,
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Apply `PORTFOLIO_*` environment overrides.
fn apply_env_overrides(settings: &mut Settings) {
    if let Some(root) = env_value("PORTFOLIO_ROOT") {
        tracing::debug!("Using PORTFOLIO_ROOT from environment: {}", root);
        settings.content_root = PathBuf::from(shellexpand::tilde(&root).as_ref());
    }
    if let Some(owner) = env_value("PORTFOLIO_REMOTE_OWNER") {
        settings.remote_owner = owner;
    }
    if let Some(repo) = env_value("PORTFOLIO_REMOTE_REPO") {
        settings.remote_repo = repo;
    }
    if let Some(timeout) = env_value("PORTFOLIO_FETCH_TIMEOUT") {
        match timeout.parse() {
            Ok(secs) => settings.fetch_timeout = secs,
            Err(_) => tracing::warn!("Ignoring invalid PORTFOLIO_FETCH_TIMEOUT: {}", timeout),
        }
    }
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
///
/// An explicit config file that cannot be read or parsed is an error;
/// a discovered one is only warned about.
pub async fn load_settings_with_options(options: LoadOptions) -> anyhow::Result<(Settings, Config)> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path)
            .await
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?,
        None => Config::load().await,
    };

    let mut settings = Settings::default();

    let base_dir = config
        .base_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    config.apply_to_settings(&mut settings, &base_dir);

    apply_env_overrides(&mut settings);

    // Command-line flags take highest precedence
    if let Some(root) = options.root {
        settings.content_root = root;
    }
    if let Some(site) = options.site {
        settings.site_file = Some(site);
    }

    Ok((settings, config))
}
