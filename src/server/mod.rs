//! Web server for the portfolio site.
//!
//! Every request is one render: the page selection is parsed into a
//! [`ViewState`], the profile image is resolved and (for the resume page)
//! the resume is loaded, then the pure renderer produces the HTML.

mod assets;
mod handlers;
mod routes;
mod template_structs;
mod templates;

pub use routes::create_router;
pub use templates::{render_page, section_error, RenderError, RenderInputs, ViewState, ASSET_MOUNT};

use std::net::SocketAddr;
use std::sync::Arc;

use crate::assets::{
    AssetKind, AssetResolver, DocumentLoader, HttpFetcher, RemoteFetcher,
};
use crate::config::Settings;
use crate::http_client::HttpClient;
use crate::models::{Page, SiteContent};

/// Shared state for the web server. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub content: Arc<SiteContent>,
    pub resolver: Arc<AssetResolver>,
    pub loader: Arc<DocumentLoader>,
}

impl AppState {
    /// Build state from settings: load site content and set up the HTTP fallback.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let content = SiteContent::load(&settings.site_file_path())?;
        let client =
            HttpClient::with_user_agent(settings.fetch_timeout(), settings.user_agent.as_deref())?;

        Ok(Self::from_parts(
            settings.clone(),
            content,
            Arc::new(HttpFetcher::new(client)),
        ))
    }

    /// Build state from already-loaded parts.
    pub fn from_parts(
        settings: Settings,
        content: SiteContent,
        fetcher: Arc<dyn RemoteFetcher>,
    ) -> Self {
        let resolver = Arc::new(AssetResolver::new(
            settings.asset_root(),
            settings.remote_template(),
        ));
        let loader = DocumentLoader::new(resolver.clone(), fetcher, settings.fetch_timeout());

        Self {
            settings: Arc::new(settings),
            content: Arc::new(content),
            resolver,
            loader: Arc::new(loader),
        }
    }

    /// Render one page, gathering the assets it needs first.
    pub async fn render(&self, page: Page) -> String {
        let view = ViewState::new(page);
        let profile = &self.content.profile;

        let profile_image = self.resolver.resolve(&profile.profile_image, AssetKind::Image);
        let resume = match page {
            Page::Resume => Some(self.loader.load_document(&profile.resume).await),
            _ => None,
        };

        render_page(
            &view,
            &RenderInputs {
                content: &self.content,
                profile_image: &profile_image,
                resume: resume.as_ref(),
            },
        )
    }
}

/// Start the web server.
pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
