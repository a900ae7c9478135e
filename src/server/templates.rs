//! Page rendering.
//!
//! `render_page` is a pure function of the view state and the inputs the
//! handler gathered (resolved profile image, loaded resume). Each section is
//! rendered behind its own error boundary: a failing section becomes an
//! inline notice and the rest of the page still renders.

use askama::Template;
use base64::Engine;
use thiserror::Error;

use super::template_structs::{
    HomeTemplate, LayoutTemplate, NavItem, ProjectCard, ProjectsTemplate, ResumeTemplate,
    SectionErrorTemplate, SidebarTemplate,
};
use crate::assets::{DocumentState, ResolvedAsset};
use crate::models::{Page, Profile, Project, SiteContent};
use crate::utils::format_size;

/// Mount point for locally served assets.
pub const ASSET_MOUNT: &str = "/assets";

/// Projects per grid row.
const PROJECTS_PER_ROW: usize = 2;

/// Errors raised while rendering a section.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("{0} was not loaded")]
    MissingInput(&'static str),
}

/// The only UI state: which page is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub page: Page,
}

impl ViewState {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

/// Inputs gathered before rendering.
pub struct RenderInputs<'a> {
    pub content: &'a SiteContent,
    pub profile_image: &'a ResolvedAsset,
    /// Resume document; only needed for the resume page.
    pub resume: Option<&'a DocumentState>,
}

/// Render a complete page.
pub fn render_page(state: &ViewState, inputs: &RenderInputs<'_>) -> String {
    let profile = &inputs.content.profile;

    let sidebar_html = guarded("sidebar", render_sidebar(state, inputs));
    let main_html = match state.page {
        Page::Home => guarded("about me", render_home(profile)),
        Page::Projects => guarded("projects", render_projects(&inputs.content.projects)),
        Page::Resume => guarded("resume", render_resume(profile, inputs.resume)),
    };

    let layout = LayoutTemplate {
        title: &profile.page_title,
        page_icon: &profile.page_icon,
        sidebar_html: &sidebar_html,
        main_html: &main_html,
    };

    layout.render().unwrap_or_else(|e| {
        tracing::error!("Failed to render page layout: {}", e);
        format!(
            "<!DOCTYPE html><html><body>{}<main>{}</main></body></html>",
            sidebar_html, main_html
        )
    })
}

/// Render an inline error notice for a section.
pub fn section_error(section: &'static str, message: &str) -> String {
    SectionErrorTemplate { section, message }
        .render()
        .unwrap_or_else(|_| {
            format!(
                r#"<div class="notice notice-error section-error" role="alert">Couldn't render {}.</div>"#,
                section
            )
        })
}

fn guarded(section: &'static str, result: Result<String, RenderError>) -> String {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to render {} section: {}", section, e);
        section_error(section, &e.to_string())
    })
}

fn render_sidebar(state: &ViewState, inputs: &RenderInputs<'_>) -> Result<String, RenderError> {
    let profile = &inputs.content.profile;
    let nav = Page::ALL
        .into_iter()
        .map(|page| NavItem {
            label: page.label(),
            href: page.href(),
            active: page == state.page,
        })
        .collect();

    let template = SidebarTemplate {
        name: &profile.name,
        tagline: &profile.tagline,
        subtitle: &profile.subtitle,
        has_image: !inputs.profile_image.name.is_empty(),
        image_src: inputs.profile_image.public_href(ASSET_MOUNT),
        initials: profile.initials(),
        nav,
        contacts: &profile.contacts,
    };
    Ok(template.render()?)
}

fn render_home(profile: &Profile) -> Result<String, RenderError> {
    let template = HomeTemplate {
        name: &profile.name,
        intro: &profile.intro,
        experience: &profile.experience,
        skills: &profile.skills,
    };
    Ok(template.render()?)
}

fn render_projects(projects: &[Project]) -> Result<String, RenderError> {
    let rows: Vec<Vec<ProjectCard>> = projects
        .chunks(PROJECTS_PER_ROW)
        .map(|row| row.iter().map(ProjectCard::from).collect())
        .collect();

    let template = ProjectsTemplate {
        has_projects: !rows.is_empty(),
        rows,
    };
    Ok(template.render()?)
}

fn render_resume(profile: &Profile, resume: Option<&DocumentState>) -> Result<String, RenderError> {
    let document = resume.ok_or(RenderError::MissingInput("resume"))?;

    let template = match document {
        DocumentState::Loaded { bytes, .. } => ResumeTemplate {
            loaded: true,
            data_uri: pdf_data_uri(bytes),
            size_str: format_size(bytes.len() as u64),
            download_name: &profile.resume_download_name,
            error_message: String::new(),
            external_url: String::new(),
            highlights: &profile.highlights,
        },
        DocumentState::Unavailable {
            reason,
            external_url,
        } => ResumeTemplate {
            loaded: false,
            data_uri: String::new(),
            size_str: String::new(),
            download_name: &profile.resume_download_name,
            error_message: reason.clone(),
            external_url: external_url.clone(),
            highlights: &profile.highlights,
        },
    };
    Ok(template.render()?)
}

fn pdf_data_uri(bytes: &[u8]) -> String {
    format!(
        "data:application/pdf;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetKind, AssetSource};
    use std::path::PathBuf;

    fn remote_image() -> ResolvedAsset {
        ResolvedAsset {
            name: "profile_img_.jpg".to_string(),
            kind: AssetKind::Image,
            source: AssetSource::Remote(
                "https://raw.githubusercontent.com/Ahmer109/portfolio_web/main/assets/profile_img_.jpg"
                    .to_string(),
            ),
        }
    }

    fn render(page: Page, resume: Option<&DocumentState>) -> String {
        let content = SiteContent::default();
        let image = remote_image();
        render_page(
            &ViewState::new(page),
            &RenderInputs {
                content: &content,
                profile_image: &image,
                resume,
            },
        )
    }

    #[test]
    fn test_home_page() {
        let html = render(Page::Home, None);
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ahmer ALI | Portfolio</title>"));
        assert!(html.contains("Hello, I'm Ahmer ALI"));
        assert!(html.contains("Technical Skills"));
        assert!(html.contains("Gexton Education"));
        assert!(html.contains(
            "src=\"https://raw.githubusercontent.com/Ahmer109/portfolio_web/main/assets/profile_img_.jpg\""
        ));
    }

    #[test]
    fn test_active_nav_item() {
        let html = render(Page::Projects, None);
        assert!(html.contains(r#"<a href="/?page=projects" class="active" aria-current="page">Projects</a>"#));
        assert!(html.contains(r#"<a href="/">Home / About Me</a>"#));
    }

    #[test]
    fn test_projects_grid() {
        let html = render(Page::Projects, None);
        assert_eq!(html.matches("class=\"project-row\"").count(), 6);
        assert_eq!(html.matches("View on GitHub").count(), 12);
        assert!(html.contains("https://github.com/Ahmer109/internship_Task_12"));
    }

    #[test]
    fn test_resume_loaded() {
        let state = DocumentState::Loaded {
            bytes: b"%PDF-1.4".to_vec(),
            origin: AssetSource::Local(PathBuf::from("assets/cv.pdf")),
        };
        let html = render(Page::Resume, Some(&state));
        assert!(html.contains("data:application/pdf;base64,JVBERi0xLjQ="));
        assert!(html.contains("/resume/download"));
        assert!(html.contains("Key Highlights"));
        assert!(!html.contains("Couldn't load resume"));
    }

    #[test]
    fn test_resume_unavailable_shows_notice_and_link() {
        let state = DocumentState::Unavailable {
            reason: "Remote returned HTTP 404".to_string(),
            external_url: "https://example.com/cv.pdf".to_string(),
        };
        let html = render(Page::Resume, Some(&state));
        assert!(html.contains("Couldn't load resume: Remote returned HTTP 404"));
        assert!(html.contains(r#"href="https://example.com/cv.pdf""#));
        assert!(!html.contains("data:application/pdf"));
        // The rest of the page still renders
        assert!(html.contains("Key Highlights"));
        assert!(html.contains("Let's Connect"));
    }

    #[test]
    fn test_missing_resume_input_is_scoped_error() {
        let html = render(Page::Resume, None);
        assert!(html.contains("section-error"));
        assert!(html.contains("resume was not loaded"));
        assert!(html.contains("Navigation"));
    }

    #[test]
    fn test_placeholder_when_no_image_name() {
        let content = SiteContent::default();
        let image = ResolvedAsset {
            name: String::new(),
            kind: AssetKind::Image,
            source: AssetSource::Remote(String::new()),
        };
        let html = render_page(
            &ViewState::default(),
            &RenderInputs {
                content: &content,
                profile_image: &image,
                resume: None,
            },
        );
        assert!(html.contains("profile-img placeholder"));
        assert!(html.contains(">AA<"));
    }

    #[test]
    fn test_unreachable_image_falls_back_to_initials() {
        let html = render(Page::Home, None);
        assert!(html.contains(r#"onerror="this.hidden=true;this.nextElementSibling.hidden=false""#));
        assert!(html.contains(
            r#"<div class="profile-img placeholder image-fallback" aria-label="Ahmer ALI" hidden>AA</div>"#
        ));
    }

    #[test]
    fn test_content_is_escaped() {
        let mut content = SiteContent::default();
        content.profile.name = "<script>alert(1)</script>".to_string();
        let image = remote_image();
        let html = render_page(
            &ViewState::default(),
            &RenderInputs {
                content: &content,
                profile_image: &image,
                resume: None,
            },
        );
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
