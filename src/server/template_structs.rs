//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::models::{ContactLink, ExperienceItem, Highlight, Project, SkillGroup};

/// Helper struct for sidebar navigation entries.
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Helper struct for a project card.
pub struct ProjectCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub tech: String,
    pub repository: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            icon: project.icon.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            tech: project.tech_line(),
            repository: project.repository.clone(),
        }
    }
}

/// Full page shell. Section bodies are pre-rendered.
#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate<'a> {
    pub title: &'a str,
    pub page_icon: &'a str,
    pub sidebar_html: &'a str,
    pub main_html: &'a str,
}

/// Sidebar with profile, navigation and contacts.
#[derive(Template)]
#[template(path = "sidebar.html")]
pub struct SidebarTemplate<'a> {
    pub name: &'a str,
    pub tagline: &'a str,
    pub subtitle: &'a str,
    pub has_image: bool,
    pub image_src: String,
    pub initials: String,
    pub nav: Vec<NavItem>,
    pub contacts: &'a [ContactLink],
}

/// Home / About Me page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub name: &'a str,
    pub intro: &'a str,
    pub experience: &'a [ExperienceItem],
    pub skills: &'a [SkillGroup],
}

/// Projects page, two cards per row.
#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub rows: Vec<Vec<ProjectCard>>,
    pub has_projects: bool,
}

/// Resume page with inline viewer or degraded notice.
#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumeTemplate<'a> {
    pub loaded: bool,
    pub data_uri: String,
    pub size_str: String,
    pub download_name: &'a str,
    pub error_message: String,
    pub external_url: String,
    pub highlights: &'a [Highlight],
}

/// Inline error scoped to one section.
#[derive(Template)]
#[template(path = "section_error.html")]
pub struct SectionErrorTemplate<'a> {
    pub section: &'a str,
    pub message: &'a str,
}
