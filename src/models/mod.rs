//! Data models for the portfolio site.

mod content;
mod page;
mod profile;
mod project;

pub use content::{ContentError, SiteContent};
pub use page::Page;
pub use profile::{ContactLink, ExperienceItem, Highlight, Profile, SkillGroup};
pub use project::{default_projects, Project};
