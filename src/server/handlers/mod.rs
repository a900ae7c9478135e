//! HTTP request handlers for the web server.

mod files;
mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use files::{download_resume, serve_asset};
pub use pages::{home_page, projects_page, resume_page, show_page};
pub use static_files::{healthz, serve_css};
