//! Portfolio site library.
//!
//! - `assets`: local-first asset resolution with remote fallback, and the
//!   document loader used for the resume
//! - `models`: profile, project list and page selection
//! - `server`: axum router, handlers and askama views
//! - `cli`: command-line entry points

pub mod assets;
pub mod cli;
pub mod config;
pub mod http_client;
pub mod models;
pub mod server;
pub mod utils;
