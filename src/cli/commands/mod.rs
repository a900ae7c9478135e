//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod render;
mod resolve;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::assets::AssetKind;
use crate::config::{load_settings_with_options, LoadOptions};
use crate::models::Page;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio site with local-first asset resolution")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content root holding assets/ and site.toml (overrides config file)
    #[arg(long, short = 'r', global = true)]
    root: Option<PathBuf>,

    /// Site content file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "PORTFOLIO_SITE")]
    site: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind: port, host, or host:port
        #[arg(default_value = "127.0.0.1:8501")]
        bind: String,
    },

    /// Show where an asset would be loaded from
    Resolve {
        /// Asset name, relative to the assets folder
        name: String,
        /// Asset kind (inferred from the extension if omitted)
        #[arg(short, long, value_enum)]
        kind: Option<AssetKind>,
    },

    /// Render a page to HTML without starting the server
    Render {
        /// Page to render
        #[arg(short, long, value_enum, default_value = "home")]
        page: Page,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        root: cli.root,
        site: cli.site,
    };
    let (settings, config) = load_settings_with_options(options).await?;

    if let Some(path) = config.source_path.as_ref() {
        tracing::debug!("Using config file {}", path.display());
    }

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&settings, &bind).await,
        Commands::Resolve { name, kind } => resolve::cmd_resolve(&settings, &name, kind),
        Commands::Render { page, output } => {
            render::cmd_render(&settings, page, output.as_deref()).await
        }
    }
}
