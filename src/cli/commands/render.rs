//! Offline page rendering command.

use std::path::Path;

use console::style;

use crate::config::Settings;
use crate::models::Page;
use crate::server::AppState;

/// Render one page to a file or stdout.
pub async fn cmd_render(settings: &Settings, page: Page, output: Option<&Path>) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let html = state.render(page).await;

    match output {
        Some(path) => {
            tokio::fs::write(path, &html).await?;
            eprintln!(
                "{} Rendered {} to {}",
                style("✓").green(),
                page,
                path.display()
            );
        }
        None => println!("{}", html),
    }

    Ok(())
}
