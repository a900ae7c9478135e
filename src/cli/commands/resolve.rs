//! Asset resolution command.

use console::style;

use crate::assets::{AssetKind, AssetResolver, AssetSource};
use crate::config::Settings;

/// Print where an asset would be loaded from, and every path probed.
pub fn cmd_resolve(settings: &Settings, name: &str, kind: Option<AssetKind>) -> anyhow::Result<()> {
    let resolver = AssetResolver::new(settings.asset_root(), settings.remote_template());
    let kind = kind.unwrap_or_else(|| AssetKind::from_name(name));

    let candidates = resolver.candidates(name);
    if candidates.is_empty() {
        println!(
            "{} {} is not a plain relative name; only the remote URL applies",
            style("!").yellow(),
            name
        );
    }
    for path in &candidates {
        let marker = if path.is_file() {
            style("✓").green()
        } else {
            style("✗").dim()
        };
        println!("  {} {}", marker, path.display());
    }

    let resolved = resolver.resolve(name, kind);
    match &resolved.source {
        AssetSource::Local(path) => println!(
            "{} {} ({}) -> {}",
            style("→").cyan(),
            name,
            kind,
            path.display()
        ),
        AssetSource::Remote(url) => println!(
            "{} {} ({}) -> {} {}",
            style("→").cyan(),
            name,
            kind,
            url,
            style("(remote)").yellow()
        ),
    }

    Ok(())
}
