//! Web server command.

use console::style;

use crate::assets::AssetKind;
use crate::config::Settings;
use crate::server::AppState;

/// Default port when the bind address names only a host.
const DEFAULT_PORT: u16 = 8501;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    let state = AppState::new(settings)?;

    println!(
        "{} Serving assets from {}",
        style("→").cyan(),
        state.resolver.root().display()
    );
    let image = state
        .resolver
        .resolve(&state.content.profile.profile_image, AssetKind::Image);
    if image.source.is_local() {
        println!("  {} Profile image: {}", style("✓").green(), image.source);
    } else {
        println!(
            "  {} Profile image not found locally, using {}",
            style("!").yellow(),
            image.source
        );
    }

    println!(
        "{} Starting portfolio server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(state, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> 127.0.0.1:8080
/// - Just a host: "0.0.0.0" -> 0.0.0.0:8501
/// - Host and port: "0.0.0.0:8080" -> 0.0.0.0:8080
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    if bind.is_empty() {
        anyhow::bail!("Bind address cannot be empty");
    }

    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    Ok((bind.to_string(), DEFAULT_PORT))
}
