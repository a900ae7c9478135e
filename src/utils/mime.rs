//! Content type lookup for served assets.

use crate::assets::AssetKind;

/// Content type for an asset name, falling back to the kind's default when
/// the extension is unknown.
pub fn content_type_for(name: &str, kind: AssetKind) -> String {
    match mime_guess::from_path(name).first() {
        Some(mime) => mime.to_string(),
        None => kind.fallback_content_type().to_string(),
    }
}
