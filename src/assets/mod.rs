//! Asset resolution and loading.
//!
//! The resolver turns a logical asset name into a local path or a remote URL.
//! The loader reads documents through that resolution and reports a degraded
//! state instead of an error when the bytes cannot be obtained.

mod error;
mod loader;
mod resolver;

pub use error::AssetError;
pub use loader::{DocumentLoader, DocumentState, HttpFetcher, RemoteFetcher};
pub use resolver::{
    AssetKind, AssetResolver, AssetSource, RemoteTemplate, ResolvedAsset, ASSETS_DIR,
    DEFAULT_REMOTE_HOST,
};
