//! Shared utility functions.
//!
//! - `format`: Human-readable formatting (sizes, etc.)
//! - `mime`: Content types for served assets

mod format;
mod mime;

pub use format::format_size;
pub use mime::content_type_for;
