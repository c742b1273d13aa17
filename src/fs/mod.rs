//! Filesystem module.
//!
//! Provides:
//! - Pure filename sanitization
//! - Directory listing and rename actions

pub mod naming;
pub mod paths;

pub use naming::{extension_lowercase, needs_sanitizing, numbered_filename, sanitize_filename};
pub use paths::{
    commit_temp, entry_exists, list_entries, make_unique_filename, rename_sanitized,
    resolve_document, temp_sibling,
};
