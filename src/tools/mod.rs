//! External tool capabilities.
//!
//! The cleaning pipeline only talks to the [`Converter`] and [`Compressor`]
//! traits. The shipped implementations shell out to LibreOffice and
//! Ghostscript; tests substitute in-process fakes.

pub mod compress;
pub mod convert;
pub mod probe;
pub mod process;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;

pub use compress::GhostscriptCompressor;
pub use convert::LibreOfficeConverter;
pub use probe::{ensure_tools_available, find_program};

/// Converts a presentation into a document next to it.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Convert `input` and return the path of the produced document.
    async fn convert(&self, input: &Path) -> Result<PathBuf>;
}

/// Rewrites a document in place to reduce its size.
#[async_trait]
pub trait Compressor: Send + Sync {
    /// Compress `file`. On error the file must be left unchanged.
    async fn compress(&self, file: &Path) -> Result<()>;
}
