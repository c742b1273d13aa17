//! Folder Cleaner - normalize a folder of documents for archiving and sharing.
//!
//! The top level of a folder is processed file by file:
//!
//! - Filenames are sanitized (whitespace, umlauts and reserved symbols)
//! - Presentations are converted to PDF with LibreOffice
//! - PDFs are compressed in place with Ghostscript
//!
//! PDFs produced by conversion are picked up by one follow-up pass so they
//! get compressed as well. Subdirectories are never touched.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use folder_cleaner::{Cleaner, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let cleaner = Cleaner::from_config(&config);
//!     let report = cleaner.run(Path::new("inbox")).await?;
//!
//!     println!("{} files compressed", report.stats.compressed);
//!     Ok(())
//! }
//! ```

pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod tools;

// Re-exports for convenience
pub use clean::{CleanReport, CleanStats, Cleaner, FileOutcome, FileRecord};
pub use config::{CleanMode, CollisionPolicy, Config};
pub use error::{Error, Result};
pub use fs::sanitize_filename;
pub use tools::{Compressor, Converter, GhostscriptCompressor, LibreOfficeConverter};
