//! Folder cleaning module.
//!
//! This module provides:
//! - The sanitize / convert / compress pipeline
//! - Per-file outcomes and run statistics

pub mod pipeline;
pub mod state;

pub use pipeline::Cleaner;
pub use state::{CleanReport, CleanStats, FileOutcome, FileRecord, SkipReason};
