//! The cleaning pipeline: sanitize, then convert or compress.

use std::path::Path;

use indicatif::ProgressBar;

use crate::clean::state::{CleanReport, FileOutcome, FileRecord, SkipReason};
use crate::config::{CleanMode, CollisionPolicy, Config, ExtensionsConfig};
use crate::error::Result;
use crate::fs::{entry_exists, extension_lowercase, list_entries, rename_sanitized};
use crate::output::create_spinner;
use crate::tools::{Compressor, Converter, GhostscriptCompressor, LibreOfficeConverter};

/// Pass number of the initial directory listing.
const FIRST_PASS: u8 = 1;

/// Pass number for files created by conversion. There is no third pass.
const FOLLOW_UP_PASS: u8 = 2;

/// Drives one cleaning run over the top level of a folder.
pub struct Cleaner<C, P> {
    converter: C,
    compressor: P,
    mode: CleanMode,
    collision: CollisionPolicy,
    extensions: ExtensionsConfig,
    show_progress: bool,
}

impl Cleaner<LibreOfficeConverter, GhostscriptCompressor> {
    /// Create a cleaner backed by LibreOffice and Ghostscript.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config,
            LibreOfficeConverter::from_config(&config.tools),
            GhostscriptCompressor::from_config(&config.tools),
        )
    }
}

impl<C: Converter, P: Compressor> Cleaner<C, P> {
    /// Create a cleaner with explicit tool implementations.
    pub fn new(config: &Config, converter: C, compressor: P) -> Self {
        Self {
            converter,
            compressor,
            mode: config.options.mode,
            collision: config.options.collision,
            extensions: config.extensions.clone(),
            show_progress: config.options.show_progress,
        }
    }

    /// The converter in use.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// The compressor in use.
    pub fn compressor(&self) -> &P {
        &self.compressor
    }

    /// List `folder` and clean every entry in it.
    pub async fn run(&self, folder: &Path) -> Result<CleanReport> {
        let entries = list_entries(folder).await?;
        Ok(self.clean_entries(folder, &entries).await)
    }

    /// Clean the given top-level entries of `folder`.
    ///
    /// Documents produced by conversion are swept by exactly one follow-up
    /// pass, so freshly converted files get compressed too.
    pub async fn clean_entries(&self, folder: &Path, entries: &[String]) -> CleanReport {
        let mut report = CleanReport::new(folder);

        tracing::info!("Cleaning {} entries in {}", entries.len(), folder.display());
        let created = self.clean_pass(folder, entries, FIRST_PASS, &mut report).await;

        if !created.is_empty() {
            tracing::info!("Processing {} newly created file(s)", created.len());
            let ignored = self
                .clean_pass(folder, &created, FOLLOW_UP_PASS, &mut report)
                .await;

            if !ignored.is_empty() {
                tracing::warn!(
                    "Not processing files created in the follow-up pass: {}",
                    ignored.join(", ")
                );
            }
        }

        report.finish();
        report
    }

    /// Run one pass and return the names of files created by conversion.
    ///
    /// Each name appears once, even when several inputs convert to the same
    /// output (`deck.ppt` and `deck.pptx` both yield `deck.pdf`).
    async fn clean_pass(
        &self,
        folder: &Path,
        names: &[String],
        pass: u8,
        report: &mut CleanReport,
    ) -> Vec<String> {
        let mut created = Vec::new();

        for name in names {
            let record = self.clean_file(folder, name, pass).await;
            if let FileOutcome::Converted { output } = &record.outcome {
                if !created.contains(output) {
                    created.push(output.clone());
                }
            }
            report.push(record);
        }

        created
    }

    /// Sanitize one entry, then convert or compress it by extension.
    async fn clean_file(&self, folder: &Path, name: &str, pass: u8) -> FileRecord {
        let mut record = FileRecord::new(pass, name);
        let path = folder.join(name);

        // Follows symlinks; a dangling link still counts as an entry.
        let metadata = tokio::fs::metadata(&path).await;
        if metadata.is_err() && !entry_exists(&path).await {
            tracing::warn!("Skipping vanished entry: {}", name);
            return record.finish(FileOutcome::Skipped {
                reason: SkipReason::NotFound,
            });
        }

        if metadata.map(|m| m.is_dir()).unwrap_or(false) {
            tracing::debug!("Skipping directory: {}", name);
            return record.finish(FileOutcome::Skipped {
                reason: SkipReason::Directory,
            });
        }

        let sanitized = match rename_sanitized(folder, name, self.collision).await {
            Ok(sanitized) => sanitized,
            Err(e) => {
                tracing::warn!("Could not rename {}: {}", name, e);
                return record.finish(FileOutcome::RenameFailed {
                    error: e.to_string(),
                });
            }
        };

        if sanitized != name {
            tracing::info!("Renamed: {} -> {}", name, sanitized);
        }
        record.rename_to(sanitized);

        let path = folder.join(&record.name);
        let outcome = match extension_lowercase(&record.name) {
            Some(ext) if self.extensions.is_presentation(&ext) && self.mode.converts() => {
                self.convert(&path, &record.name).await
            }
            Some(ext) if self.extensions.is_document(&ext) && self.mode.compresses() => {
                self.compress(&path, &record.name).await
            }
            _ => FileOutcome::Untouched,
        };

        record.finish(outcome)
    }

    async fn convert(&self, path: &Path, name: &str) -> FileOutcome {
        let spinner = self.spinner(format!("Converting {}", name));
        let result = self.converter.convert(path).await;
        spinner.finish_and_clear();

        let output = match result {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Error converting {}: {}", name, e);
                return FileOutcome::ConversionFailed {
                    error: e.to_string(),
                };
            }
        };

        match output.file_name().and_then(|n| n.to_str()) {
            Some(output) => {
                tracing::info!("Converted: {} -> {}", name, output);
                FileOutcome::Converted {
                    output: output.to_string(),
                }
            }
            None => FileOutcome::ConversionFailed {
                error: format!("unusable output path {}", output.display()),
            },
        }
    }

    async fn compress(&self, path: &Path, name: &str) -> FileOutcome {
        let bytes_before = file_size(path).await;

        let spinner = self.spinner(format!("Compressing {}", name));
        let result = self.compressor.compress(path).await;
        spinner.finish_and_clear();

        match result {
            Ok(()) => {
                let bytes_after = file_size(path).await;
                tracing::info!(
                    "Compressed: {} ({} -> {} bytes)",
                    name,
                    bytes_before,
                    bytes_after
                );
                FileOutcome::Compressed {
                    bytes_before,
                    bytes_after,
                }
            }
            Err(e) => {
                tracing::warn!("Error compressing {}: {}", name, e);
                FileOutcome::CompressionFailed {
                    error: e.to_string(),
                }
            }
        }
    }

    fn spinner(&self, message: String) -> ProgressBar {
        if self.show_progress {
            create_spinner(&message)
        } else {
            ProgressBar::hidden()
        }
    }
}

async fn file_size(path: &Path) -> u64 {
    tokio::fs::metadata(path).await.map(|m| m.len()).unwrap_or(0)
}
