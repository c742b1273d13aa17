//! Per-file outcomes and run statistics.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Why an entry was not processed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Subdirectories are never touched or descended into.
    Directory,
    /// The entry disappeared between listing and processing.
    NotFound,
}

/// Terminal state of one file in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FileOutcome {
    Skipped { reason: SkipReason },
    /// Sanitized (possibly renamed) but no conversion or compression applies.
    Untouched,
    Converted { output: String },
    Compressed { bytes_before: u64, bytes_after: u64 },
    RenameFailed { error: String },
    ConversionFailed { error: String },
    CompressionFailed { error: String },
}

impl FileOutcome {
    /// Whether this outcome is one of the failure states.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            FileOutcome::RenameFailed { .. }
                | FileOutcome::ConversionFailed { .. }
                | FileOutcome::CompressionFailed { .. }
        )
    }
}

/// What happened to a single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// 1 for the initial listing, 2 for files created by conversion.
    pub pass: u8,
    /// Name as listed.
    pub original: String,
    /// Name after sanitizing (equal to `original` if nothing changed).
    pub name: String,
    pub renamed: bool,
    pub outcome: FileOutcome,
}

impl FileRecord {
    /// Start a record for `name` seen in `pass`.
    pub fn new(pass: u8, name: &str) -> Self {
        Self {
            pass,
            original: name.to_string(),
            name: name.to_string(),
            renamed: false,
            outcome: FileOutcome::Untouched,
        }
    }

    /// Record that the file now lives under `name`.
    pub fn rename_to(&mut self, name: String) {
        self.renamed = name != self.original;
        self.name = name;
    }

    /// Close the record with its terminal state.
    pub fn finish(mut self, outcome: FileOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

/// Counters accumulated over a run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    pub files_seen: u64,
    pub directories_skipped: u64,
    pub renamed: u64,
    pub converted: u64,
    pub compressed: u64,
    pub untouched: u64,
    pub rename_failures: u64,
    pub conversion_failures: u64,
    pub compression_failures: u64,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

impl CleanStats {
    /// Add one record to the counters.
    pub fn add(&mut self, record: &FileRecord) {
        if record.renamed {
            self.renamed += 1;
        }

        match &record.outcome {
            FileOutcome::Skipped {
                reason: SkipReason::Directory,
            } => {
                self.directories_skipped += 1;
                return;
            }
            FileOutcome::Skipped { .. } => return,
            FileOutcome::Untouched => self.untouched += 1,
            FileOutcome::Converted { .. } => self.converted += 1,
            FileOutcome::Compressed {
                bytes_before,
                bytes_after,
            } => {
                self.compressed += 1;
                self.bytes_before += bytes_before;
                self.bytes_after += bytes_after;
            }
            FileOutcome::RenameFailed { .. } => self.rename_failures += 1,
            FileOutcome::ConversionFailed { .. } => self.conversion_failures += 1,
            FileOutcome::CompressionFailed { .. } => self.compression_failures += 1,
        }

        self.files_seen += 1;
    }

    /// Total number of per-file failures.
    pub fn failures(&self) -> u64 {
        self.rename_failures + self.conversion_failures + self.compression_failures
    }

    /// Bytes saved by compression (zero if files grew).
    pub fn bytes_saved(&self) -> u64 {
        self.bytes_before.saturating_sub(self.bytes_after)
    }
}

/// Full result of cleaning one folder.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub folder: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub records: Vec<FileRecord>,
    pub stats: CleanStats,
}

impl CleanReport {
    /// Start a report for `folder`.
    pub fn new(folder: &Path) -> Self {
        Self {
            folder: folder.to_path_buf(),
            started_at: Utc::now(),
            finished_at: None,
            records: Vec::new(),
            stats: CleanStats::default(),
        }
    }

    /// Append a record and update the counters.
    pub fn push(&mut self, record: FileRecord) {
        self.stats.add(&record);
        self.records.push(record);
    }

    /// Mark the run as complete.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Records with a failure outcome.
    pub fn failures(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| r.outcome.is_failure())
    }

    /// Find the record for the file currently called `name` in `pass`.
    pub fn record(&self, pass: u8, name: &str) -> Option<&FileRecord> {
        self.records
            .iter()
            .find(|r| r.pass == pass && (r.name == name || r.original == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counting() {
        let mut report = CleanReport::new(Path::new("/inbox"));

        let mut renamed = FileRecord::new(1, "Report Q1.pptx");
        renamed.rename_to("Report_Q1.pptx".to_string());
        report.push(renamed.finish(FileOutcome::Converted {
            output: "Report_Q1.pdf".to_string(),
        }));
        report.push(FileRecord::new(1, "archive").finish(FileOutcome::Skipped {
            reason: SkipReason::Directory,
        }));
        report.push(FileRecord::new(1, "notes.pdf").finish(FileOutcome::Compressed {
            bytes_before: 1000,
            bytes_after: 600,
        }));
        report.push(FileRecord::new(1, "bad.pdf").finish(FileOutcome::CompressionFailed {
            error: "gs exited with status: 1".to_string(),
        }));
        report.push(FileRecord::new(1, "readme.txt").finish(FileOutcome::Untouched));

        let stats = &report.stats;
        assert_eq!(stats.files_seen, 4);
        assert_eq!(stats.directories_skipped, 1);
        assert_eq!(stats.renamed, 1);
        assert_eq!(stats.converted, 1);
        assert_eq!(stats.compressed, 1);
        assert_eq!(stats.untouched, 1);
        assert_eq!(stats.failures(), 1);
        assert_eq!(stats.bytes_saved(), 400);
        assert_eq!(report.failures().count(), 1);
        assert!(report.record(1, "Report Q1.pptx").unwrap().renamed);
        assert!(report.record(2, "Report_Q1.pdf").is_none());
    }

    #[test]
    fn test_bytes_saved_never_negative() {
        let stats = CleanStats {
            bytes_before: 10,
            bytes_after: 20,
            ..Default::default()
        };
        assert_eq!(stats.bytes_saved(), 0);
    }

    #[test]
    fn test_outcome_serializes_with_state_tag() {
        let json = serde_json::to_value(FileOutcome::Skipped {
            reason: SkipReason::Directory,
        })
        .unwrap();
        assert_eq!(json["state"], "skipped");
        assert_eq!(json["reason"], "directory");
    }
}
