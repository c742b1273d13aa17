//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{CleanMode, CollisionPolicy, Config};

/// Folder cleaner CLI.
#[derive(Parser, Debug)]
#[command(
    name = "folder-cleaner",
    version,
    about = "Sanitize filenames, convert presentations and compress PDFs in a folder",
    long_about = "Cleans the top level of a folder for archiving and sharing.\n\n\
                  Filenames lose whitespace, umlauts and reserved symbols, presentations are\n\
                  converted to PDF with LibreOffice and PDFs are compressed with Ghostscript.\n\
                  Subdirectories are left alone."
)]
pub struct Args {
    /// Folder to clean (only its immediate children are processed).
    pub folder: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Which steps to run after sanitizing names.
    #[arg(long, value_enum)]
    pub mode: Option<CleanModeArg>,

    /// What to do when a sanitized name is already taken.
    #[arg(long, value_enum)]
    pub collision: Option<CollisionArg>,

    /// Don't ask for confirmation.
    #[arg(short, long)]
    pub yes: bool,

    /// Only print warnings, errors and the final statistics.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run report as JSON.
    #[arg(long)]
    pub json: bool,

    /// LibreOffice executable.
    #[arg(long, env = "FOLDER_CLEANER_SOFFICE")]
    pub soffice: Option<String>,

    /// Ghostscript executable.
    #[arg(long, env = "FOLDER_CLEANER_GS")]
    pub gs: Option<String>,

    /// Ghostscript PDFSETTINGS preset (e.g. /ebook, /printer).
    #[arg(long)]
    pub pdf_settings: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI clean mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CleanModeArg {
    /// Convert presentations and compress documents.
    Normal,
    /// Only sanitize filenames.
    Rename,
    /// Sanitize and convert, no compression.
    Convert,
    /// Sanitize and compress, no conversion.
    Compress,
}

impl From<CleanModeArg> for CleanMode {
    fn from(arg: CleanModeArg) -> Self {
        match arg {
            CleanModeArg::Normal => CleanMode::Normal,
            CleanModeArg::Rename => CleanMode::Rename,
            CleanModeArg::Convert => CleanMode::Convert,
            CleanModeArg::Compress => CleanMode::Compress,
        }
    }
}

/// CLI collision policy argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CollisionArg {
    /// Report the file and leave it alone.
    Skip,
    /// Append a number to the new name.
    Suffix,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Skip => CollisionPolicy::Skip,
            CollisionArg::Suffix => CollisionPolicy::Suffix,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(folder) = &self.folder {
            config.options.folder = Some(folder.clone());
        }

        if let Some(mode) = self.mode {
            config.options.mode = mode.into();
        }

        if let Some(collision) = self.collision {
            config.options.collision = collision.into();
        }

        if let Some(soffice) = &self.soffice {
            config.tools.soffice = soffice.clone();
        }

        if let Some(gs) = &self.gs {
            config.tools.gs = gs.clone();
        }

        if let Some(preset) = &self.pdf_settings {
            config.tools.pdf_settings = Some(preset.clone());
        }

        // Boolean flags (only override if set to non-default)
        if self.yes {
            config.options.assume_yes = true;
        }

        if self.quiet || self.json {
            config.options.show_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["folder-cleaner", "inbox"]).unwrap();
        assert_eq!(args.folder, Some(PathBuf::from("inbox")));
        assert!(!args.yes);
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_merge_overrides() {
        let args = Args::try_parse_from([
            "folder-cleaner",
            "/data/inbox",
            "--mode",
            "compress",
            "--collision",
            "suffix",
            "--gs",
            "/usr/local/bin/gs",
            "--pdf-settings",
            "/ebook",
            "--yes",
            "--quiet",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.options.folder, Some(PathBuf::from("/data/inbox")));
        assert_eq!(config.options.mode, CleanMode::Compress);
        assert_eq!(config.options.collision, CollisionPolicy::Suffix);
        assert_eq!(config.tools.gs, "/usr/local/bin/gs");
        assert_eq!(config.tools.pdf_settings.as_deref(), Some("/ebook"));
        assert!(config.options.assume_yes);
        assert!(!config.options.show_progress);
    }

    #[test]
    fn test_merge_keeps_file_values() {
        let args = Args::try_parse_from(["folder-cleaner"]).unwrap();

        let mut config = Config::default();
        config.options.folder = Some(PathBuf::from("/from/config"));
        config.options.mode = CleanMode::Rename;
        args.merge_into_config(&mut config);

        assert_eq!(config.options.folder, Some(PathBuf::from("/from/config")));
        assert_eq!(config.options.mode, CleanMode::Rename);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Args::try_parse_from(["folder-cleaner", "--mode", "shred"]).is_err());
    }
}
