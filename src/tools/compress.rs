//! PDF compression with Ghostscript.

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::ToolsConfig;
use crate::error::Result;
use crate::fs::{commit_temp, resolve_document, temp_sibling};
use crate::tools::process::run_tool;
use crate::tools::Compressor;

/// Compressor that rewrites PDFs through Ghostscript's `pdfwrite` device.
///
/// Output goes to a hidden sibling first and only replaces the original once
/// Ghostscript has succeeded, so an interrupted run never truncates a file.
#[derive(Debug, Clone)]
pub struct GhostscriptCompressor {
    program: String,
    compatibility_level: String,
    pdf_settings: Option<String>,
}

impl GhostscriptCompressor {
    /// Create a compressor running `program` at the given PDF compatibility level.
    pub fn new(program: impl Into<String>, compatibility_level: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            compatibility_level: compatibility_level.into(),
            pdf_settings: None,
        }
    }

    /// Use a `-dPDFSETTINGS` preset such as `/ebook` or `/printer`.
    pub fn with_pdf_settings(mut self, preset: impl Into<String>) -> Self {
        self.pdf_settings = Some(preset.into());
        self
    }

    /// Create a compressor from the tools section of the configuration.
    pub fn from_config(tools: &ToolsConfig) -> Self {
        let compressor = Self::new(&tools.gs, &tools.compatibility_level);
        match &tools.pdf_settings {
            Some(preset) => compressor.with_pdf_settings(preset),
            None => compressor,
        }
    }

    /// Arguments for rewriting `input` into `output`.
    fn arguments(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-sDEVICE=pdfwrite".into(),
            format!("-dCompatibilityLevel={}", self.compatibility_level).into(),
        ];

        if let Some(preset) = &self.pdf_settings {
            args.push(format!("-dPDFSETTINGS={}", preset).into());
        }

        for flag in ["-dNOPAUSE", "-dQUIET", "-dBATCH"] {
            args.push(flag.into());
        }

        let mut output_arg = OsString::from("-sOutputFile=");
        output_arg.push(output);
        args.push(output_arg);
        args.push(input.into());

        args
    }
}

#[async_trait]
impl Compressor for GhostscriptCompressor {
    async fn compress(&self, file: &Path) -> Result<()> {
        let file = resolve_document(file).await?;
        let temp = temp_sibling(&file);

        let mut command = Command::new(&self.program);
        command.args(self.arguments(&file, &temp));

        let result = match run_tool(&self.program, &mut command).await {
            Ok(()) => commit_temp(&temp, &file).await,
            Err(e) => Err(e),
        };

        if result.is_err() {
            let _ = tokio::fs::remove_file(&temp).await;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn leftover_temp_files(dir: &Path) -> usize {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count()
    }

    #[test]
    fn test_arguments() {
        let compressor = GhostscriptCompressor::new("gs", "1.4");
        let args = compressor.arguments(Path::new("/in/a.pdf"), Path::new("/in/.a.pdf.x.tmp"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();

        assert_eq!(
            args,
            vec![
                "-sDEVICE=pdfwrite",
                "-dCompatibilityLevel=1.4",
                "-dNOPAUSE",
                "-dQUIET",
                "-dBATCH",
                "-sOutputFile=/in/.a.pdf.x.tmp",
                "/in/a.pdf",
            ]
        );
    }

    #[test]
    fn test_arguments_with_preset() {
        let mut tools = ToolsConfig::default();
        tools.pdf_settings = Some("/ebook".to_string());
        let compressor = GhostscriptCompressor::from_config(&tools);

        let args = compressor.arguments(Path::new("a.pdf"), Path::new("b.tmp"));
        assert!(args.iter().any(|a| a == "-dPDFSETTINGS=/ebook"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_leaves_original_untouched() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.pdf");
        std::fs::write(&file, b"%PDF-1.7 original bytes").unwrap();

        let compressor = GhostscriptCompressor::new("false", "1.4");
        let err = compressor.compress(&file).await.unwrap_err();

        assert!(matches!(err, Error::ToolFailed { .. }));
        assert_eq!(std::fs::read(&file).unwrap(), b"%PDF-1.7 original bytes");
        assert_eq!(leftover_temp_files(dir.path()), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_success_without_output_leaves_original_untouched() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.pdf");
        std::fs::write(&file, b"%PDF-1.7 original bytes").unwrap();

        let compressor = GhostscriptCompressor::new("true", "1.4");
        let err = compressor.compress(&file).await.unwrap_err();

        assert!(matches!(err, Error::Compression(_)));
        assert_eq!(std::fs::read(&file).unwrap(), b"%PDF-1.7 original bytes");
        assert_eq!(leftover_temp_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_missing_tool() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.pdf");
        std::fs::write(&file, b"%PDF").unwrap();

        let compressor = GhostscriptCompressor::new("folder-cleaner-no-such-gs", "1.4");
        assert!(matches!(
            compressor.compress(&file).await,
            Err(Error::ToolNotFound(_))
        ));
        assert_eq!(std::fs::read(&file).unwrap(), b"%PDF");
    }
}
