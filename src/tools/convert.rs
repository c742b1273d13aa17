//! Presentation to document conversion with LibreOffice.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::ToolsConfig;
use crate::error::{Error, Result};
use crate::fs::entry_exists;
use crate::tools::process::run_tool;
use crate::tools::Converter;

/// Converter backed by headless `soffice`.
#[derive(Debug, Clone)]
pub struct LibreOfficeConverter {
    program: String,
    format: String,
}

impl LibreOfficeConverter {
    /// Create a converter running `program` with `--convert-to <format>`.
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Create a converter from the tools section of the configuration.
    pub fn from_config(tools: &ToolsConfig) -> Self {
        Self::new(&tools.soffice, &tools.convert_format)
    }

    /// Path the converter writes for `input`: same directory and stem.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        input.with_extension(&self.format)
    }
}

#[async_trait]
impl Converter for LibreOfficeConverter {
    async fn convert(&self, input: &Path) -> Result<PathBuf> {
        let outdir = match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let output = self.output_path(input);

        let mut command = Command::new(&self.program);
        command
            .arg("--headless")
            .arg("--convert-to")
            .arg(&self.format)
            .arg("--outdir")
            .arg(outdir)
            .arg(input);

        run_tool(&self.program, &mut command).await?;

        if !entry_exists(&output).await {
            return Err(Error::ConversionOutputMissing(output));
        }

        Ok(output)
    }
}
