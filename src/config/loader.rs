//! Configuration structures and loading logic.

use crate::config::modes::{CleanMode, CollisionPolicy};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the platform config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub extensions: ExtensionsConfig,
}

/// Run options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Folder whose top-level files are cleaned.
    #[serde(default)]
    pub folder: Option<PathBuf>,

    /// Clean mode (normal, rename, convert, compress).
    #[serde(default)]
    pub mode: CleanMode,

    /// Policy for sanitized names that are already taken.
    #[serde(default)]
    pub collision: CollisionPolicy,

    /// Skip the confirmation prompt.
    #[serde(default)]
    pub assume_yes: bool,

    /// Whether to show spinners while external tools run.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            folder: None,
            mode: CleanMode::default(),
            collision: CollisionPolicy::default(),
            assume_yes: false,
            show_progress: true,
        }
    }
}

/// External tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// LibreOffice executable used for conversion.
    #[serde(default = "default_soffice")]
    pub soffice: String,

    /// Target format passed to `--convert-to`.
    #[serde(default = "default_convert_format")]
    pub convert_format: String,

    /// Ghostscript executable used for compression.
    #[serde(default = "default_gs")]
    pub gs: String,

    /// PDF compatibility level written by Ghostscript.
    #[serde(default = "default_compatibility_level")]
    pub compatibility_level: String,

    /// Optional Ghostscript `-dPDFSETTINGS` preset (e.g. `/ebook`).
    #[serde(default)]
    pub pdf_settings: Option<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            soffice: default_soffice(),
            convert_format: default_convert_format(),
            gs: default_gs(),
            compatibility_level: default_compatibility_level(),
            pdf_settings: None,
        }
    }
}

/// File extensions that select a processing step (without dot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionsConfig {
    /// Slide-deck formats converted to documents.
    #[serde(default = "default_presentation_extensions")]
    pub presentation: Vec<String>,

    /// Document formats that get compressed.
    #[serde(default = "default_document_extensions")]
    pub document: Vec<String>,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            presentation: default_presentation_extensions(),
            document: default_document_extensions(),
        }
    }
}

impl ExtensionsConfig {
    /// Check whether an extension denotes a presentation (case-insensitive).
    pub fn is_presentation(&self, ext: &str) -> bool {
        self.presentation.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Check whether an extension denotes a document (case-insensitive).
    pub fn is_document(&self, ext: &str) -> bool {
        self.document.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

fn default_true() -> bool {
    true
}

fn default_soffice() -> String {
    "soffice".to_string()
}

fn default_convert_format() -> String {
    "pdf".to_string()
}

fn default_gs() -> String {
    "gs".to_string()
}

fn default_compatibility_level() -> String {
    "1.4".to_string()
}

fn default_presentation_extensions() -> Vec<String> {
    vec!["pptx".to_string(), "ppt".to_string(), "odp".to_string()]
}

fn default_document_extensions() -> Vec<String> {
    vec!["pdf".to_string()]
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicit config file, or the platform default one if present.
    ///
    /// Falls back to built-in defaults when no explicit path is given and no
    /// file exists in the platform config directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Using configuration file {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Get the configured target folder.
    pub fn folder(&self) -> Result<&Path> {
        self.options
            .folder
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("folder (pass it as an argument)".to_string()))
    }
}

/// Platform-specific location of the configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folder-cleaner")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [options]
            folder = "/data/inbox"
            mode = "compress"
            collision = "suffix"

            [tools]
            pdf_settings = "/ebook"
            "#,
        )
        .unwrap();

        assert_eq!(config.options.folder, Some(PathBuf::from("/data/inbox")));
        assert_eq!(config.options.mode, CleanMode::Compress);
        assert_eq!(config.options.collision, CollisionPolicy::Suffix);
        assert!(config.options.show_progress);
        assert_eq!(config.tools.gs, "gs");
        assert_eq!(config.tools.compatibility_level, "1.4");
        assert_eq!(config.tools.pdf_settings.as_deref(), Some("/ebook"));
        assert_eq!(config.extensions.document, vec!["pdf".to_string()]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.options.mode, CleanMode::Normal);
        assert!(config.options.folder.is_none());
        assert!(config.extensions.is_presentation("PPTX"));
        assert!(config.extensions.is_document("Pdf"));
        assert!(!config.extensions.is_document("docx"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[options\nmode = ").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_folder_is_required() {
        let config = Config::default();
        assert!(matches!(config.folder(), Err(Error::MissingConfig(_))));
    }
}
