//! Configuration validation logic.

use std::path::Path;
use std::sync::LazyLock;

use crate::config::loader::{Config, ExtensionsConfig, ToolsConfig};
use crate::error::{Error, Result};
use regex::Regex;

/// Ghostscript compatibility levels look like `1.4` or `2.0`.
static COMPATIBILITY_LEVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d\.\d$").expect("static regex"));

/// Conversion target formats are plain filter names like `pdf`.
static FORMAT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("static regex"));

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_folder(config.folder()?)?;
    validate_tools(&config.tools)?;
    validate_extensions(&config.extensions)?;

    if config.extensions.is_presentation(&config.tools.convert_format) {
        return Err(Error::ConfigValidation {
            field: "extensions.presentation".to_string(),
            message: format!(
                "'{}' is also the conversion target format",
                config.tools.convert_format
            ),
        });
    }

    Ok(())
}

/// Validate the target folder.
pub fn validate_folder(folder: &Path) -> Result<()> {
    if !folder.exists() {
        return Err(Error::ConfigValidation {
            field: "folder".to_string(),
            message: format!("'{}' does not exist", folder.display()),
        });
    }

    if !folder.is_dir() {
        return Err(Error::ConfigValidation {
            field: "folder".to_string(),
            message: format!("'{}' is not a valid directory", folder.display()),
        });
    }

    Ok(())
}

/// Validate external tool settings.
pub fn validate_tools(tools: &ToolsConfig) -> Result<()> {
    if tools.soffice.trim().is_empty() {
        return Err(Error::MissingConfig("tools.soffice".to_string()));
    }

    if tools.gs.trim().is_empty() {
        return Err(Error::MissingConfig("tools.gs".to_string()));
    }

    if !FORMAT_NAME.is_match(&tools.convert_format) {
        return Err(Error::ConfigValidation {
            field: "tools.convert_format".to_string(),
            message: format!(
                "'{}' is not a valid format name (letters and digits only)",
                tools.convert_format
            ),
        });
    }

    if !COMPATIBILITY_LEVEL.is_match(&tools.compatibility_level) {
        return Err(Error::ConfigValidation {
            field: "tools.compatibility_level".to_string(),
            message: format!(
                "'{}' is not a PDF version like 1.4",
                tools.compatibility_level
            ),
        });
    }

    if let Some(preset) = &tools.pdf_settings {
        if !preset.starts_with('/') {
            return Err(Error::ConfigValidation {
                field: "tools.pdf_settings".to_string(),
                message: format!("'{}' must start with '/' (e.g. /ebook)", preset),
            });
        }
    }

    Ok(())
}

/// Validate extension lists.
pub fn validate_extensions(extensions: &ExtensionsConfig) -> Result<()> {
    for (field, list) in [
        ("extensions.presentation", &extensions.presentation),
        ("extensions.document", &extensions.document),
    ] {
        if list.is_empty() {
            return Err(Error::MissingConfig(format!(
                "{} (at least one extension required)",
                field
            )));
        }

        for ext in list {
            if ext.is_empty() || ext.contains('.') || ext.chars().any(char::is_whitespace) {
                return Err(Error::ConfigValidation {
                    field: field.to_string(),
                    message: format!(
                        "'{}' is not a bare extension (no dots or whitespace)",
                        ext
                    ),
                });
            }
        }
    }

    if let Some(ext) = extensions
        .presentation
        .iter()
        .find(|ext| extensions.is_document(ext))
    {
        return Err(Error::ConfigValidation {
            field: "extensions".to_string(),
            message: format!(
                "'{}' is listed as both a presentation and a document",
                ext
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_config() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.options.folder = Some(dir.path().to_path_buf());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_presentation_cannot_be_target_format() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.options.folder = Some(dir.path().to_path_buf());
        config.tools.convert_format = "odp".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_folder_must_be_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.pdf");
        std::fs::write(&file, b"x").unwrap();

        assert!(validate_folder(&file).is_err());
        assert!(validate_folder(&dir.path().join("missing")).is_err());
        assert!(validate_folder(dir.path()).is_ok());
    }

    #[test]
    fn test_missing_folder() {
        assert!(matches!(
            validate_config(&Config::default()),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_invalid_compatibility_level() {
        let mut tools = ToolsConfig::default();
        tools.compatibility_level = "1.4; rm".to_string();
        assert!(validate_tools(&tools).is_err());

        tools.compatibility_level = "1.7".to_string();
        assert!(validate_tools(&tools).is_ok());
    }

    #[test]
    fn test_invalid_pdf_settings() {
        let mut tools = ToolsConfig::default();
        tools.pdf_settings = Some("ebook".to_string());
        assert!(validate_tools(&tools).is_err());
    }

    #[test]
    fn test_overlapping_extensions() {
        let extensions = ExtensionsConfig {
            presentation: vec!["pptx".to_string(), "PDF".to_string()],
            document: vec!["pdf".to_string()],
        };
        assert!(validate_extensions(&extensions).is_err());
    }

    #[test]
    fn test_dotted_extension() {
        let extensions = ExtensionsConfig {
            presentation: vec![".pptx".to_string()],
            document: vec!["pdf".to_string()],
        };
        assert!(validate_extensions(&extensions).is_err());
    }

    #[test]
    fn test_empty_extension_list() {
        let extensions = ExtensionsConfig {
            presentation: vec![],
            document: vec!["pdf".to_string()],
        };
        assert!(matches!(
            validate_extensions(&extensions),
            Err(Error::MissingConfig(_))
        ));
    }
}
