//! Error types for the folder-cleaner application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // User interaction
    #[error("Aborted by user")]
    Aborted,

    // External tool errors
    #[error("Required tool '{0}' is not installed or not in PATH")]
    ToolNotFound(String),

    #[error("{tool} exited with status: {status}")]
    ToolFailed { tool: String, status: String },

    #[error("Conversion produced no output file: {}", .0.display())]
    ConversionOutputMissing(PathBuf),

    #[error("Compression failed: {0}")]
    Compression(String),

    // File system errors
    #[error("Cannot rename '{from}' to '{to}': target already exists")]
    NameCollision { from: String, to: String },

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const ENVIRONMENT_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
