//! Configuration module for the folder-cleaner.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Clean modes and collision policies
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{default_config_path, Config, ExtensionsConfig, OptionsConfig, ToolsConfig};
pub use modes::{CleanMode, CollisionPolicy};
pub use validation::validate_config;
