//! Clean mode and collision policy definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which steps run after a file has been sanitized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanMode {
    /// Convert presentations and compress documents (default).
    #[default]
    Normal,
    /// Only sanitize filenames.
    Rename,
    /// Sanitize and convert presentations, never compress.
    Convert,
    /// Sanitize and compress documents, never convert.
    Compress,
}

impl CleanMode {
    /// Whether presentation files are converted in this mode.
    pub fn converts(&self) -> bool {
        matches!(self, CleanMode::Normal | CleanMode::Convert)
    }

    /// Whether document files are compressed in this mode.
    pub fn compresses(&self) -> bool {
        matches!(self, CleanMode::Normal | CleanMode::Compress)
    }
}

impl fmt::Display for CleanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanMode::Normal => write!(f, "normal"),
            CleanMode::Rename => write!(f, "rename"),
            CleanMode::Convert => write!(f, "convert"),
            CleanMode::Compress => write!(f, "compress"),
        }
    }
}

impl FromStr for CleanMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(CleanMode::Normal),
            "rename" => Ok(CleanMode::Rename),
            "convert" => Ok(CleanMode::Convert),
            "compress" => Ok(CleanMode::Compress),
            _ => Err(format!("Unknown clean mode: {}", s)),
        }
    }
}

/// What to do when a sanitized name is already taken by another entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Report the file and leave it untouched under its original name.
    #[default]
    Skip,
    /// Append `_1`, `_2`, ... to the stem until the name is free.
    Suffix,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Skip => write!(f, "skip"),
            CollisionPolicy::Suffix => write!(f, "suffix"),
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(CollisionPolicy::Skip),
            "suffix" => Ok(CollisionPolicy::Suffix),
            _ => Err(format!("Unknown collision policy: {}", s)),
        }
    }
}
