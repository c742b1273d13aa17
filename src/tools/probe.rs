//! Tool availability checks run before any file is touched.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};

/// Locate an executable the way the shell would.
///
/// Names containing a path separator are checked directly, bare names are
/// searched for in `PATH` (honoring `PATHEXT` on Windows).
pub fn find_program(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}

/// Fail fast if a tool needed by the configured mode is missing.
pub fn ensure_tools_available(config: &Config) -> Result<()> {
    let mode = config.options.mode;
    let mut required = Vec::new();

    if mode.converts() {
        required.push(config.tools.soffice.as_str());
    }
    if mode.compresses() {
        required.push(config.tools.gs.as_str());
    }

    for program in required {
        match find_program(program) {
            Some(path) => tracing::debug!("Found {} at {}", program, path.display()),
            None => return Err(Error::ToolNotFound(program.to_string())),
        }
    }

    Ok(())
}
