//! Subprocess invocation shared by the external tools.

use std::process::Stdio;

use tokio::process::Command;

use crate::error::{Error, Result};

/// Run a prepared command to completion with its output discarded.
///
/// A missing executable maps to [`Error::ToolNotFound`], a non-zero exit to
/// [`Error::ToolFailed`].
pub async fn run_tool(program: &str, command: &mut Command) -> Result<()> {
    tracing::debug!("Running {:?}", command.as_std());

    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ToolNotFound(program.to_string())
            } else {
                Error::ToolFailed {
                    tool: program.to_string(),
                    status: format!("failed to start: {}", e),
                }
            }
        })?;

    if !status.success() {
        return Err(Error::ToolFailed {
            tool: program.to_string(),
            status: status.to_string(),
        });
    }

    Ok(())
}
