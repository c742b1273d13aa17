//! Confirmation prompt shown before anything is modified.

use std::io::{self, BufRead, Write};
use std::path::Path;

use console::style;

use crate::error::Result;
use crate::output::console::SAMPLE_SIZE;

/// Check a prompt answer. Empty input means yes.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Describe the folder and ask whether to proceed.
///
/// Closed input (EOF) counts as a refusal, so piping nothing into the
/// tool never starts a run.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    folder: &Path,
    entries: &[String],
) -> Result<bool> {
    writeln!(output, "Folder '{}' recognised.", style(folder.display()).bold())?;
    writeln!(output, "Showing head of content:")?;
    for entry in entries.iter().take(SAMPLE_SIZE) {
        writeln!(output, " - {}", entry)?;
    }
    write!(
        output,
        "Clean {} files and filenames here? [Y]/N ",
        entries.len()
    )?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }

    Ok(is_affirmative(&answer))
}

/// Run [`confirm`] against the terminal.
///
/// The prompt goes to stderr so stdout stays clean for the JSON report.
pub fn confirm_on_terminal(folder: &Path, entries: &[String]) -> Result<bool> {
    let stdin = io::stdin();
    let stderr = io::stderr();
    confirm(&mut stdin.lock(), &mut stderr.lock(), folder, entries)
}
