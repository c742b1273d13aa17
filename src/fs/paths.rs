//! Directory listing and on-disk rename actions.

use std::path::{Path, PathBuf};

use crate::config::CollisionPolicy;
use crate::error::{Error, Result};
use crate::fs::naming::{needs_sanitizing, numbered_filename, sanitize_filename};

/// Upper bound on numbered candidates tried by [`make_unique_filename`].
const MAX_UNIQUE_ATTEMPTS: u32 = 1000;

/// Characters of the original name kept in a scratch file name.
const TEMP_NAME_HINT_CHARS: usize = 32;

/// List the names of the immediate children of `folder`, sorted.
///
/// Names that are not valid UTF-8 cannot be sanitized and are left out with
/// a warning.
pub async fn list_entries(folder: &Path) -> Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(folder).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::warn!("Skipping entry with non UTF-8 name: {:?}", raw);
            }
        }
    }

    names.sort();
    Ok(names)
}

/// Check whether `path` exists without following symlinks.
pub async fn entry_exists(path: &Path) -> bool {
    tokio::fs::symlink_metadata(path).await.is_ok()
}

/// Rename `folder/name` to its sanitized form and return the name in use
/// afterwards.
///
/// Nothing happens when the name is already clean. An existing entry at the
/// target is never overwritten: depending on `policy` the rename is refused
/// or a numbered variant of the name is used.
pub async fn rename_sanitized(
    folder: &Path,
    name: &str,
    policy: CollisionPolicy,
) -> Result<String> {
    if !needs_sanitizing(name) {
        return Ok(name.to_string());
    }
    let sanitized = sanitize_filename(name);

    let target = if entry_exists(&folder.join(&sanitized)).await {
        match policy {
            CollisionPolicy::Skip => {
                return Err(Error::NameCollision {
                    from: name.to_string(),
                    to: sanitized,
                })
            }
            CollisionPolicy::Suffix => make_unique_filename(folder, &sanitized).await?,
        }
    } else {
        sanitized
    };

    tokio::fs::rename(folder.join(name), folder.join(&target)).await?;
    Ok(target)
}

/// Find a free name in `dir`, appending a number to the stem if needed.
///
/// Dangling symlinks count as taken.
pub async fn make_unique_filename(dir: &Path, name: &str) -> Result<String> {
    if !entry_exists(&dir.join(name)).await {
        return Ok(name.to_string());
    }

    for counter in 1..=MAX_UNIQUE_ATTEMPTS {
        let candidate = numbered_filename(name, counter);
        if !entry_exists(&dir.join(&candidate)).await {
            return Ok(candidate);
        }
    }

    Err(Error::InvalidFilename(format!(
        "No free name for '{}' after {} attempts",
        name, MAX_UNIQUE_ATTEMPTS
    )))
}

/// Hidden sibling path used as scratch output for in-place rewrites.
///
/// Lives in the same directory so the final rename stays on one filesystem.
/// Only a short prefix of the original name is kept, so the scratch name
/// stays within filesystem limits however long the original is.
pub fn temp_sibling(path: &Path) -> PathBuf {
    let hint: String = path
        .file_name()
        .map(|n| n.to_string_lossy().chars().take(TEMP_NAME_HINT_CHARS).collect())
        .unwrap_or_default();
    let parent = path.parent().unwrap_or(Path::new("."));

    parent.join(format!(".{}.{}.tmp", hint, uuid::Uuid::new_v4()))
}

/// Resolve symlinks so an in-place rewrite lands on the real file.
///
/// Replacing the link itself would turn it into a regular file and leave its
/// target untouched.
pub async fn resolve_document(path: &Path) -> Result<PathBuf> {
    Ok(tokio::fs::canonicalize(path).await?)
}

/// Replace `target` with the finished scratch file at `temp`.
///
/// The scratch file must exist and be non-empty; otherwise `target` is left
/// as it was. The rename is atomic on a single filesystem, so `target` is
/// either the old or the new content, never a partial write.
pub async fn commit_temp(temp: &Path, target: &Path) -> Result<()> {
    let produced = tokio::fs::metadata(temp).await.map_err(|_| {
        Error::Compression(format!("no output written to {}", temp.display()))
    })?;

    if produced.len() == 0 {
        return Err(Error::Compression(format!(
            "empty output written to {}",
            temp.display()
        )));
    }

    let original = tokio::fs::metadata(target).await?;
    tokio::fs::set_permissions(temp, original.permissions()).await?;
    tokio::fs::rename(temp, target).await?;

    Ok(())
}
