use crate::error::{DockerizeError, Result};
use std::path::Path;

/// List the subdirectories of `base` that look like project folders.
///
/// Skips hidden entries, non-directories, anything in `ignore`, and names
/// prefixed with `_`. Names come back in the filesystem's enumeration order;
/// callers sort when a stable order matters.
pub async fn discover(base: &Path, ignore: &[&str]) -> Result<Vec<String>> {
    let mut entries =
        tokio::fs::read_dir(base)
            .await
            .map_err(|source| DockerizeError::Discovery {
                path: base.to_path_buf(),
                source,
            })?;

    let mut dirs = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|source| DockerizeError::Discovery {
            path: base.to_path_buf(),
            source,
        })?
    {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let file_type = entry.file_type().await?;
        if !file_type.is_dir() {
            continue;
        }
        if ignore.contains(&name.as_str()) {
            continue;
        }
        if name.starts_with('_') {
            continue;
        }
        dirs.push(name);
    }

    Ok(dirs)
}
