//! Path discovery and canonicalization.

use std::path::{Path, PathBuf};

use crate::error::{Result, SharedError};

/// Canonical (real) form of `path`.
///
/// Paths that do not exist (yet) are handled by canonicalizing the nearest
/// existing ancestor and re-appending the remaining components.
pub fn canonical_path(path: &Path) -> PathBuf {
    if let Ok(real) = std::fs::canonicalize(path) {
        return real;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            canonical_path(parent).join(name)
        }
        (Some(_), Some(name)) => match std::env::current_dir() {
            Ok(cwd) => canonical_path(&cwd).join(name),
            Err(_) => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Canonical path of the current user's home directory.
pub fn discover_user_home_directory() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SharedError::precondition("requires a user home directory"))?;
    Ok(canonical_path(&home))
}

/// Canonical path of the current working directory.
pub fn discover_user_current_working_directory() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(canonical_path(&cwd))
}

/// Canonical path of some "base" directory.
///
/// If the environment variable `basedir_key` is set, its value is resolved
/// against the current working directory. Otherwise `default_basedir` is
/// resolved against the user home directory.
pub fn discover_base_directory(basedir_key: &str, default_basedir: &str) -> Result<PathBuf> {
    match std::env::var_os(basedir_key) {
        Some(basedir) => {
            let resolved = discover_user_current_working_directory()?.join(basedir);
            tracing::debug!("Base directory from {}: {}", basedir_key, resolved.display());
            Ok(canonical_path(&resolved))
        }
        None => Ok(canonical_path(
            &discover_user_home_directory()?.join(default_basedir),
        )),
    }
}
