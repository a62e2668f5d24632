//! File-system helpers.
//!
//! This module provides:
//! - [`write_file`] / [`write_file_with_backup`] for atomic, backup-safe writes
//! - [`CollocatedTempFile`] and [`TempFile`] scoped temporary files
//! - [`copy_or_link`] and the [`may_link`] heuristic
//! - [`copy_recursively`] / [`delete_recursively`] directory walks
//! - Path discovery helpers in [`paths`]
//!
//! # Example
//!
//! ```
//! use mvn_shared::fs::write_file;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let target = dir.path().join("settings.properties");
//! write_file(&target, |tmp| {
//!     std::fs::write(tmp, "key=value\n")?;
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(std::fs::read_to_string(&target).unwrap(), "key=value\n");
//! ```

pub mod link;
pub mod paths;
pub mod strategy;
pub mod temp;
pub mod walk;
pub mod write;

pub use link::{copy, copy_or_link, link, may_link};
pub use paths::{
    canonical_path, discover_base_directory, discover_user_current_working_directory,
    discover_user_home_directory,
};
pub use strategy::MoveStrategy;
pub use temp::{CollocatedTempFile, TempFile};
pub use walk::{copy_recursively, delete_recursively};
pub use write::{backup_path, write_file, write_file_with_backup};

use std::io;
use std::path::Path;

/// Remove a file, treating "already gone" as success.
///
/// Returns whether a file was actually removed.
pub(crate) fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
