//! Scoped temporary files.
//!
//! A [`CollocatedTempFile`] lives next to the file it will eventually
//! replace, so the final move stays on one volume and can be an atomic
//! rename. A [`TempFile`] lives in the system temp directory and is simply
//! removed when released.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::component::CloseGuard;
use crate::error::{Result, SharedError};

use super::strategy::MoveStrategy;

/// A temporary path collocated with a target file.
///
/// Only the path is allocated; the caller creates the file by writing to
/// [`path`](Self::path). Released by [`close`](Self::close) (idempotent) or,
/// failing that, on drop.
#[derive(Debug)]
pub struct CollocatedTempFile {
    target: PathBuf,
    path: PathBuf,
    wants_move: bool,
    strategy: MoveStrategy,
    guard: CloseGuard,
}

impl CollocatedTempFile {
    /// Allocate a temp path next to `target`, creating parent directories
    /// if needed. The temp file itself is not created.
    pub fn new(target: &Path) -> Result<Self> {
        Self::with_strategy(target, MoveStrategy::current())
    }

    /// Like [`new`](Self::new) but with an explicit move strategy.
    pub fn with_strategy(target: &Path, strategy: MoveStrategy) -> Result<Self> {
        let parent = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                SharedError::precondition(format!(
                    "file must have parent: {}",
                    target.display()
                ))
            })?;
        let file_name = target.file_name().ok_or_else(|| {
            SharedError::precondition(format!("file must have a name: {}", target.display()))
        })?;

        std::fs::create_dir_all(parent)?;
        let path = parent.join(format!(
            "{}.{}.tmp",
            file_name.to_string_lossy(),
            random_suffix()
        ));

        Ok(Self {
            target: target.to_path_buf(),
            path,
            wants_move: false,
            strategy,
            guard: CloseGuard::new(),
        })
    }

    /// The temp path to write content to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file this temp file will replace.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Whether a move has been requested.
    pub fn wants_move(&self) -> bool {
        self.wants_move
    }

    /// Ask for the temp file to replace the target on release.
    ///
    /// Nothing moves yet; the move happens in [`close`](Self::close).
    /// Requesting a move without having written the temp file is a caller
    /// bug and is not detected; requesting one after release is an error.
    pub fn request_move(&mut self) -> Result<()> {
        self.guard.check_open("CollocatedTempFile")?;
        self.wants_move = true;
        Ok(())
    }

    /// Release the handle: perform the requested move, then delete the temp
    /// file if it is still around. Only the first call has any effect.
    pub fn close(&mut self) -> Result<()> {
        if !self.guard.close() {
            return Ok(());
        }

        let moved = if self.wants_move {
            tracing::debug!(
                "Moving {} onto {}",
                self.path.display(),
                self.target.display()
            );
            self.strategy.apply(&self.path, &self.target)
        } else {
            Ok(())
        };
        let cleaned = super::remove_if_exists(&self.path);

        moved?;
        cleaned?;
        Ok(())
    }
}

impl Drop for CollocatedTempFile {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!("Failed to release temp file {}: {}", self.path.display(), e);
        }
    }
}

/// A temporary file in the system temp directory, removed when released.
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
    handle: Option<TempPath>,
}

impl TempFile {
    /// Create the backing file in the default temp directory.
    pub fn new() -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("mvn-shared")
            .suffix(".tmp")
            .tempfile()?;
        let handle = file.into_temp_path();
        Ok(Self {
            path: handle.to_path_buf(),
            handle: Some(handle),
        })
    }

    /// Path of the temp file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the backing file, if it still exists. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        match handle.close() {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

fn random_suffix() -> u64 {
    uuid::Uuid::new_v4().as_u64_pair().0
}
