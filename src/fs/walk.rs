//! Recursive directory copy and delete.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

use super::link::preserve_modified;

/// Copy the tree rooted at `from` into `to`, top-down.
///
/// Every directory is offered to `predicate` before it is visited: a
/// rejected directory skips its whole subtree (the root is offered too).
/// Accepted directories are created before their contents are copied.
/// Files rejected by `predicate` are skipped. Copied files keep their
/// permissions and modification time. Unless `overwrite` is set, an
/// existing destination file is an error; with it, the existing file is
/// removed first. Symlinks are not followed into: a link to a directory
/// becomes an empty directory, a link to a file is copied as that file.
pub fn copy_recursively<P>(from: &Path, to: &Path, predicate: P, overwrite: bool) -> Result<()>
where
    P: Fn(&Path) -> bool,
{
    copy_dir(from, from, to, &predicate, overwrite)
}

fn copy_dir<P>(root: &Path, dir: &Path, to: &Path, predicate: &P, overwrite: bool) -> Result<()>
where
    P: Fn(&Path) -> bool,
{
    if !predicate(dir) {
        tracing::debug!("Skipping subtree {}", dir.display());
        return Ok(());
    }
    fs::create_dir_all(to.join(relative(root, dir)))?;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            copy_dir(root, &path, to, predicate, overwrite)?;
        } else if !predicate(&path) {
            continue;
        } else if file_type.is_symlink() && path.is_dir() {
            tracing::debug!("Not following directory link {}", path.display());
            fs::create_dir_all(to.join(relative(root, &path)))?;
        } else {
            copy_file(&path, &to.join(relative(root, &path)), overwrite)?;
        }
    }
    Ok(())
}

fn copy_file(src: &Path, dst: &Path, overwrite: bool) -> Result<()> {
    if dst.symlink_metadata().is_ok() {
        if !overwrite {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", dst.display()),
            )
            .into());
        }
        fs::remove_file(dst)?;
    }
    fs::copy(src, dst)?;
    preserve_modified(src, dst)?;
    Ok(())
}

fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// Delete `path` and everything below it, bottom-up.
///
/// Files are deleted as they are visited, each directory once all of its
/// children are gone. Symlinks are removed, never followed. A plain file
/// is simply deleted.
pub fn delete_recursively(path: &Path) -> Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    if file_type.is_dir() {
        for entry in fs::read_dir(path)? {
            delete_recursively(&entry?.path())?;
        }
        fs::remove_dir(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}
