//! Hard-link or copy single files.
//!
//! None of these functions check their preconditions: `src` must exist and
//! be a regular file, `dst` must not exist, and `dst`'s parent must exist.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::Result;

/// Hard link `dst` to `src` if allowed and considered safe, otherwise copy.
pub fn copy_or_link(src: &Path, dst: &Path, may_link_files: bool) -> Result<()> {
    if may_link_files && may_link(src, dst)? {
        link(src, dst)
    } else {
        copy(src, dst)
    }
}

/// Whether hard linking `src` to `dst` is expected to work.
///
/// Two checks, both best effort:
/// - the file store (device) of `src` and of `dst`'s parent must match;
///   some file systems report the same store for distinct volumes (e.g.
///   subvolumes of one btrfs pool), so this can give false positives
/// - both paths must be on the same side of the user home directory; the
///   home directory is assumed to live on a single volume
pub fn may_link(src: &Path, dst: &Path) -> Result<bool> {
    may_link_with_home(src, dst, dirs::home_dir().as_deref())
}

fn may_link_with_home(src: &Path, dst: &Path, home: Option<&Path>) -> Result<bool> {
    let dst_parent = match dst.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => dst,
    };
    if file_store(src)? != file_store(dst_parent)? {
        return Ok(false);
    }
    Ok(same_side_of_home(src, dst, home))
}

/// Create a hard link at `dst` pointing to `src`.
pub fn link(src: &Path, dst: &Path) -> Result<()> {
    tracing::debug!("Linking {} -> {}", dst.display(), src.display());
    fs::hard_link(src, dst)?;
    Ok(())
}

/// Copy file contents and carry over the last-modified time.
pub fn copy(src: &Path, dst: &Path) -> Result<()> {
    tracing::debug!("Copying {} -> {}", src.display(), dst.display());
    fs::copy(src, dst)?;
    preserve_modified(src, dst)?;
    Ok(())
}

/// Copy the last-modified time of `src` onto `dst`.
///
/// Works on read-only destinations: only the owner check applies.
pub(crate) fn preserve_modified(src: &Path, dst: &Path) -> io::Result<()> {
    let modified = fs::metadata(src)?.modified()?;
    open_for_times(dst)?.set_modified(modified)
}

#[cfg(not(windows))]
fn open_for_times(path: &Path) -> io::Result<File> {
    File::open(path)
}

#[cfg(windows)]
fn open_for_times(path: &Path) -> io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    fs::OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .open(path)
}

fn same_side_of_home(src: &Path, dst: &Path, home: Option<&Path>) -> bool {
    match home {
        Some(home) => src.starts_with(home) == dst.starts_with(home),
        None => true,
    }
}

/// Identity of the file store holding a path.
#[derive(Debug, PartialEq, Eq)]
struct FileStore(String);

#[cfg(unix)]
fn file_store(path: &Path) -> io::Result<FileStore> {
    use std::os::unix::fs::MetadataExt;
    Ok(FileStore(fs::metadata(path)?.dev().to_string()))
}

#[cfg(not(unix))]
fn file_store(path: &Path) -> io::Result<FileStore> {
    let canonical = fs::canonicalize(path)?;
    let root = canonical
        .components()
        .next()
        .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
        .unwrap_or_default();
    Ok(FileStore(root))
}
