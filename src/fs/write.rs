//! Atomic, backup-safe file writes.

use std::path::{Path, PathBuf};

use crate::error::{Result, SharedError};

use super::temp::CollocatedTempFile;

/// Write a file atomically, without backup.
///
/// `writer` receives a temp path next to `target` and must create the file
/// there with the full content (the path does not exist yet). Once it
/// returns successfully the temp file replaces `target`. Parent directories
/// are created as needed.
///
/// If `writer` fails, `target` is left untouched and the temp file is
/// removed.
pub fn write_file<F>(target: &Path, writer: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    write(target, writer, false)
}

/// Write a file atomically, keeping the previous content in a `.bak` file.
///
/// Same as [`write_file`], but if `target` already exists as a regular file
/// it is first copied to [`backup_path`], overwriting any older backup.
pub fn write_file_with_backup<F>(target: &Path, writer: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    write(target, writer, true)
}

/// The backup location for `target`: `<file-name>.bak` in the same directory.
pub fn backup_path(target: &Path) -> Option<PathBuf> {
    let file_name = target.file_name()?;
    let mut name = file_name.to_os_string();
    name.push(".bak");
    Some(target.with_file_name(name))
}

fn write<F>(target: &Path, writer: F, backup: bool) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    if target.parent().is_none_or(|p| p.as_os_str().is_empty()) {
        return Err(SharedError::precondition(format!(
            "target must have parent: {}",
            target.display()
        )));
    }

    let mut temp = CollocatedTempFile::new(target)?;
    let outcome = fill(&mut temp, target, writer, backup);
    let released = temp.close();

    // A writer or backup failure takes precedence over a release failure.
    outcome.and(released)
}

fn fill<F>(temp: &mut CollocatedTempFile, target: &Path, writer: F, backup: bool) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    writer(temp.path())?;

    if backup && target.is_file() {
        if let Some(bak) = backup_path(target) {
            tracing::debug!("Backing up {} to {}", target.display(), bak.display());
            std::fs::copy(target, &bak)?;
        }
    }

    temp.request_move()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn leftover_tmp_files(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".tmp")
            })
            .count()
    }

    #[test]
    fn writes_new_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");

        write_file(&target, |tmp| {
            fs::write(tmp, "hello")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
        assert_eq!(leftover_tmp_files(temp.path()), 0);
    }

    #[test]
    fn replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");
        fs::write(&target, "old content that is longer").unwrap();

        write_file(&target, |tmp| {
            fs::write(tmp, "new")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        assert!(!temp.path().join("out.txt.bak").exists());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested").join("dir").join("out.txt");

        write_file(&target, |tmp| {
            fs::write(tmp, "deep")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "deep");
    }

    #[test]
    fn writer_receives_collocated_path() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");

        write_file(&target, |tmp| {
            assert_eq!(tmp.parent(), target.parent());
            assert!(!tmp.exists());
            fs::write(tmp, "x")?;
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn failing_writer_leaves_existing_target_untouched() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");
        fs::write(&target, "original").unwrap();

        let result = write_file(&target, |tmp| {
            fs::write(tmp, "half writ")?;
            Err(anyhow::anyhow!("writer failed").into())
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
        assert_eq!(leftover_tmp_files(temp.path()), 0);
    }

    #[test]
    fn failing_writer_leaves_missing_target_missing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");

        let result = write_file(&target, |_| {
            Err(std::io::Error::other("disk full").into())
        });

        assert!(matches!(result, Err(SharedError::Io(_))));
        assert!(!target.exists());
        assert_eq!(leftover_tmp_files(temp.path()), 0);
    }

    #[test]
    fn backup_keeps_previous_content() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");
        fs::write(&target, "v1").unwrap();

        write_file_with_backup(&target, |tmp| {
            fs::write(tmp, "v2")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "v2");
        assert_eq!(
            fs::read_to_string(temp.path().join("out.txt.bak")).unwrap(),
            "v1"
        );
        assert_eq!(leftover_tmp_files(temp.path()), 0);
    }

    #[test]
    fn backup_overwrites_prior_backup() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");
        fs::write(&target, "v2").unwrap();
        fs::write(temp.path().join("out.txt.bak"), "v1").unwrap();

        write_file_with_backup(&target, |tmp| {
            fs::write(tmp, "v3")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("out.txt.bak")).unwrap(),
            "v2"
        );
    }

    #[test]
    fn backup_skipped_when_target_missing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");

        write_file_with_backup(&target, |tmp| {
            fs::write(tmp, "first")?;
            Ok(())
        })
        .unwrap();

        assert!(!temp.path().join("out.txt.bak").exists());
    }

    #[test]
    fn failing_writer_creates_no_backup() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");
        fs::write(&target, "v1").unwrap();

        let result = write_file_with_backup(&target, |_| {
            Err(SharedError::precondition("nothing to write"))
        });

        assert!(result.is_err());
        assert!(!temp.path().join("out.txt.bak").exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "v1");
    }

    #[test]
    fn failing_backup_leaves_target_untouched() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.txt");
        fs::write(&target, "v1").unwrap();
        fs::create_dir(temp.path().join("out.txt.bak")).unwrap();

        let result = write_file_with_backup(&target, |tmp| {
            fs::write(tmp, "v2")?;
            Ok(())
        });

        assert!(matches!(result, Err(SharedError::Io(_))));
        assert_eq!(fs::read_to_string(&target).unwrap(), "v1");
        assert!(temp.path().join("out.txt.bak").is_dir());
        assert_eq!(leftover_tmp_files(temp.path()), 0);
    }

    #[test]
    fn rejects_target_without_parent() {
        let err = write_file(Path::new("out.txt"), |_| Ok(())).unwrap_err();
        assert!(matches!(err, SharedError::Precondition { .. }));
    }

    #[test]
    fn backup_path_appends_extension() {
        assert_eq!(
            backup_path(Path::new("/a/settings.xml")),
            Some(PathBuf::from("/a/settings.xml.bak"))
        );
        assert_eq!(backup_path(Path::new("/")), None);
    }
}
