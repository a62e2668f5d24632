//! How a finished temp file replaces its target.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::OnceLock;

/// Chunk size for the stream-copy fallback.
const COPY_BUFFER_SIZE: usize = 32 * 1024;

/// Strategy used to move a collocated temp file onto its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Single `rename` within the same volume. Readers see either the old
    /// or the new file, never a partial one.
    AtomicRename,
    /// Byte-stream copy into the target followed by deletion of the source.
    /// Used where renaming over files held open by other processes is
    /// unreliable (Windows family). Not atomic.
    StreamCopy,
}

impl MoveStrategy {
    /// The strategy for this platform, detected once per process.
    pub fn current() -> Self {
        static CURRENT: OnceLock<MoveStrategy> = OnceLock::new();
        *CURRENT.get_or_init(Self::detect)
    }

    fn detect() -> Self {
        let strategy = if cfg!(windows) {
            Self::StreamCopy
        } else {
            Self::AtomicRename
        };
        tracing::debug!("Using {:?} to move temp files into place", strategy);
        strategy
    }

    /// Whether this strategy guarantees an atomic replacement.
    pub fn is_atomic(self) -> bool {
        matches!(self, Self::AtomicRename)
    }

    /// Move `source` onto `target`, overwriting it.
    pub fn apply(self, source: &Path, target: &Path) -> io::Result<()> {
        match self {
            Self::AtomicRename => std::fs::rename(source, target),
            Self::StreamCopy => {
                stream_copy(source, target)?;
                super::remove_if_exists(source)?;
                Ok(())
            }
        }
    }
}

fn stream_copy(source: &Path, target: &Path) -> io::Result<()> {
    let mut input = File::open(source)?;
    let mut output = File::create(target)?;
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    loop {
        let read = input.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        output.write_all(&buffer[..read])?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn current_is_stable() {
        assert_eq!(MoveStrategy::current(), MoveStrategy::current());
    }

    #[cfg(unix)]
    #[test]
    fn unix_uses_atomic_rename() {
        assert_eq!(MoveStrategy::current(), MoveStrategy::AtomicRename);
        assert!(MoveStrategy::current().is_atomic());
    }

    #[test]
    fn atomic_rename_replaces_target() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        let target = temp.path().join("target");
        fs::write(&source, "new").unwrap();
        fs::write(&target, "old").unwrap();

        MoveStrategy::AtomicRename.apply(&source, &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        assert!(!source.exists());
    }

    #[test]
    fn stream_copy_replaces_target_and_removes_source() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        let target = temp.path().join("target");
        // Larger than one chunk, and longer than the old content.
        let content: Vec<u8> = (0..COPY_BUFFER_SIZE * 2 + 17)
            .map(|i| (i % 251) as u8)
            .collect();
        fs::write(&source, &content).unwrap();
        fs::write(&target, "a much shorter old content").unwrap();

        MoveStrategy::StreamCopy.apply(&source, &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), content);
        assert!(!source.exists());
        assert!(!MoveStrategy::StreamCopy.is_atomic());
    }

    #[test]
    fn stream_copy_truncates_longer_target() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        let target = temp.path().join("target");
        fs::write(&source, "short").unwrap();
        fs::write(&target, "this old content is longer").unwrap();

        MoveStrategy::StreamCopy.apply(&source, &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "short");
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let result = MoveStrategy::AtomicRename
            .apply(&temp.path().join("missing"), &temp.path().join("target"));
        assert!(result.is_err());
    }
}
