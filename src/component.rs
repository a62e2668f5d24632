//! Run-once close tracking for resource handles.

use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether a resource has been closed.
///
/// [`CloseGuard::close`] returns `true` exactly once, for the first caller,
/// so the owning handle can perform its release logic a single time no
/// matter how often it is asked to close (explicitly, then again on drop).
#[derive(Debug, Default)]
pub struct CloseGuard {
    closed: AtomicBool,
}

impl CloseGuard {
    /// Create an open guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark as closed. Returns `true` if this call performed the transition.
    pub fn close(&self) -> bool {
        self.closed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Fail if already closed. `what` names the resource in the message.
    pub fn check_open(&self, what: &str) -> crate::Result<()> {
        if self.is_closed() {
            return Err(crate::SharedError::precondition(format!(
                "{} is closed",
                what
            )));
        }
        Ok(())
    }
}
