//! Scoped lifetime of the geometry kernel.
//!
//! The kernel is started by [`KernelSession::begin`] and stopped when the
//! returned guard is dropped, so release happens on every exit path of the
//! caller that owns it.

use std::sync::atomic::{AtomicUsize, Ordering};

static ACTIVE_SESSIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct KernelSession {
    _private: (),
}

impl KernelSession {
    pub fn begin() -> Self {
        let previous = ACTIVE_SESSIONS.fetch_add(1, Ordering::SeqCst);
        log::debug!("kernel session started ({} active)", previous + 1);
        Self { _private: () }
    }

    /// Whether any session guard is currently alive.
    pub fn is_active() -> bool {
        ACTIVE_SESSIONS.load(Ordering::SeqCst) > 0
    }
}

impl Drop for KernelSession {
    fn drop(&mut self) {
        let previous = ACTIVE_SESSIONS.fetch_sub(1, Ordering::SeqCst);
        log::debug!("kernel session ended ({} active)", previous - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the counter is process-wide and tests run in parallel.
    #[test]
    fn test_session_released_on_every_exit_path() {
        fn fails(_session: &KernelSession) -> Result<(), ()> {
            Err(())
        }

        let before = ACTIVE_SESSIONS.load(Ordering::SeqCst);
        let outcome = {
            let session = KernelSession::begin();
            assert!(KernelSession::is_active());
            assert_eq!(ACTIVE_SESSIONS.load(Ordering::SeqCst), before + 1);
            fails(&session)
        };
        assert!(outcome.is_err());
        assert_eq!(ACTIVE_SESSIONS.load(Ordering::SeqCst), before);
    }
}
