//! Scoped acquisition of the host's "one history step" resource.
//!
//! Hosts with their own undo system expose a way to combine several
//! discrete calls into a single host-level history entry. [`ChunkGuard`]
//! wraps that resource RAII-style: acquired when the guard is built,
//! released when it drops, on every exit path including a failing replay.

/// External transactional boundary a replay batch runs inside.
///
/// For a Maya-like host this maps to opening and closing an undo chunk;
/// hosts without such a concept use [`NullBoundary`].
pub trait TransactionBoundary {
    /// Enters the boundary; subsequent host calls coalesce into one step.
    fn acquire(&self);
    /// Leaves the boundary.
    fn release(&self);
}

/// RAII guard over a [`TransactionBoundary`].
pub struct ChunkGuard<'a> {
    boundary: &'a dyn TransactionBoundary,
}

impl<'a> ChunkGuard<'a> {
    /// Acquires the boundary for the lifetime of the guard.
    pub fn open(boundary: &'a dyn TransactionBoundary) -> Self {
        boundary.acquire();
        Self { boundary }
    }
}

impl Drop for ChunkGuard<'_> {
    fn drop(&mut self) {
        self.boundary.release();
    }
}

/// No-op boundary for hosts without a transactional undo system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBoundary;

impl TransactionBoundary for NullBoundary {
    fn acquire(&self) {}
    fn release(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CountingBoundary {
        events: RefCell<Vec<&'static str>>,
    }

    impl TransactionBoundary for CountingBoundary {
        fn acquire(&self) {
            self.events.borrow_mut().push("acquire");
        }
        fn release(&self) {
            self.events.borrow_mut().push("release");
        }
    }

    #[test]
    fn test_guard_acquires_and_releases() {
        let boundary = CountingBoundary {
            events: RefCell::new(Vec::new()),
        };
        {
            let _guard = ChunkGuard::open(&boundary);
            assert_eq!(*boundary.events.borrow(), ["acquire"]);
        }
        assert_eq!(*boundary.events.borrow(), ["acquire", "release"]);
    }

    #[test]
    fn test_guard_releases_on_early_return() {
        let boundary = CountingBoundary {
            events: RefCell::new(Vec::new()),
        };
        let failing = || -> anyhow::Result<()> {
            let _guard = ChunkGuard::open(&boundary);
            anyhow::bail!("replay failed");
        };
        assert!(failing().is_err());
        assert_eq!(*boundary.events.borrow(), ["acquire", "release"]);
    }
}
