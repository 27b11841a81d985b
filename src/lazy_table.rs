//! Build-once table with double-checked locking.
//!
//! A [`LazyTable`] starts empty and is populated by the first caller of
//! [`get_or_try_build`](LazyTable::get_or_try_build). Once published, the table is
//! immutable and every later read is a single lock-free load.
//!
//! Unlike `OnceLock::get_or_init`, a failing build publishes nothing: the build lock
//! is released and the next caller starts over.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

/// A lazily built, then read-only, shared value.
pub struct LazyTable<T> {
    name: &'static str,
    published: OnceLock<Arc<T>>,
    // Guards the build only. Never held on the read path.
    build_lock: Mutex<()>,
    builds: AtomicUsize,
}

impl<T> LazyTable<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            published: OnceLock::new(),
            build_lock: Mutex::new(()),
            builds: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the published table, if any.
    pub fn get(&self) -> Option<Arc<T>> {
        self.published.get().cloned()
    }

    pub fn is_built(&self) -> bool {
        self.published.get().is_some()
    }

    /// Number of build attempts, successful or not.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    /// Returns the published table, building it first if needed.
    ///
    /// At most one caller runs `build` at a time. Callers that raced for the lock
    /// re-check after acquiring it and observe the winner's table instead of
    /// building again.
    ///
    /// # Errors
    ///
    /// Returns whatever `build` returns. Nothing is published in that case, so the
    /// next call will run `build` again.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// A panic inside `build` poisons the build lock but publishes nothing. The lock
    /// is recovered on the next call, which simply retries the build.
    pub fn get_or_try_build<E>(&self, build: impl FnOnce() -> Result<T, E>) -> Result<Arc<T>, E> {
        if let Some(table) = self.published.get() {
            return Ok(Arc::clone(table));
        }

        let _guard = self.build_lock.lock().unwrap_or_else(|p| p.into_inner());

        if let Some(table) = self.published.get() {
            return Ok(Arc::clone(table));
        }

        self.builds.fetch_add(1, Ordering::AcqRel);
        tracing::debug!(table = self.name, "building lazy table");

        let table = Arc::new(build()?);

        // Only this thread can reach `set` while holding the build lock.
        let _ = self.published.set(Arc::clone(&table));
        tracing::debug!(table = self.name, "published lazy table");

        Ok(table)
    }
}

impl<T> std::fmt::Debug for LazyTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyTable")
            .field("name", &self.name)
            .field("built", &self.is_built())
            .field("builds", &self.build_count())
            .finish()
    }
}
