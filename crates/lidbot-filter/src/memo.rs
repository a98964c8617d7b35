//! Get-or-compute caches for lemma lookups.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lru::LruCache;

/// A get-or-compute cache keyed by the raw input string.
///
/// The cache only ever speeds things up: implementations may compute the same
/// key twice under contention, and callers must get the same answer either way.
pub trait Memoizer: Send + Sync {
    fn get_or_compute(&self, key: &str, compute: &dyn Fn(&str) -> String) -> String;
}

/// Bounded least-recently-used cache behind a mutex.
///
/// The lock is released while `compute` runs, so two threads missing on the
/// same key both compute it and the later `put` wins.
pub struct LruMemoizer {
    cache: Mutex<LruCache<String, String>>,
}

impl LruMemoizer {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    // A panic inside another lock holder cannot leave the map half-written in
    // a way that matters here, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, LruCache<String, String>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Memoizer for LruMemoizer {
    fn get_or_compute(&self, key: &str, compute: &dyn Fn(&str) -> String) -> String {
        let cached = self.lock().get(key).cloned();
        if let Some(value) = cached {
            return value;
        }

        let value = compute(key);
        self.lock().put(key.to_owned(), value.clone());
        value
    }
}

impl std::fmt::Debug for LruMemoizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.lock();
        f.debug_struct("LruMemoizer")
            .field("len", &cache.len())
            .field("capacity", &cache.cap())
            .finish()
    }
}

/// Pass-through memoizer: every call computes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMemoizer;

impl Memoizer for NoopMemoizer {
    fn get_or_compute(&self, key: &str, compute: &dyn Fn(&str) -> String) -> String {
        compute(key)
    }
}
