//! Process-wide dictionary cache.
//!
//! The engine keeps expensive language data (mostly dictionaries) in a global
//! cache that survives the init/release cycles of individual instances. Only
//! one object stands for it here: `DICTIONARY_CACHE`. Client operations hold
//! its shared guard while they talk to the engine; a purge takes the
//! exclusive guard. Purging therefore blocks until every in-flight client
//! operation in the process has returned, and operations started afterwards
//! wait for the purge to finish.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::engine::Backend;
use crate::error::Result;

pub(crate) static DICTIONARY_CACHE: DictionaryCache = DictionaryCache::new();

pub(crate) struct DictionaryCache {
    lock: RwLock<()>,
}

impl DictionaryCache {
    const fn new() -> Self {
        Self {
            lock: RwLock::new(()),
        }
    }

    /// Shared guard held for the duration of one client operation.
    pub(crate) fn enter(&self) -> RwLockReadGuard<'_, ()> {
        self.lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// True while some client operation holds a shared guard.
    #[cfg(test)]
    pub(crate) fn is_entered(&self) -> bool {
        use std::sync::TryLockError;

        matches!(self.lock.try_write(), Err(TryLockError::WouldBlock))
    }

    /// Must not be called while the current thread holds a guard from `enter`.
    pub(crate) fn purge<B: Backend>(&self, backend: &B) -> Result<()> {
        let _exclusive = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        backend.clear_persistent_cache()
    }
}
