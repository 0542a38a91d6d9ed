//! Per-kind intern tables.
//!
//! A table maps structural keys to weak references of canonical values of a
//! single kind. Tables never keep a value alive: once the last strong holder
//! drops it, its entry is dead and only waits to be purged.

use std::sync::{Arc, Weak};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::config::InternStrategy;

/// Smallest size at which a locked table purges inline.
const MIN_LOCKED_PURGE: usize = 64;

/// Type-erased view of a table, used by the sweeper and by diagnostics.
pub(crate) trait Sweep: Send + Sync {
    fn kind_name(&self) -> &'static str;

    /// Number of entries, live or dead.
    fn approx_len(&self) -> usize;

    /// Remove dead entries, returning how many were removed.
    fn purge(&self) -> usize;
}

/// Entries of a locked table plus the size at which it purges next.
struct LockedEntries<T> {
    map: FxHashMap<Box<str>, Weak<T>>,
    purge_at: usize,
}

impl<T> LockedEntries<T> {
    fn purge(&mut self) -> usize {
        let before = self.map.len();
        self.map.retain(|_, weak| weak.strong_count() > 0);
        self.purge_at = (self.map.len() * 2).max(MIN_LOCKED_PURGE);
        before - self.map.len()
    }
}

enum Storage<T> {
    Concurrent(DashMap<Box<str>, Weak<T>, FxBuildHasher>),
    Locked(Mutex<LockedEntries<T>>),
}

/// Weak canonicalization table for one kind of value.
pub(crate) struct KindTable<T> {
    kind_name: &'static str,
    storage: Storage<T>,
}

impl<T: Send + Sync + 'static> KindTable<T> {
    pub(crate) fn new(strategy: InternStrategy) -> Self {
        let storage = match strategy {
            InternStrategy::Concurrent => {
                Storage::Concurrent(DashMap::with_hasher(FxBuildHasher))
            }
            InternStrategy::Locked => Storage::Locked(Mutex::new(LockedEntries {
                map: FxHashMap::default(),
                purge_at: MIN_LOCKED_PURGE,
            })),
        };
        Self {
            kind_name: std::any::type_name::<T>(),
            storage,
        }
    }

    /// Live canonical value for `key`, if any.
    pub(crate) fn find(&self, key: &str) -> Option<Arc<T>> {
        match &self.storage {
            Storage::Concurrent(map) => map.get(key).and_then(|weak| weak.upgrade()),
            Storage::Locked(entries) => entries.lock().map.get(key).and_then(Weak::upgrade),
        }
    }

    /// Return the live canonical value for `key`, or register the value
    /// produced by `make` as canonical.
    ///
    /// `make` runs at most once and only when no live value exists.
    pub(crate) fn acquire_with(&self, key: &str, make: impl FnOnce() -> Arc<T>) -> Arc<T> {
        match &self.storage {
            Storage::Concurrent(map) => {
                // Fast path: shard read lock only.
                if let Some(live) = map.get(key).and_then(|weak| weak.upgrade()) {
                    return live;
                }
                match map.entry(Box::from(key)) {
                    Entry::Occupied(mut slot) => {
                        // Raced with another insert, or the entry is dead.
                        if let Some(live) = slot.get().upgrade() {
                            return live;
                        }
                        let canonical = make();
                        slot.insert(Arc::downgrade(&canonical));
                        canonical
                    }
                    Entry::Vacant(slot) => {
                        let canonical = make();
                        slot.insert(Arc::downgrade(&canonical));
                        canonical
                    }
                }
            }
            Storage::Locked(entries) => {
                let mut entries = entries.lock();
                if let Some(live) = entries.map.get(key).and_then(Weak::upgrade) {
                    return live;
                }
                let canonical = make();
                entries.map.insert(Box::from(key), Arc::downgrade(&canonical));
                if entries.map.len() >= entries.purge_at {
                    let removed = entries.purge();
                    tracing::trace!(kind = self.kind_name, removed, "inline purge");
                }
                canonical
            }
        }
    }
}

impl<T: Send + Sync + 'static> Sweep for KindTable<T> {
    fn kind_name(&self) -> &'static str {
        self.kind_name
    }

    fn approx_len(&self) -> usize {
        match &self.storage {
            Storage::Concurrent(map) => map.len(),
            Storage::Locked(entries) => entries.lock().map.len(),
        }
    }

    fn purge(&self) -> usize {
        match &self.storage {
            Storage::Concurrent(map) => {
                let before = map.len();
                // Locks one shard at a time.
                map.retain(|_, weak| weak.strong_count() > 0);
                before.saturating_sub(map.len())
            }
            Storage::Locked(entries) => entries.lock().purge(),
        }
    }
}

#[cfg(test)]
mod tests;
