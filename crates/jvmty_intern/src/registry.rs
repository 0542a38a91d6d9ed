//! The intern registry: one weak table per value kind.
//!
//! A kind is the Rust type of the canonical value. Each kind gets its own
//! table on first use, so hot kinds never contend with cold ones.
//!
//! # Thread Safety
//! Lookups take a shard read lock on the kind directory and on the kind's
//! table. Registering a brand-new kind takes a directory shard write lock
//! and the pending-list mutex once per kind.

use std::any::{Any, TypeId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use parking_lot::Mutex;
use rustc_hash::FxBuildHasher;

use crate::config::{InternConfig, InternStrategy};
use crate::sweeper::{sweep_cycle, PendingTables, SweepStats, Sweeper, Tracked};
use crate::table::{KindTable, Sweep};

/// Directory entry for one kind: the typed table and its sweep view.
struct KindSlot {
    table: Arc<dyn Any + Send + Sync>,
    sweep: Arc<dyn Sweep>,
}

/// Per-kind table size, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindStats {
    pub kind: &'static str,
    pub entries: usize,
}

/// Weak-reference canonicalization registry.
///
/// `acquire` maps a structural key to one shared `Arc` per kind for as long
/// as some caller keeps that `Arc` alive. The registry itself only holds
/// `Weak` references.
pub struct InternRegistry {
    enabled: AtomicBool,
    config: InternConfig,
    kinds: DashMap<TypeId, KindSlot, FxBuildHasher>,
    pending: Arc<PendingTables>,
    sweeper: Mutex<Option<Sweeper>>,
}

static GLOBAL: OnceLock<InternRegistry> = OnceLock::new();

impl InternRegistry {
    /// Create an isolated registry.
    ///
    /// With the concurrent strategy this starts a sweeper thread, stopped by
    /// [`shutdown`](Self::shutdown) or on drop. If the thread cannot be
    /// spawned the registry still works; dead entries are then only removed
    /// by [`purge_dead`](Self::purge_dead).
    pub fn new(config: InternConfig) -> Self {
        let pending: Arc<PendingTables> = Arc::new(Mutex::new(Vec::new()));
        let sweeper = if config.strategy.uses_sweeper() {
            match Sweeper::spawn(
                Arc::clone(&pending),
                config.sweep_interval,
                config.sweep_threshold,
            ) {
                Ok(sweeper) => Some(sweeper),
                Err(err) => {
                    tracing::warn!(%err, "failed to start intern sweeper");
                    None
                }
            }
        } else {
            None
        };
        Self {
            enabled: AtomicBool::new(config.enabled),
            config,
            kinds: DashMap::with_hasher(FxBuildHasher),
            pending,
            sweeper: Mutex::new(sweeper),
        }
    }

    /// The process-wide registry, configured from the environment on first
    /// use (see [`InternConfig::from_env`]).
    pub fn global() -> &'static InternRegistry {
        GLOBAL.get_or_init(|| InternRegistry::new(InternConfig::from_env()))
    }

    /// Canonical value for `key`, registering `candidate` if none is alive.
    ///
    /// With interning disabled, returns `candidate` unchanged.
    pub fn acquire<T: Send + Sync + 'static>(&self, key: &str, candidate: Arc<T>) -> Arc<T> {
        if !self.is_enabled() {
            return candidate;
        }
        self.with_table(|table: &KindTable<T>| table.acquire_with(key, || candidate))
    }

    /// Like [`acquire`](Self::acquire), but only builds the candidate when
    /// no live canonical value exists.
    pub fn acquire_with<T: Send + Sync + 'static>(
        &self,
        key: &str,
        make: impl FnOnce() -> T,
    ) -> Arc<T> {
        if !self.is_enabled() {
            return Arc::new(make());
        }
        self.with_table(|table: &KindTable<T>| table.acquire_with(key, || Arc::new(make())))
    }

    /// Live canonical value for `key`, without inserting anything.
    ///
    /// Always `None` while interning is disabled.
    pub fn try_find<T: Send + Sync + 'static>(&self, key: &str) -> Option<Arc<T>> {
        if !self.is_enabled() {
            return None;
        }
        let table = self.kinds.get(&TypeId::of::<T>()).map(|slot| Arc::clone(&slot.table))?;
        table.downcast_ref::<KindTable<T>>()?.find(key)
    }

    /// Approximate number of entries for kind `T`, including dead entries
    /// not yet purged. Diagnostic only.
    pub fn live_count<T: Send + Sync + 'static>(&self) -> usize {
        self.kinds
            .get(&TypeId::of::<T>())
            .map_or(0, |slot| slot.sweep.approx_len())
    }

    /// Entry counts of every registered kind.
    pub fn stats(&self) -> Vec<KindStats> {
        let mut stats: Vec<KindStats> = self
            .kinds
            .iter()
            .map(|slot| KindStats {
                kind: slot.sweep.kind_name(),
                entries: slot.sweep.approx_len(),
            })
            .collect();
        stats.sort_by(|a, b| a.kind.cmp(b.kind));
        stats
    }

    /// Number of kinds that have a table.
    pub fn kind_count(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn interning on or off.
    ///
    /// Values created while disabled are never canonical; nothing else
    /// changes.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn strategy(&self) -> InternStrategy {
        self.config.strategy
    }

    pub fn config(&self) -> &InternConfig {
        &self.config
    }

    /// Purge dead entries from every table now, regardless of thresholds.
    pub fn purge_dead(&self) -> SweepStats {
        let mut tracked: Vec<Tracked> = self
            .kinds
            .iter()
            .map(|slot| Tracked::new(Arc::clone(&slot.sweep)))
            .collect();
        // Threshold 0: every table is purged.
        sweep_cycle(&mut tracked, 0)
    }

    /// Stop the sweeper thread, if running. Interning keeps working.
    pub fn shutdown(&self) {
        if let Some(sweeper) = self.sweeper.lock().take() {
            sweeper.stop();
        }
    }

    /// Whether a sweeper thread is running.
    pub fn has_sweeper(&self) -> bool {
        self.sweeper.lock().is_some()
    }

    /// Run `f` against the table for kind `T`, creating it on first use.
    ///
    /// The directory shard lock is released before `f` runs.
    fn with_table<T, R>(&self, f: impl FnOnce(&KindTable<T>) -> R) -> R
    where
        T: Send + Sync + 'static,
    {
        let kind = TypeId::of::<T>();
        let table = loop {
            if let Some(slot) = self.kinds.get(&kind) {
                break Arc::clone(&slot.table);
            }
            self.register::<T>();
        };
        match table.downcast_ref::<KindTable<T>>() {
            Some(table) => f(table),
            None => unreachable!("intern table for {kind:?} has a foreign type"),
        }
    }

    #[cold]
    fn register<T: Send + Sync + 'static>(&self) {
        self.kinds.entry(TypeId::of::<T>()).or_insert_with(|| {
            let table = Arc::new(KindTable::<T>::new(self.config.strategy));
            tracing::debug!(
                kind = table.kind_name(),
                strategy = self.config.strategy.name(),
                "registered intern table"
            );
            let sweep: Arc<dyn Sweep> = table.clone();
            if self.config.strategy.uses_sweeper() {
                self.pending.lock().push(Arc::clone(&sweep));
            }
            KindSlot { table, sweep }
        });
    }
}

impl Default for InternRegistry {
    fn default() -> Self {
        Self::new(InternConfig::default())
    }
}

impl Drop for InternRegistry {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for InternRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternRegistry")
            .field("enabled", &self.is_enabled())
            .field("strategy", &self.config.strategy)
            .field("kinds", &self.kind_count())
            .finish_non_exhaustive()
    }
}

/// Merge any pending tables without waiting for the sweeper. Test helper.
#[cfg(test)]
pub(crate) fn drain_pending(registry: &InternRegistry) -> usize {
    let mut tracked = Vec::new();
    crate::sweeper::merge_pending(&registry.pending, &mut tracked);
    tracked.len()
}
