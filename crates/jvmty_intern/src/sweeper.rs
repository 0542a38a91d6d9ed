//! Background purge of dead intern entries.
//!
//! One thread per registry wakes on a fixed interval. A table is purged only
//! when its size moved by at least the threshold since the size recorded at
//! its previous purge, so sweep cost is amortized against table growth.
//!
//! Tables created after the sweeper started are queued on a shared pending
//! list. The sweeper drains that list into its own tracked list at the end
//! of each cycle, so it never iterates a collection other threads extend.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, RecvTimeoutError, Sender};
use parking_lot::Mutex;

use crate::table::Sweep;

/// Tables registered since the sweeper last merged.
pub(crate) type PendingTables = Mutex<Vec<Arc<dyn Sweep>>>;

/// Result of one sweep cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Tables examined.
    pub tables: usize,
    /// Tables whose size moved less than the threshold.
    pub skipped: usize,
    /// Dead entries removed.
    pub removed: usize,
}

/// A table plus its size right after its last purge.
pub(crate) struct Tracked {
    table: Arc<dyn Sweep>,
    last_len: usize,
}

impl Tracked {
    pub(crate) fn new(table: Arc<dyn Sweep>) -> Self {
        Self { table, last_len: 0 }
    }
}

/// Handle to a running sweeper thread.
pub(crate) struct Sweeper {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

impl Sweeper {
    pub(crate) fn spawn(
        pending: Arc<PendingTables>,
        interval: Duration,
        threshold: usize,
    ) -> std::io::Result<Self> {
        let (stop, stopped) = channel::bounded::<()>(1);
        let handle = thread::Builder::new()
            .name("jvmty-intern-sweep".to_owned())
            .spawn(move || {
                tracing::debug!(?interval, threshold, "intern sweeper started");
                let mut tracked = Vec::new();
                loop {
                    match stopped.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                    let stats = sweep_cycle(&mut tracked, threshold);
                    if stats.removed > 0 {
                        tracing::debug!(?stats, "intern sweep");
                    }
                    merge_pending(&pending, &mut tracked);
                }
                tracing::debug!("intern sweeper stopped");
            })?;
        Ok(Self { stop, handle })
    }

    /// Signal the thread and wait for it to exit.
    pub(crate) fn stop(self) {
        // A full channel means a stop is already queued.
        let _ = self.stop.try_send(());
        drop(self.stop);
        if self.handle.join().is_err() {
            tracing::error!("intern sweeper thread panicked");
        }
    }
}

/// Purge every tracked table whose size moved by at least `threshold`.
pub(crate) fn sweep_cycle(tracked: &mut [Tracked], threshold: usize) -> SweepStats {
    let mut stats = SweepStats {
        tables: tracked.len(),
        ..SweepStats::default()
    };
    for entry in tracked.iter_mut() {
        let len = entry.table.approx_len();
        if len.abs_diff(entry.last_len) < threshold {
            tracing::trace!(kind = entry.table.kind_name(), len, "sweep skipped");
            stats.skipped += 1;
            continue;
        }
        stats.removed += entry.table.purge();
        entry.last_len = entry.table.approx_len();
    }
    stats
}

/// Move newly registered tables onto the tracked list.
pub(crate) fn merge_pending(pending: &PendingTables, tracked: &mut Vec<Tracked>) {
    let mut pending = pending.lock();
    if pending.is_empty() {
        return;
    }
    tracked.extend(pending.drain(..).map(Tracked::new));
}
