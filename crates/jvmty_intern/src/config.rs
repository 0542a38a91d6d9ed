//! Intern registry configuration.
//!
//! The process-wide registry reads its configuration from the environment
//! once, on first use. Isolated registries take an explicit [`InternConfig`].

use std::time::Duration;

/// How often the background sweeper wakes up.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_millis(500);

/// Minimum change in a table's size (since its last purge) before the
/// sweeper purges it again.
pub const DEFAULT_SWEEP_THRESHOLD: usize = 10_000;

/// Presence disables interning for the process-wide registry.
pub const DISABLED_ENV: &str = "JVMTY_INTERNING_DISABLED";

/// Selects the [`InternStrategy`] of the process-wide registry.
pub const STRATEGY_ENV: &str = "JVMTY_INTERN_STRATEGY";

/// Storage and eviction strategy for per-kind tables.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InternStrategy {
    /// Sharded concurrent table per kind, dead entries purged by a
    /// background sweeper.
    #[default]
    Concurrent,
    /// One mutex-guarded map per kind, dead entries purged inline whenever
    /// the map has doubled since its last purge. No background thread.
    ///
    /// Lower complexity, fine for small corpora; every lookup takes the lock.
    Locked,
}

impl InternStrategy {
    /// Parse a strategy name (`concurrent` or `locked`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Some(InternStrategy::Concurrent),
            "locked" => Some(InternStrategy::Locked),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InternStrategy::Concurrent => "concurrent",
            InternStrategy::Locked => "locked",
        }
    }

    /// Whether registries using this strategy run a background sweeper.
    #[inline]
    pub fn uses_sweeper(self) -> bool {
        matches!(self, InternStrategy::Concurrent)
    }
}

/// Configuration for an [`InternRegistry`](crate::InternRegistry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InternConfig {
    /// When false, `acquire` returns its candidate unchanged.
    pub enabled: bool,
    pub strategy: InternStrategy,
    pub sweep_interval: Duration,
    pub sweep_threshold: usize,
}

impl Default for InternConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strategy: InternStrategy::default(),
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            sweep_threshold: DEFAULT_SWEEP_THRESHOLD,
        }
    }
}

impl InternConfig {
    /// Build a configuration from `JVMTY_INTERNING_DISABLED` and
    /// `JVMTY_INTERN_STRATEGY`, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if std::env::var_os(DISABLED_ENV).is_some() {
            config.enabled = false;
        }
        if let Ok(name) = std::env::var(STRATEGY_ENV) {
            match InternStrategy::from_name(&name) {
                Some(strategy) => config.strategy = strategy,
                None => tracing::warn!(
                    value = %name,
                    "unknown {STRATEGY_ENV}, using {}",
                    config.strategy.name()
                ),
            }
        }
        config
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: InternStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    #[must_use]
    pub fn with_sweep_threshold(mut self, threshold: usize) -> Self {
        self.sweep_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests;
