//! Weak-reference interning for immutable values.
//!
//! An [`InternRegistry`] gives every structurally-equal value of a kind one
//! shared `Arc`, for as long as any caller keeps that `Arc` alive. The
//! registry only observes values through `Weak`, so it never extends a
//! value's lifetime; dead entries are purged by a background sweeper (or
//! inline, with [`InternStrategy::Locked`]).
//!
//! ```
//! use std::sync::Arc;
//! use jvmty_intern::{InternConfig, InternRegistry};
//!
//! let registry = InternRegistry::new(InternConfig::default());
//! let a = registry.acquire("Ljava/lang/String;", Arc::new(String::from("java/lang/String")));
//! let b = registry.acquire("Ljava/lang/String;", Arc::new(String::from("java/lang/String")));
//! assert!(Arc::ptr_eq(&a, &b));
//! ```

mod config;
mod registry;
mod sweeper;
mod table;

pub use config::{
    InternConfig, InternStrategy, DEFAULT_SWEEP_INTERVAL, DEFAULT_SWEEP_THRESHOLD, DISABLED_ENV,
    STRATEGY_ENV,
};
pub use registry::{InternRegistry, KindStats};
pub use sweeper::SweepStats;
