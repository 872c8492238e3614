//! Pluggable observer for match-time telemetry.
//!
//! Install a recorder once at service startup via [`set_match_metrics`];
//! every call through the engine then reports to it. The slot is read-only
//! on the hot path and safe for concurrent readers.

use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

use crate::types::MatchStrategy;

/// Metrics observer for match requests.
pub trait MatchMetrics: Send + Sync {
    fn record_match(
        &self,
        strategy: MatchStrategy,
        candidates: usize,
        hits: usize,
        latency: Duration,
    );
}

/// Install or clear the global match metrics recorder.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}
