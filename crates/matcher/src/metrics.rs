// Metrics hooks for the `matcher` crate.
//
// Callers install a global `ProcessMetrics` implementation via
// [`set_process_metrics`], then every [`Engine::process`](crate::Engine::process)
// call reports its latency, token count and match count. This keeps
// instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for processing calls.
pub trait ProcessMetrics: Send + Sync {
    /// Record the outcome of one `process` call.
    ///
    /// `token_count` is the length of the returned chain and `match_count` the
    /// number of phrase occurrences recorded while walking it.
    fn record_process(&self, latency: Duration, token_count: usize, match_count: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn ProcessMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn ProcessMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn ProcessMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global process metrics recorder.
///
/// This is typically called once during service startup so all engines share
/// the same metrics backend.
pub fn set_process_metrics(recorder: Option<Arc<dyn ProcessMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
