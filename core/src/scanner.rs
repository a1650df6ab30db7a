//! # Fan-Out Scanner
//!
//! Issues one status probe per target concurrently and gathers the
//! results at a join barrier. Each probe owns its socket for its own
//! lifetime and returns its own `(address, status)` pair, so nothing
//! mutable is shared between in-flight queries.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::error;

use q3scout_common::config::Config;
use q3scout_common::network::addr::ServerAddr;
use q3scout_common::status::ServerStatus;

use crate::probe;

/// Probes every target concurrently and returns one entry per input
/// address, in completion order.
///
/// Concurrency is capped by `cfg.concurrency` so a large target set
/// does not exhaust file descriptors or ephemeral ports; total latency
/// stays bounded by the slowest single probe, not the sum. Offline
/// targets surface as `present = false` records, never as a batch
/// failure.
///
/// `on_probe_done`, when set, is invoked with the running completion
/// count after each probe finishes.
pub async fn scan(
    targets: HashSet<ServerAddr>,
    cfg: &Config,
    on_probe_done: Option<Box<dyn Fn(usize) + Send + Sync>>,
) -> Vec<(ServerAddr, ServerStatus)> {
    let total: usize = targets.len();
    let limit: Arc<Semaphore> = Arc::new(Semaphore::new(cfg.concurrency.max(1)));
    let done: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let callback: Option<Arc<dyn Fn(usize) + Send + Sync>> = on_probe_done.map(Arc::from);
    let status_timeout = cfg.status_timeout;

    let mut tasks: JoinSet<(ServerAddr, ServerStatus)> = JoinSet::new();
    for addr in targets {
        let limit = limit.clone();
        let done = done.clone();
        let callback = callback.clone();

        tasks.spawn(async move {
            // Holds a permit for the whole probe, socket included.
            let _permit = limit.acquire_owned().await.expect("scan semaphore closed");
            let status: ServerStatus = probe::query_status(addr, status_timeout).await;

            let completed: usize = done.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(callback) = &callback {
                callback(completed);
            }
            (addr, status)
        });
    }

    let mut results: Vec<(ServerAddr, ServerStatus)> = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(pair) => results.push(pair),
            Err(err) => error!("status probe task failed: {err}"),
        }
    }
    results
}
