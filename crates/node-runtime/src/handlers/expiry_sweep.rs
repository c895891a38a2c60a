//! # Expiry Sweep Handler
//!
//! Periodically drops expired validation requests from the mempool.
//! Lookups already ignore expired entries; the sweep only bounds memory.

use std::time::Duration;

use sl_02_request_mempool::RequestMempoolApi;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::container::SharedMempool;

pub struct ExpirySweepHandler {
    mempool: SharedMempool,
    interval: Duration,
}

impl ExpirySweepHandler {
    pub fn new(mempool: SharedMempool, interval: Duration) -> Self {
        Self { mempool, interval }
    }

    /// One pass. Returns how many entries were dropped.
    pub fn sweep(&self) -> usize {
        let expired = self.mempool.lock().purge_expired();
        if !expired.is_empty() {
            info!("[sl-02] 🧹 Swept {} expired validation request(s)", expired.len());
            debug!("[sl-02] Expired: {:?}", expired);
        }
        expired.len()
    }

    /// Sweep on every tick until `shutdown` flips to `true` or its sender
    /// is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sweep();
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("[sl-02] Expiry sweep stopped");
                        return;
                    }
                }
            }
        }
    }
}
