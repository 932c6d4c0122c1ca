use crate::models::MonitorSharedState;
use std::sync::Arc;
use tokio::sync::watch;

/// Single-writer state cell carrying the latest pushed snapshot. Each
/// `publish` replaces the whole snapshot; subscribers always observe the
/// most recent value and are woken on every replacement.
pub struct SnapshotFeed {
    tx: watch::Sender<Arc<MonitorSharedState>>,
}

impl SnapshotFeed {
    pub fn new(initial: MonitorSharedState) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx }
    }

    /// Replace the current snapshot and wake subscribers.
    pub fn publish(&self, snapshot: MonitorSharedState) {
        self.tx.send_replace(Arc::new(snapshot));
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<MonitorSharedState>> {
        self.tx.subscribe()
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> Arc<MonitorSharedState> {
        self.tx.borrow().clone()
    }
}

impl Default for SnapshotFeed {
    fn default() -> Self {
        Self::new(MonitorSharedState::default())
    }
}
