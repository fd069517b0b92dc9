use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::models::AppDataSnapshot;

/// Holds the live snapshot. `None` until the first load cycle finishes;
/// afterwards each publish swaps the whole snapshot at once.
#[derive(Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<AppDataSnapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Arc<AppDataSnapshot>> {
        self.current.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Replace the live snapshot; returns the published handle
    pub fn publish(&self, snapshot: AppDataSnapshot) -> Arc<AppDataSnapshot> {
        let snapshot = Arc::new(snapshot);
        *self.current.write() = Some(Arc::clone(&snapshot));
        debug!(
            "Published snapshot ({} items, fallback: {})",
            snapshot.menu.len(),
            snapshot.is_fallback
        );
        snapshot
    }
}
