//! Debounced remote sync engine.
//!
//! Mutations never talk to the remote store directly: the controller bumps a
//! per-collection dirty generation and the engine pushes full-collection
//! snapshots after a quiet period, collapsing bursts of edits into a single
//! save. Per collection there is exactly one save in flight at a time, and a
//! generation recorded before each snapshot marks an in-flight save as
//! superseded when a newer mutation lands during it - the engine then saves
//! again rather than letting the older write win.
//!
//! Failures only move the status value to `Error`; in-memory state is never
//! rolled back, and the next mutation retries through the same path.

use super::{Collection, RecordStore};
use crate::errors::Result;
use crate::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, Notify, RwLock, watch};
use tracing::{debug, warn};

/// Passive sync health indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncStatus {
    /// No save attempted yet
    #[default]
    Idle,
    /// Last sync pass saved every dirty collection
    Synced,
    /// Last sync pass failed for at least one collection
    Error,
}

/// Per-collection dirty generation counters.
///
/// The controller marks a collection after every mutation; the engine
/// compares generations to decide what still needs saving.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    dirty: [AtomicU64; 4],
    notify: Notify,
}

impl ChangeTracker {
    /// Records a mutation of `collection` and wakes the engine.
    pub fn mark(&self, collection: Collection) {
        self.dirty[collection.index()].fetch_add(1, Ordering::SeqCst);
        self.notify.notify_one();
    }

    /// The current dirty generation of `collection`.
    pub fn generation(&self, collection: Collection) -> u64 {
        self.dirty[collection.index()].load(Ordering::SeqCst)
    }

    async fn changed(&self) {
        self.notify.notified().await;
    }
}

/// Debounced push of dirty collections to a [`RecordStore`].
pub struct SyncEngine<R> {
    store: R,
    state: Arc<RwLock<AppState>>,
    changes: Arc<ChangeTracker>,
    synced: [AtomicU64; 4],
    save_tokens: [Mutex<()>; 4],
    debounce: Duration,
    status_tx: watch::Sender<SyncStatus>,
}

impl<R: RecordStore> SyncEngine<R> {
    /// Creates an engine pushing `state` snapshots to `store`.
    pub fn new(
        store: R,
        state: Arc<RwLock<AppState>>,
        changes: Arc<ChangeTracker>,
        debounce: Duration,
    ) -> Self {
        let (status_tx, _) = watch::channel(SyncStatus::Idle);
        Self {
            store,
            state,
            changes,
            synced: Default::default(),
            save_tokens: Default::default(),
            debounce,
            status_tx,
        }
    }

    /// A receiver for the passive sync status indicator.
    pub fn status(&self) -> watch::Receiver<SyncStatus> {
        self.status_tx.subscribe()
    }

    /// Runs the debounce loop until the task is dropped.
    ///
    /// Waits for a change notification, sleeps out the debounce window so a
    /// burst of mutations collapses into one save, then flushes.
    pub async fn run(&self) {
        loop {
            self.changes.changed().await;
            tokio::time::sleep(self.debounce).await;
            self.flush().await;
        }
    }

    /// Saves every collection whose dirty generation is ahead of its last
    /// successful save, then publishes the resulting status.
    pub async fn flush(&self) -> SyncStatus {
        let mut status = SyncStatus::Synced;
        for collection in Collection::ALL {
            if let Err(e) = self.sync_collection(collection).await {
                warn!("Sync of {} failed: {e}", collection.table());
                status = SyncStatus::Error;
            }
        }
        let _ = self.status_tx.send(status);
        status
    }

    async fn sync_collection(&self, collection: Collection) -> Result<()> {
        loop {
            // Generation goal taken before the snapshot: if a mutation lands
            // after this read, the finished save is superseded and the loop
            // goes around again.
            let goal = self.changes.generation(collection);
            if self.synced[collection.index()].load(Ordering::SeqCst) >= goal {
                return Ok(());
            }

            let _token = self.save_tokens[collection.index()].lock().await;
            self.save_snapshot(collection).await?;
            self.synced[collection.index()].fetch_max(goal, Ordering::SeqCst);
            debug!(
                "Synced {} through generation {goal}",
                collection.table()
            );
        }
    }

    async fn save_snapshot(&self, collection: Collection) -> Result<()> {
        // Clone out of the lock so the save itself never blocks mutations.
        match collection {
            Collection::Vendors => {
                let vendors = self.state.read().await.vendors.clone();
                self.store.save_vendors(&vendors).await
            }
            Collection::Funds => {
                let funds = self.state.read().await.funds.clone();
                self.store.save_funds(&funds).await
            }
            Collection::Todos => {
                let todos = self.state.read().await.todos.clone();
                self.store.save_todos(&todos).await
            }
            Collection::Finances => {
                let finances = self.state.read().await.finances.clone();
                self.store.save_finances(&finances).await
            }
        }
    }
}
