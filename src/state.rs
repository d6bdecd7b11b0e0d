//! Application state and the mutation controller.
//!
//! All collections live in one explicit [`AppState`] owned by the
//! [`Tracker`]. Mutation happens only through the controller's named
//! operations, which delegate to the pure functions in [`crate::core`] and
//! then handle persistence at this level: the local cache is rewritten after
//! every mutation and the sync engine is notified through the shared
//! [`ChangeTracker`]. The data functions themselves never touch storage.

use crate::core::{fund as fund_ops, todo as todo_ops, vendor as vendor_ops};
use crate::entities::{CompletedVendor, Finances, Fund, Todo, Vendor};
use crate::errors::Result;
use crate::store::cache::keys;
use crate::store::{ChangeTracker, Collection, LocalCache, RecordStore};
use chrono::Local;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// The full in-memory state: every collection the tracker owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Active vendor obligations
    pub vendors: Vec<Vendor>,
    /// Completed vendors; cache-only, never synced remotely
    pub completed_vendors: Vec<CompletedVendor>,
    /// Incoming funds
    pub funds: Vec<Fund>,
    /// Wedding checklist
    pub todos: Vec<Todo>,
    /// Personal savings singleton
    pub finances: Finances,
}

/// Controller owning the state, the local cache and the change tracker.
pub struct Tracker {
    state: Arc<RwLock<AppState>>,
    cache: LocalCache,
    changes: Arc<ChangeTracker>,
}

impl Tracker {
    /// Loads state through the fallback chain and builds the controller.
    ///
    /// Per collection: prefer the remote result when one is available
    /// (including an explicitly empty collection); on a remote failure or
    /// with no remote configured, fall back to the local cache; with no
    /// cache entry either, start empty. Whatever was loaded is written back
    /// to the cache so the next offline start sees it.
    pub async fn load<R: RecordStore>(cache: LocalCache, remote: Option<&R>) -> Self {
        let vendors = match Self::remote_vendors(remote).await {
            Some(vendors) => vendors,
            None => cache.load(keys::VENDORS).unwrap_or_default(),
        };
        let funds = match Self::remote_funds(remote).await {
            Some(funds) => funds,
            None => cache.load(keys::FUNDS).unwrap_or_default(),
        };
        let todos = match Self::remote_todos(remote).await {
            Some(todos) => todos,
            None => cache.load(keys::TODOS).unwrap_or_default(),
        };
        let finances = match Self::remote_finances(remote).await {
            Some(finances) => finances,
            None => cache.load(keys::FINANCES).unwrap_or_default(),
        };
        let completed_vendors = cache.load(keys::COMPLETED_VENDORS).unwrap_or_default();

        let state = AppState {
            vendors,
            completed_vendors,
            funds,
            todos,
            finances,
        };
        info!(
            "Loaded {} vendors, {} completed, {} funds, {} todos",
            state.vendors.len(),
            state.completed_vendors.len(),
            state.funds.len(),
            state.todos.len()
        );

        let tracker = Self {
            state: Arc::new(RwLock::new(state)),
            cache,
            changes: Arc::new(ChangeTracker::default()),
        };
        tracker.write_all_to_cache().await;
        tracker
    }

    async fn remote_vendors<R: RecordStore>(remote: Option<&R>) -> Option<Vec<Vendor>> {
        match remote?.load_vendors().await {
            Ok(result) => result,
            Err(e) => {
                warn!("Remote vendor load failed, using local cache: {e}");
                None
            }
        }
    }

    async fn remote_funds<R: RecordStore>(remote: Option<&R>) -> Option<Vec<Fund>> {
        match remote?.load_funds().await {
            Ok(result) => result,
            Err(e) => {
                warn!("Remote fund load failed, using local cache: {e}");
                None
            }
        }
    }

    async fn remote_todos<R: RecordStore>(remote: Option<&R>) -> Option<Vec<Todo>> {
        match remote?.load_todos().await {
            Ok(result) => result,
            Err(e) => {
                warn!("Remote todo load failed, using local cache: {e}");
                None
            }
        }
    }

    async fn remote_finances<R: RecordStore>(remote: Option<&R>) -> Option<Finances> {
        match remote?.load_finances().await {
            Ok(result) => result,
            Err(e) => {
                warn!("Remote finances load failed, using local cache: {e}");
                None
            }
        }
    }

    /// Shared handle to the state, for the sync engine.
    pub fn state_handle(&self) -> Arc<RwLock<AppState>> {
        Arc::clone(&self.state)
    }

    /// Shared handle to the change tracker, for the sync engine.
    pub fn changes_handle(&self) -> Arc<ChangeTracker> {
        Arc::clone(&self.changes)
    }

    /// A point-in-time copy of the full state, for rendering and export.
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    fn cache_entry<T>(&self, key: &str, value: &T)
    where
        T: serde::Serialize + ?Sized,
    {
        if let Err(e) = self.cache.save(key, value) {
            warn!("Failed to write cache entry {key}: {e}");
        }
    }

    async fn write_all_to_cache(&self) {
        let state = self.state.read().await;
        self.cache_entry(keys::VENDORS, &state.vendors);
        self.cache_entry(keys::COMPLETED_VENDORS, &state.completed_vendors);
        self.cache_entry(keys::FUNDS, &state.funds);
        self.cache_entry(keys::TODOS, &state.todos);
        self.cache_entry(keys::FINANCES, &state.finances);
    }

    async fn persist_vendors(&self) {
        let state = self.state.read().await;
        self.cache_entry(keys::VENDORS, &state.vendors);
        drop(state);
        self.changes.mark(Collection::Vendors);
    }

    async fn persist_completed(&self) {
        // Completed vendors are cache-only; no sync notification.
        let state = self.state.read().await;
        self.cache_entry(keys::COMPLETED_VENDORS, &state.completed_vendors);
    }

    async fn persist_funds(&self) {
        let state = self.state.read().await;
        self.cache_entry(keys::FUNDS, &state.funds);
        drop(state);
        self.changes.mark(Collection::Funds);
    }

    async fn persist_todos(&self) {
        let state = self.state.read().await;
        self.cache_entry(keys::TODOS, &state.todos);
        drop(state);
        self.changes.mark(Collection::Todos);
    }

    async fn persist_finances(&self) {
        let state = self.state.read().await;
        self.cache_entry(keys::FINANCES, &state.finances);
        drop(state);
        self.changes.mark(Collection::Finances);
    }

    /// Creates a vendor from a form draft.
    pub async fn add_vendor(&self, draft: vendor_ops::VendorDraft) -> Result<Vendor> {
        let vendor = vendor_ops::add_vendor(&mut self.state.write().await.vendors, draft)?;
        self.persist_vendors().await;
        Ok(vendor)
    }

    /// Replaces a vendor in place, recomputing its remainder.
    pub async fn edit_vendor(&self, updated: Vendor) -> Result<Vendor> {
        let vendor = vendor_ops::edit_vendor(&mut self.state.write().await.vendors, updated)?;
        self.persist_vendors().await;
        Ok(vendor)
    }

    /// Deletes a vendor outright.
    pub async fn delete_vendor(&self, id: i64) -> Result<Vendor> {
        let vendor = vendor_ops::delete_vendor(&mut self.state.write().await.vendors, id)?;
        self.persist_vendors().await;
        Ok(vendor)
    }

    /// Moves a vendor to the completed collection, stamped with today.
    pub async fn complete_vendor(&self, id: i64) -> Result<CompletedVendor> {
        let today = Local::now().date_naive();
        let entry = {
            let mut state = self.state.write().await;
            let AppState {
                vendors,
                completed_vendors,
                ..
            } = &mut *state;
            vendor_ops::complete_vendor(vendors, completed_vendors, id, today)?
        };
        self.persist_vendors().await;
        self.persist_completed().await;
        Ok(entry)
    }

    /// Moves a completed vendor back to the active collection.
    pub async fn restore_vendor(&self, id: i64) -> Result<Vendor> {
        let vendor = {
            let mut state = self.state.write().await;
            let AppState {
                vendors,
                completed_vendors,
                ..
            } = &mut *state;
            vendor_ops::restore_vendor(completed_vendors, vendors, id)?
        };
        self.persist_vendors().await;
        self.persist_completed().await;
        Ok(vendor)
    }

    /// Creates a fund from a form draft.
    pub async fn add_fund(&self, draft: fund_ops::FundDraft) -> Result<Fund> {
        let fund = fund_ops::add_fund(&mut self.state.write().await.funds, draft)?;
        self.persist_funds().await;
        Ok(fund)
    }

    /// Replaces a fund in place.
    pub async fn edit_fund(&self, updated: Fund) -> Result<Fund> {
        let fund = fund_ops::edit_fund(&mut self.state.write().await.funds, updated)?;
        self.persist_funds().await;
        Ok(fund)
    }

    /// Deletes a fund outright.
    pub async fn delete_fund(&self, id: i64) -> Result<Fund> {
        let fund = fund_ops::delete_fund(&mut self.state.write().await.funds, id)?;
        self.persist_funds().await;
        Ok(fund)
    }

    /// Marks a fund received as of today.
    pub async fn mark_fund_received(&self, id: i64) -> Result<Fund> {
        let today = Local::now().date_naive();
        let fund = fund_ops::mark_fund_received(&mut self.state.write().await.funds, id, today)?;
        self.persist_funds().await;
        Ok(fund)
    }

    /// Adds a checklist item.
    pub async fn add_todo(
        &self,
        task: &str,
        due_date: Option<chrono::NaiveDate>,
    ) -> Result<Todo> {
        let todo = todo_ops::add_todo(&mut self.state.write().await.todos, task, due_date)?;
        self.persist_todos().await;
        Ok(todo)
    }

    /// Flips a checklist item's completed flag.
    pub async fn toggle_todo(&self, id: i64) -> Result<Todo> {
        let todo = todo_ops::toggle_todo(&mut self.state.write().await.todos, id)?;
        self.persist_todos().await;
        Ok(todo)
    }

    /// Deletes a checklist item.
    pub async fn delete_todo(&self, id: i64) -> Result<Todo> {
        let todo = todo_ops::delete_todo(&mut self.state.write().await.todos, id)?;
        self.persist_todos().await;
        Ok(todo)
    }

    /// Replaces the savings singleton with directly edited values.
    pub async fn set_finances(&self, finances: Finances) {
        self.state.write().await.finances = finances;
        self.persist_finances().await;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::vendor::VendorDraft;
    use crate::errors::Error;
    use crate::test_utils::test_vendor;
    use tempfile::TempDir;

    /// Load-only mock remote store; `None` everywhere unless primed.
    #[derive(Default)]
    struct MockRemote {
        vendors: Option<Vec<Vendor>>,
        fail: bool,
    }

    impl RecordStore for MockRemote {
        async fn load_vendors(&self) -> Result<Option<Vec<Vendor>>> {
            if self.fail {
                return Err(Error::Remote {
                    message: "unreachable".to_string(),
                });
            }
            Ok(self.vendors.clone())
        }
        async fn save_vendors(&self, _vendors: &[Vendor]) -> Result<()> {
            Ok(())
        }
        async fn load_funds(&self) -> Result<Option<Vec<Fund>>> {
            Ok(None)
        }
        async fn save_funds(&self, _funds: &[Fund]) -> Result<()> {
            Ok(())
        }
        async fn load_todos(&self) -> Result<Option<Vec<Todo>>> {
            Ok(None)
        }
        async fn save_todos(&self, _todos: &[Todo]) -> Result<()> {
            Ok(())
        }
        async fn load_finances(&self) -> Result<Option<Finances>> {
            Ok(None)
        }
        async fn save_finances(&self, _finances: &Finances) -> Result<()> {
            Ok(())
        }
    }

    fn temp_cache() -> (TempDir, LocalCache) {
        let dir = TempDir::new().unwrap();
        let cache = LocalCache::new(dir.path()).unwrap();
        (dir, cache)
    }

    fn draft(name: &str, total: f64, paid: f64) -> VendorDraft {
        VendorDraft {
            name: name.to_string(),
            total,
            paid,
            ..VendorDraft::default()
        }
    }

    #[tokio::test]
    async fn test_load_empty_everywhere_starts_empty() {
        let (_dir, cache) = temp_cache();
        let tracker = Tracker::load::<MockRemote>(cache, None).await;
        assert_eq!(tracker.snapshot().await, AppState::default());
    }

    #[tokio::test]
    async fn test_load_prefers_remote_over_cache() {
        let (_dir, cache) = temp_cache();
        cache
            .save(keys::VENDORS, &vec![test_vendor("Stale", 1.0, 0.0)])
            .unwrap();

        let remote = MockRemote {
            vendors: Some(vec![test_vendor("Fresh", 2.0, 0.0)]),
            fail: false,
        };
        let tracker = Tracker::load(cache, Some(&remote)).await;
        let state = tracker.snapshot().await;
        assert_eq!(state.vendors.len(), 1);
        assert_eq!(state.vendors[0].name, "Fresh");
    }

    #[tokio::test]
    async fn test_load_remote_empty_beats_cache() {
        // Explicitly empty remote data wins over a populated cache.
        let (_dir, cache) = temp_cache();
        cache
            .save(keys::VENDORS, &vec![test_vendor("Stale", 1.0, 0.0)])
            .unwrap();

        let remote = MockRemote {
            vendors: Some(Vec::new()),
            fail: false,
        };
        let tracker = Tracker::load(cache, Some(&remote)).await;
        assert!(tracker.snapshot().await.vendors.is_empty());
    }

    #[tokio::test]
    async fn test_load_remote_failure_falls_back_to_cache() {
        let (_dir, cache) = temp_cache();
        cache
            .save(keys::VENDORS, &vec![test_vendor("Cached", 1.0, 0.0)])
            .unwrap();

        let remote = MockRemote {
            vendors: None,
            fail: true,
        };
        let tracker = Tracker::load(cache, Some(&remote)).await;
        let state = tracker.snapshot().await;
        assert_eq!(state.vendors.len(), 1);
        assert_eq!(state.vendors[0].name, "Cached");
    }

    #[tokio::test]
    async fn test_add_vendor_writes_cache_and_marks_changes() {
        let (_dir, cache) = temp_cache();
        let tracker = Tracker::load::<MockRemote>(cache.clone(), None).await;
        let before = tracker.changes_handle().generation(Collection::Vendors);

        tracker.add_vendor(draft("Cake", 1380.0, 690.0)).await.unwrap();

        let cached: Vec<Vendor> = cache.load(keys::VENDORS).unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].remaining, 690.0);
        assert!(tracker.changes_handle().generation(Collection::Vendors) > before);
    }

    #[tokio::test]
    async fn test_complete_and_restore_through_controller() {
        let (_dir, cache) = temp_cache();
        let tracker = Tracker::load::<MockRemote>(cache.clone(), None).await;
        let vendor = tracker.add_vendor(draft("Cake", 1380.0, 1380.0)).await.unwrap();

        tracker.complete_vendor(vendor.id).await.unwrap();
        let state = tracker.snapshot().await;
        assert!(state.vendors.is_empty());
        assert_eq!(state.completed_vendors.len(), 1);

        let cached: Vec<CompletedVendor> = cache.load(keys::COMPLETED_VENDORS).unwrap();
        assert_eq!(cached.len(), 1);

        tracker.restore_vendor(vendor.id).await.unwrap();
        let state = tracker.snapshot().await;
        assert_eq!(state.vendors.len(), 1);
        assert!(state.completed_vendors.is_empty());
    }

    #[tokio::test]
    async fn test_failed_mutation_marks_nothing() {
        let (_dir, cache) = temp_cache();
        let tracker = Tracker::load::<MockRemote>(cache, None).await;
        let before = tracker.changes_handle().generation(Collection::Vendors);

        let result = tracker.add_vendor(draft("  ", 1.0, 0.0)).await;
        assert!(result.is_err());
        assert_eq!(
            tracker.changes_handle().generation(Collection::Vendors),
            before
        );
    }

    #[tokio::test]
    async fn test_set_finances_persists() {
        let (_dir, cache) = temp_cache();
        let tracker = Tracker::load::<MockRemote>(cache.clone(), None).await;

        tracker
            .set_finances(Finances {
                joint_savings: 2500.0,
                ..Finances::default()
            })
            .await;

        let cached: Finances = cache.load(keys::FINANCES).unwrap();
        assert_eq!(cached.joint_savings, 2500.0);
    }
}
